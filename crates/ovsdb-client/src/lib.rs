//! Typed model mapping for OVSDB clients.
//!
//! A [`Model`] binds the fields of a user-defined record to the columns of
//! one table. The [`Mapper`] translates models to and from the wire row
//! form using a parsed [`DatabaseSchema`], and the [`Conditional`]
//! implementations turn models and predicates into the `where` clauses of
//! operations.
//!
//! [`DatabaseSchema`]: ovsdb_core::DatabaseSchema

pub mod cache;
pub use cache::{CacheView, TableView};

pub mod cancel;
pub use cancel::Cancellation;

pub mod cond;
pub use cond::{Conditional, FieldCondition};

pub mod mapper;
pub use mapper::Mapper;

pub mod model;
pub use model::Model;

pub mod ops;

pub use ovsdb_core::{Error, Result};
