#[macro_use]
mod macros;

mod error;
pub use error::Error;

pub mod schema;
pub use schema::DatabaseSchema;

pub mod native;
pub use native::{Atom, FieldShape, FieldValue};

pub mod wire;

pub mod codec;

/// A Result type alias that uses this crate's [`Error`] type.
pub type Result<T, E = Error> = core::result::Result<T, E>;
