//! The conditional API: builders that turn models and predicates into the
//! `where` clauses attached to operations.
//!
//! Conditionals are short-lived: built at the call site, consumed once.
//! Errors hit at construction time travel through the same surface via
//! [`ErrorConditional`] and resurface when the conditional is used.

mod equality;
pub use equality::EqualityConditional;

mod explicit;
pub use explicit::ExplicitConditional;

mod error;
pub use error::ErrorConditional;

mod predicate;
pub use predicate::PredicateConditional;

use crate::model::Model;
use ovsdb_core::native::FieldValue;
use ovsdb_core::wire::{Condition, Function};
use ovsdb_core::Result;

/// A bundle that can produce the `where` clauses for operations and,
/// where possible, match candidate rows locally.
pub trait Conditional<M: Model> {
    /// The `where` lists to attach to operations: one outer entry per
    /// operation to issue, each a conjunctive list of conditions.
    fn generate(&self) -> Result<Vec<Vec<Condition>>>;

    /// Whether a candidate cached row satisfies the condition.
    fn matches(&self, model: &M) -> Result<bool>;

    /// The table this conditional is associated with.
    fn table(&self) -> &str;
}

/// A caller-supplied condition over one model field: a field selector, a
/// comparison function and a native value the codec renders at
/// generation time.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCondition {
    pub field: String,
    pub function: Function,
    pub value: FieldValue,
}

impl FieldCondition {
    pub fn new(field: impl Into<String>, function: Function, value: impl Into<FieldValue>) -> Self {
        Self {
            field: field.into(),
            function,
            value: value.into(),
        }
    }
}
