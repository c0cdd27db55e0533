use super::Conditional;
use crate::model::Model;
use ovsdb_core::wire::Condition;
use ovsdb_core::{Error, Result};

/// A conditional that wraps an error hit at construction time.
///
/// Condition builders return this instead of failing, so errors travel
/// alongside successful conditionals through one API and surface once,
/// when the condition is used.
pub struct ErrorConditional {
    err: Error,
}

impl ErrorConditional {
    pub fn new(err: Error) -> Self {
        Self {
            err: Error::condition_error(err),
        }
    }
}

impl<M: Model> Conditional<M> for ErrorConditional {
    fn generate(&self) -> Result<Vec<Vec<Condition>>> {
        Err(self.err.clone())
    }

    fn matches(&self, _model: &M) -> Result<bool> {
        Err(self.err.clone())
    }

    fn table(&self) -> &str {
        ""
    }
}
