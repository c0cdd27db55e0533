use super::Conditional;
use crate::cache::CacheView;
use crate::cancel::Cancellation;
use crate::mapper::Mapper;
use crate::model::Model;
use ovsdb_core::schema::DatabaseSchema;
use ovsdb_core::wire::Condition;
use ovsdb_core::{Error, Result};

/// A conditional driven by a caller-supplied predicate over cached rows.
///
/// `generate` enumerates the rows cached for the table, applies the
/// predicate to each, and emits one operation entry per match conditioned
/// on that row's `_uuid`. The result reflects the cache at generation
/// time; callers that need a stable view must quiesce the cache.
pub struct PredicateConditional<'a, M> {
    mapper: Mapper<'a>,
    table: String,
    predicate: Box<dyn Fn(&M) -> bool + Send + Sync + 'a>,
    cache: &'a dyn CacheView<M>,
    cancel: Option<Cancellation>,
}

impl<'a, M: Model> PredicateConditional<'a, M> {
    pub fn new(
        schema: &'a DatabaseSchema,
        table: impl Into<String>,
        cache: &'a dyn CacheView<M>,
        predicate: impl Fn(&M) -> bool + Send + Sync + 'a,
    ) -> Self {
        Self {
            mapper: Mapper::new(schema),
            table: table.into(),
            predicate: Box::new(predicate),
            cache,
            cancel: None,
        }
    }

    /// Attaches a cooperative cancellation signal, checked once per
    /// enumerated row.
    pub fn with_cancellation(mut self, cancel: Cancellation) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

impl<M: Model> Conditional<M> for PredicateConditional<'_, M> {
    fn generate(&self) -> Result<Vec<Vec<Condition>>> {
        let view = self
            .cache
            .table(&self.table)
            .ok_or_else(|| Error::not_found(format!("no cached table {}", self.table)))?;

        let mut generated = Vec::new();
        let mut scanned = 0usize;
        for uuid in view.rows() {
            if self.cancel.as_ref().is_some_and(Cancellation::is_cancelled) {
                return Err(Error::cancelled());
            }
            let Some(row) = view.row(&uuid) else {
                continue;
            };
            scanned += 1;
            if (self.predicate)(&row) {
                generated.push(self.mapper.equality_conditions(&self.table, &row, &[])?);
            }
        }
        tracing::trace!(
            table = %self.table,
            scanned,
            matched = generated.len(),
            "generated predicate conditions"
        );
        Ok(generated)
    }

    fn matches(&self, model: &M) -> Result<bool> {
        Ok((self.predicate)(model))
    }

    fn table(&self) -> &str {
        &self.table
    }
}
