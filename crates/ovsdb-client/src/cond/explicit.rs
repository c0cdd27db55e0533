use super::{Conditional, FieldCondition};
use crate::mapper::Mapper;
use crate::model::Model;
use ovsdb_core::codec;
use ovsdb_core::schema::DatabaseSchema;
use ovsdb_core::wire::Condition;
use ovsdb_core::{Error, Result};

/// A conditional built from caller-supplied `(field, function, value)`
/// triples instead of model equality.
///
/// Explicit conditions carry arbitrary comparison operators, so they
/// cannot be evaluated locally against a model; `matches` always fails.
pub struct ExplicitConditional<'a, M> {
    mapper: Mapper<'a>,
    table: String,
    model: M,
    conditions: Vec<FieldCondition>,
    all: bool,
}

impl<'a, M: Model> ExplicitConditional<'a, M> {
    pub fn new(
        schema: &'a DatabaseSchema,
        table: impl Into<String>,
        all: bool,
        model: M,
        conditions: Vec<FieldCondition>,
    ) -> Self {
        Self {
            mapper: Mapper::new(schema),
            table: table.into(),
            model,
            conditions,
            all,
        }
    }

    fn render(&self, condition: &FieldCondition) -> Result<Condition> {
        if !self.model.binds(&condition.field) {
            return Err(Error::invalid_field_reference(&condition.field));
        }
        let column_schema = self
            .mapper
            .schema()
            .column(&self.table, &condition.field)
            .ok_or_else(|| Error::unknown_column(&self.table, &condition.field))?;
        let value = codec::to_wire(&condition.field, column_schema, &condition.value)?;
        Ok(Condition::new(
            condition.field.clone(),
            condition.function,
            value,
        ))
    }
}

impl<M: Model> Conditional<M> for ExplicitConditional<'_, M> {
    fn generate(&self) -> Result<Vec<Vec<Condition>>> {
        let rendered = self
            .conditions
            .iter()
            .map(|condition| self.render(condition))
            .collect::<Result<Vec<_>>>()?;
        if self.all {
            Ok(vec![rendered])
        } else {
            Ok(rendered.into_iter().map(|c| vec![c]).collect())
        }
    }

    fn matches(&self, _model: &M) -> Result<bool> {
        Err(Error::unsupported_operation(
            "comparison not supported for explicit conditions",
        ))
    }

    fn table(&self) -> &str {
        &self.table
    }
}
