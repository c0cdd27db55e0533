use super::Conditional;
use crate::mapper::Mapper;
use crate::model::Model;
use ovsdb_core::schema::DatabaseSchema;
use ovsdb_core::wire::Condition;
use ovsdb_core::Result;

/// A conditional that matches rows equal to a model under the best
/// available key: explicit field selectors, the `_uuid` binding, or the
/// first populated declared index.
pub struct EqualityConditional<'a, M> {
    mapper: Mapper<'a>,
    table: String,
    model: M,
    fields: Vec<String>,
    all: bool,
}

impl<'a, M: Model> EqualityConditional<'a, M> {
    /// Builds an equality conditional over `model`.
    ///
    /// When `all` is set, `generate` aggregates every derived condition
    /// into a single operation's conjunction; otherwise each condition
    /// becomes its own operation entry.
    pub fn new(
        schema: &'a DatabaseSchema,
        table: impl Into<String>,
        all: bool,
        model: M,
        fields: &[&str],
    ) -> Self {
        Self {
            mapper: Mapper::new(schema),
            table: table.into(),
            model,
            fields: fields.iter().map(|s| s.to_string()).collect(),
            all,
        }
    }

    fn field_refs(&self) -> Vec<&str> {
        self.fields.iter().map(String::as_str).collect()
    }
}

impl<M: Model> Conditional<M> for EqualityConditional<'_, M> {
    fn generate(&self) -> Result<Vec<Vec<Condition>>> {
        let conditions =
            self.mapper
                .equality_conditions(&self.table, &self.model, &self.field_refs())?;
        if self.all {
            Ok(vec![conditions])
        } else {
            Ok(conditions.into_iter().map(|c| vec![c]).collect())
        }
    }

    fn matches(&self, model: &M) -> Result<bool> {
        self.mapper
            .equal_fields(&self.table, &self.model, model, &self.field_refs())
    }

    fn table(&self) -> &str {
        &self.table
    }
}
