use super::{ColumnSchema, TableSchema};
use crate::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;

/// A parsed database schema: the table schemas of one database, keyed by
/// table name in declaration order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatabaseSchema {
    pub name: String,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub cksum: Option<String>,

    pub tables: IndexMap<String, TableSchema>,
}

impl DatabaseSchema {
    /// Parses a schema from its RFC 7047 §3 JSON text.
    ///
    /// Parse failures are fatal at load time; nothing downstream sees a
    /// partially parsed schema.
    pub fn from_json(src: &str) -> Result<Self> {
        let schema: Self =
            serde_json::from_str(src).map_err(|err| Error::invalid_schema(err.to_string()))?;
        tracing::debug!(
            database = %schema.name,
            tables = schema.tables.len(),
            "parsed database schema"
        );
        Ok(schema)
    }

    /// Parses a schema from an already-decoded JSON value.
    pub fn from_value(src: serde_json::Value) -> Result<Self> {
        serde_json::from_value(src).map_err(|err| Error::invalid_schema(err.to_string()))
    }

    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.get(name)
    }

    pub fn column(&self, table: &str, column: &str) -> Option<&ColumnSchema> {
        self.table(table)?.column(column)
    }
}
