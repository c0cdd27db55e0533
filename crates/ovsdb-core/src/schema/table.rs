use super::{AtomicKind, BaseType, ColumnSchema, ColumnType, Limit};
use indexmap::IndexMap;
use serde::Deserialize;
use std::sync::LazyLock;

/// The reserved identifier column every table carries implicitly.
pub const UUID_COLUMN: &str = "_uuid";

// The synthetic schema behind `_uuid` lookups: a required, immutable uuid.
static UUID_COLUMN_SCHEMA: LazyLock<ColumnSchema> = LazyLock::new(|| ColumnSchema {
    ty: ColumnType {
        key: BaseType::new(AtomicKind::Uuid),
        value: None,
        min: 1,
        max: Limit::Finite(1),
    },
    mutable: false,
    ephemeral: false,
});

static UUID_INDEX: LazyLock<Vec<String>> = LazyLock::new(|| vec![UUID_COLUMN.to_string()]);

/// The schema of one table: its columns in declaration order plus the
/// declared index tuples.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableSchema {
    pub columns: IndexMap<String, ColumnSchema>,

    /// Tuples of column names whose combined values are unique per row,
    /// in declaration order. The first declared tuple is the table's
    /// canonical key.
    #[serde(default)]
    pub indexes: Vec<Vec<String>>,

    #[serde(default, rename = "isRoot")]
    pub is_root: bool,

    #[serde(default, rename = "maxRows")]
    pub max_rows: Option<u64>,
}

impl TableSchema {
    /// Looks up a column's schema. The reserved `_uuid` column resolves to
    /// its synthetic schema even though no table declares it.
    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        if name == UUID_COLUMN {
            return Some(&UUID_COLUMN_SCHEMA);
        }
        self.columns.get(name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// The table's index tuples in priority order, always prefixed by the
    /// synthetic `["_uuid"]` tuple.
    pub fn index_tuples(&self) -> impl Iterator<Item = &[String]> {
        std::iter::once(UUID_INDEX.as_slice()).chain(self.indexes.iter().map(Vec::as_slice))
    }
}
