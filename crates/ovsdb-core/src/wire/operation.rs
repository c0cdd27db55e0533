use super::{Condition, Mutation, Row};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The operation kinds of RFC 7047 §5.2.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    Insert,
    Select,
    Update,
    Mutate,
    Delete,
    Wait,
    Commit,
    Abort,
    Comment,
    Assert,
}

impl OpKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Select => "select",
            Self::Update => "update",
            Self::Mutate => "mutate",
            Self::Delete => "delete",
            Self::Wait => "wait",
            Self::Commit => "commit",
            Self::Abort => "abort",
            Self::Comment => "comment",
            Self::Assert => "assert",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One operation of a transact request.
///
/// Empty optional fields are omitted from the serialized form, with one
/// exception: a `select` always carries its `where` field, because an
/// empty `"where": []` is how a client asks for all rows of a table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Operation {
    pub op: OpKind,
    pub table: String,
    #[serde(default)]
    pub row: Option<Row>,
    #[serde(default)]
    pub rows: Vec<Row>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub mutations: Vec<Mutation>,
    #[serde(default)]
    pub timeout: Option<i64>,
    #[serde(default, rename = "where")]
    pub where_clause: Vec<Condition>,
    #[serde(default)]
    pub until: Option<String>,
    #[serde(default, rename = "uuid-name")]
    pub uuid_name: Option<String>,
}

impl Operation {
    pub fn new(op: OpKind, table: impl Into<String>) -> Self {
        Self {
            op,
            table: table.into(),
            row: None,
            rows: Vec::new(),
            columns: Vec::new(),
            mutations: Vec::new(),
            timeout: None,
            where_clause: Vec::new(),
            until: None,
            uuid_name: None,
        }
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("op", &self.op)?;
        map.serialize_entry("table", &self.table)?;
        if let Some(row) = &self.row {
            map.serialize_entry("row", row)?;
        }
        if !self.rows.is_empty() {
            map.serialize_entry("rows", &self.rows)?;
        }
        if !self.columns.is_empty() {
            map.serialize_entry("columns", &self.columns)?;
        }
        if !self.mutations.is_empty() {
            map.serialize_entry("mutations", &self.mutations)?;
        }
        if let Some(timeout) = self.timeout {
            map.serialize_entry("timeout", &timeout)?;
        }
        // A select must say "where": [] to ask for every row; every other
        // op omits an empty where.
        if self.op == OpKind::Select || !self.where_clause.is_empty() {
            map.serialize_entry("where", &self.where_clause)?;
        }
        if let Some(until) = &self.until {
            map.serialize_entry("until", until)?;
        }
        if let Some(uuid_name) = &self.uuid_name {
            map.serialize_entry("uuid-name", uuid_name)?;
        }
        map.end()
    }
}
