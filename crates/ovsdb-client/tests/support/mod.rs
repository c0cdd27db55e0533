//! Shared fixtures: hand-implemented models over the test schemas, plus a
//! synthetic in-memory cache.
#![allow(dead_code)]

use ovsdb_client::{CacheView, Model, TableView};
use ovsdb_core::native::{Atom, FieldValue};
use ovsdb_core::{err, DatabaseSchema, Result};
use std::collections::{BTreeMap, HashMap};

pub const UUID0: &str = "2f77b348-9768-4866-b761-89d5177ecda0";
pub const UUID1: &str = "2f77b348-9768-4866-b761-89d5177ecda1";
pub const UUID2: &str = "2f77b348-9768-4866-b761-89d5177ecda2";
pub const UUID3: &str = "2f77b348-9768-4866-b761-89d5177ecda3";

/// The all-shapes table the codec-facing tests run against.
pub const ORM_SCHEMA: &str = r#"{
  "name": "TestSchema",
  "tables": {
    "TestTable": {
      "columns": {
        "aString": {"type": "string"},
        "aSet": {"type": {"key": "string", "min": 0, "max": "unlimited"}},
        "aSingleSet": {"type": {"key": "string", "min": 0, "max": 1}},
        "aUUIDSet": {
          "type": {"key": {"refTable": "SomeOtherTable", "refType": "weak", "type": "uuid"}, "min": 0}
        },
        "aUUID": {
          "type": {"key": {"refTable": "SomeOtherTable", "refType": "weak", "type": "uuid"}, "min": 1, "max": 1}
        },
        "aIntSet": {"type": {"key": {"type": "integer"}, "min": 0, "max": "unlimited"}},
        "aFloat": {"type": {"key": {"type": "real"}}},
        "aFloatSet": {"type": {"key": {"type": "real"}, "min": 0, "max": 10}},
        "aEmptySet": {"type": {"key": {"type": "string"}, "min": 0, "max": "unlimited"}},
        "aEnum": {
          "type": {"key": {"enum": ["set", ["enum1", "enum2", "enum3"]], "type": "string"}}
        },
        "aMap": {"type": {"key": "string", "max": "unlimited", "min": 0, "value": "string"}}
      }
    }
  }
}"#;

/// The indexed table the condition and equality tests run against.
pub const INDEX_SCHEMA: &str = r#"{
  "name": "TestSchema",
  "tables": {
    "TestTable": {
      "indexes": [["name"], ["composed_1", "composed_2"]],
      "columns": {
        "name": {"type": "string"},
        "composed_1": {"type": {"key": "string"}},
        "composed_2": {"type": {"key": "string"}},
        "int1": {"type": {"key": "integer"}},
        "int2": {"type": {"key": "integer"}},
        "config": {"type": {"key": "string", "max": "unlimited", "min": 0, "value": "string"}}
      }
    }
  }
}"#;

/// The table the mutation tests run against.
pub const MUT_SCHEMA: &str = r#"{
  "name": "TestSchema",
  "tables": {
    "TestTable": {
      "columns": {
        "string": {"type": "string"},
        "set": {"type": {"key": "string", "min": 0}},
        "map": {"type": {"key": "string", "value": "string"}},
        "unmutable": {"mutable": false, "type": {"key": "integer"}},
        "int": {"type": {"key": "integer"}}
      }
    }
  }
}"#;

pub fn orm_schema() -> DatabaseSchema {
    DatabaseSchema::from_json(ORM_SCHEMA).unwrap()
}

pub fn index_schema() -> DatabaseSchema {
    DatabaseSchema::from_json(INDEX_SCHEMA).unwrap()
}

pub fn mut_schema() -> DatabaseSchema {
    DatabaseSchema::from_json(MUT_SCHEMA).unwrap()
}

// ---------------------------------------------------------------------------
// FieldValue unpacking helpers for set_field impls
// ---------------------------------------------------------------------------

pub fn take_string(value: FieldValue) -> Result<String> {
    match value {
        FieldValue::Scalar(Atom::String(v)) => Ok(v),
        other => Err(err!("expected a string, got {}", other.type_name())),
    }
}

pub fn take_f64(value: FieldValue) -> Result<f64> {
    match value {
        FieldValue::Scalar(Atom::Real(v)) => Ok(v),
        other => Err(err!("expected a real, got {}", other.type_name())),
    }
}

pub fn take_i64(value: FieldValue) -> Result<i64> {
    match value {
        FieldValue::Scalar(Atom::Integer(v)) => Ok(v),
        other => Err(err!("expected an integer, got {}", other.type_name())),
    }
}

pub fn take_string_set(value: FieldValue) -> Result<Vec<String>> {
    let FieldValue::Set(items) = value else {
        return Err(err!("expected a set, got {}", value.type_name()));
    };
    items
        .into_iter()
        .map(|atom| match atom {
            Atom::String(v) => Ok(v),
            other => Err(err!("expected a string element, got {}", other.type_name())),
        })
        .collect()
}

pub fn take_i64_set(value: FieldValue) -> Result<Vec<i64>> {
    let FieldValue::Set(items) = value else {
        return Err(err!("expected a set, got {}", value.type_name()));
    };
    items
        .into_iter()
        .map(|atom| {
            atom.as_integer()
                .ok_or_else(|| err!("expected an integer element"))
        })
        .collect()
}

pub fn take_f64_set(value: FieldValue) -> Result<Vec<f64>> {
    let FieldValue::Set(items) = value else {
        return Err(err!("expected a set, got {}", value.type_name()));
    };
    items
        .into_iter()
        .map(|atom| atom.as_real().ok_or_else(|| err!("expected a real element")))
        .collect()
}

pub fn take_string_map(value: FieldValue) -> Result<BTreeMap<String, String>> {
    let FieldValue::Map(entries) = value else {
        return Err(err!("expected a map, got {}", value.type_name()));
    };
    entries
        .into_iter()
        .map(|(k, v)| match (k, v) {
            (Atom::String(k), Atom::String(v)) => Ok((k, v)),
            _ => Err(err!("expected string entries")),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Models
// ---------------------------------------------------------------------------

/// Binds every column of `ORM_SCHEMA`'s TestTable. `untracked` carries no
/// binding and must be invisible to the mapper.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestRow {
    pub a_string: String,
    pub a_set: Vec<String>,
    pub a_single_set: Vec<String>,
    pub a_uuid_set: Vec<String>,
    pub a_uuid: String,
    pub a_int_set: Vec<i64>,
    pub a_float: f64,
    pub a_float_set: Vec<f64>,
    pub a_empty_set: Vec<String>,
    pub a_enum: String,
    pub a_map: BTreeMap<String, String>,
    pub untracked: String,
}

impl Model for TestRow {
    fn columns(&self) -> &'static [&'static str] {
        &[
            "aString",
            "aSet",
            "aSingleSet",
            "aUUIDSet",
            "aUUID",
            "aIntSet",
            "aFloat",
            "aFloatSet",
            "aEmptySet",
            "aEnum",
            "aMap",
        ]
    }

    fn field(&self, column: &str) -> Option<FieldValue> {
        match column {
            "aString" => Some(FieldValue::from(self.a_string.clone())),
            "aSet" => Some(FieldValue::from(self.a_set.clone())),
            "aSingleSet" => Some(FieldValue::from(self.a_single_set.clone())),
            "aUUIDSet" => Some(FieldValue::from(self.a_uuid_set.clone())),
            "aUUID" => Some(FieldValue::from(self.a_uuid.clone())),
            "aIntSet" => Some(FieldValue::from(self.a_int_set.clone())),
            "aFloat" => Some(FieldValue::from(self.a_float)),
            "aFloatSet" => Some(FieldValue::from(self.a_float_set.clone())),
            "aEmptySet" => Some(FieldValue::from(self.a_empty_set.clone())),
            "aEnum" => Some(FieldValue::from(self.a_enum.clone())),
            "aMap" => Some(FieldValue::from(self.a_map.clone())),
            _ => None,
        }
    }

    fn set_field(&mut self, column: &str, value: FieldValue) -> Result<()> {
        match column {
            "aString" => self.a_string = take_string(value)?,
            "aSet" => self.a_set = take_string_set(value)?,
            "aSingleSet" => self.a_single_set = take_string_set(value)?,
            "aUUIDSet" => self.a_uuid_set = take_string_set(value)?,
            "aUUID" => self.a_uuid = take_string(value)?,
            "aIntSet" => self.a_int_set = take_i64_set(value)?,
            "aFloat" => self.a_float = take_f64(value)?,
            "aFloatSet" => self.a_float_set = take_f64_set(value)?,
            "aEmptySet" => self.a_empty_set = take_string_set(value)?,
            "aEnum" => self.a_enum = take_string(value)?,
            "aMap" => self.a_map = take_string_map(value)?,
            other => return Err(err!("column {other} is not bound")),
        }
        Ok(())
    }
}

/// A four-column subset used by the row-building tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialRow {
    pub my_map: BTreeMap<String, String>,
    pub my_set: Vec<String>,
    pub my_string: String,
    pub my_float: f64,
}

impl Model for PartialRow {
    fn columns(&self) -> &'static [&'static str] {
        &["aMap", "aSet", "aString", "aFloat"]
    }

    fn field(&self, column: &str) -> Option<FieldValue> {
        match column {
            "aMap" => Some(FieldValue::from(self.my_map.clone())),
            "aSet" => Some(FieldValue::from(self.my_set.clone())),
            "aString" => Some(FieldValue::from(self.my_string.clone())),
            "aFloat" => Some(FieldValue::from(self.my_float)),
            _ => None,
        }
    }

    fn set_field(&mut self, column: &str, value: FieldValue) -> Result<()> {
        match column {
            "aMap" => self.my_map = take_string_map(value)?,
            "aSet" => self.my_set = take_string_set(value)?,
            "aString" => self.my_string = take_string(value)?,
            "aFloat" => self.my_float = take_f64(value)?,
            other => return Err(err!("column {other} is not bound")),
        }
        Ok(())
    }
}

/// Binds `INDEX_SCHEMA`'s TestTable, `_uuid` included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedRow {
    pub id: String,
    pub my_name: String,
    pub config: BTreeMap<String, String>,
    pub comp1: String,
    pub comp2: String,
    pub int1: i64,
    pub int2: i64,
}

impl Model for IndexedRow {
    fn columns(&self) -> &'static [&'static str] {
        &[
            "_uuid",
            "name",
            "config",
            "composed_1",
            "composed_2",
            "int1",
            "int2",
        ]
    }

    fn field(&self, column: &str) -> Option<FieldValue> {
        match column {
            "_uuid" => Some(FieldValue::from(self.id.clone())),
            "name" => Some(FieldValue::from(self.my_name.clone())),
            "config" => Some(FieldValue::from(self.config.clone())),
            "composed_1" => Some(FieldValue::from(self.comp1.clone())),
            "composed_2" => Some(FieldValue::from(self.comp2.clone())),
            "int1" => Some(FieldValue::from(self.int1)),
            "int2" => Some(FieldValue::from(self.int2)),
            _ => None,
        }
    }

    fn set_field(&mut self, column: &str, value: FieldValue) -> Result<()> {
        match column {
            "_uuid" => self.id = take_string(value)?,
            "name" => self.my_name = take_string(value)?,
            "config" => self.config = take_string_map(value)?,
            "composed_1" => self.comp1 = take_string(value)?,
            "composed_2" => self.comp2 = take_string(value)?,
            "int1" => self.int1 = take_i64(value)?,
            "int2" => self.int2 = take_i64(value)?,
            other => return Err(err!("column {other} is not bound")),
        }
        Ok(())
    }
}

/// Binds `MUT_SCHEMA`'s TestTable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutRow {
    pub id: String,
    pub string: String,
    pub set: Vec<String>,
    pub map: BTreeMap<String, String>,
    pub int: i64,
    pub unmutable: i64,
}

impl Model for MutRow {
    fn columns(&self) -> &'static [&'static str] {
        &["_uuid", "string", "set", "map", "int", "unmutable"]
    }

    fn field(&self, column: &str) -> Option<FieldValue> {
        match column {
            "_uuid" => Some(FieldValue::from(self.id.clone())),
            "string" => Some(FieldValue::from(self.string.clone())),
            "set" => Some(FieldValue::from(self.set.clone())),
            "map" => Some(FieldValue::from(self.map.clone())),
            "int" => Some(FieldValue::from(self.int)),
            "unmutable" => Some(FieldValue::from(self.unmutable)),
            _ => None,
        }
    }

    fn set_field(&mut self, column: &str, value: FieldValue) -> Result<()> {
        match column {
            "_uuid" => self.id = take_string(value)?,
            "string" => self.string = take_string(value)?,
            "set" => self.set = take_string_set(value)?,
            "map" => self.map = take_string_map(value)?,
            "int" => self.int = take_i64(value)?,
            "unmutable" => self.unmutable = take_i64(value)?,
            other => return Err(err!("column {other} is not bound")),
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// A synthetic cache
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FakeTable<M> {
    rows: Vec<(String, M)>,
}

impl<M> FakeTable<M> {
    pub fn insert(&mut self, uuid: impl Into<String>, row: M) {
        self.rows.push((uuid.into(), row));
    }
}

impl<M: Model> TableView<M> for FakeTable<M> {
    fn rows(&self) -> Vec<String> {
        self.rows.iter().map(|(uuid, _)| uuid.clone()).collect()
    }

    fn row(&self, uuid: &str) -> Option<M> {
        self.rows
            .iter()
            .find(|(id, _)| id == uuid)
            .map(|(_, row)| row.clone())
    }
}

#[derive(Default)]
pub struct FakeCache<M> {
    tables: HashMap<String, FakeTable<M>>,
}

impl<M> FakeCache<M> {
    pub fn with_table(name: impl Into<String>, table: FakeTable<M>) -> Self {
        let mut tables = HashMap::new();
        tables.insert(name.into(), table);
        Self { tables }
    }
}

impl<M: Model> CacheView<M> for FakeCache<M> {
    fn table(&self, name: &str) -> Option<&dyn TableView<M>> {
        self.tables.get(name).map(|table| table as &dyn TableView<M>)
    }
}
