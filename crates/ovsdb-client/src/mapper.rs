use crate::model::Model;
use ovsdb_core::codec;
use ovsdb_core::native::{Atom, FieldValue};
use ovsdb_core::schema::{AtomicKind, DatabaseSchema, TableSchema, UUID_COLUMN};
use ovsdb_core::wire::{Condition, Mutation, Mutator, Row, Uuid, Value};
use ovsdb_core::{Error, Result};

/// Translates between models and wire rows, and derives conditions and
/// mutations from models, using a parsed schema.
///
/// The mapper holds no state beyond the schema reference; it reads or
/// writes only the model passed into each call and retains nothing.
#[derive(Debug, Clone, Copy)]
pub struct Mapper<'a> {
    schema: &'a DatabaseSchema,
}

impl<'a> Mapper<'a> {
    pub fn new(schema: &'a DatabaseSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &'a DatabaseSchema {
        self.schema
    }

    fn table(&self, name: &str) -> Result<&'a TableSchema> {
        self.schema
            .table(name)
            .ok_or_else(|| Error::unknown_table(name))
    }

    /// Reads a wire row into the model's bound fields.
    ///
    /// Fields whose column is absent from the row are left untouched, and
    /// columns of the row no field binds are ignored.
    pub fn row_to_model<M: Model>(&self, table: &str, row: &Row, model: &mut M) -> Result<()> {
        let table_schema = self.table(table)?;

        for &column in model.columns() {
            let column_schema = table_schema
                .column(column)
                .ok_or_else(|| Error::unknown_column(table, column))?;
            let Some(wire) = row.get(column) else {
                continue;
            };
            let Some(current) = model.field(column) else {
                continue;
            };
            let decoded = codec::from_wire(column, column_schema, wire, current.shape())?;
            model.set_field(column, decoded)?;
        }
        Ok(())
    }

    /// Builds a wire row from the model, suitable for `insert` or `update`.
    ///
    /// With no explicit `fields`, scalar and optional fields are always
    /// emitted while empty set and map fields are suppressed — an empty
    /// container is indistinguishable from "leave the column at its
    /// default", and emitting it would clobber server-side defaults. With
    /// explicit `fields`, exactly those columns are emitted, empty or not.
    ///
    /// The `_uuid` column is never part of the produced row; inserts name
    /// their row through the operation's `uuid-name` field instead.
    pub fn new_row<M: Model>(&self, table: &str, model: &M, fields: &[&str]) -> Result<Row> {
        let table_schema = self.table(table)?;

        for &field in fields {
            if !model.binds(field) {
                return Err(Error::invalid_field_reference(field));
            }
        }

        let mut row = Row::new();
        for &column in model.columns() {
            if column == UUID_COLUMN {
                continue;
            }
            let column_schema = table_schema
                .column(column)
                .ok_or_else(|| Error::unknown_column(table, column))?;
            if !fields.is_empty() && !fields.contains(&column) {
                continue;
            }
            let Some(value) = model.field(column) else {
                continue;
            };
            if fields.is_empty() && value.is_empty_container() {
                continue;
            }
            row.insert(column, codec::to_wire(column, column_schema, &value)?);
        }
        Ok(row)
    }

    /// Derives the equality conditions that select the model's row.
    ///
    /// With explicit `fields`, conditions are built on exactly those
    /// columns. Otherwise the first populated index tuple wins, scanning
    /// the synthetic `["_uuid"]` tuple first and the declared indexes in
    /// order; a tuple is populated when every member field carries a
    /// non-zero value (for `_uuid`, a well-formed identifier). Fails with
    /// `no index` when nothing matches.
    pub fn equality_conditions<M: Model>(
        &self,
        table: &str,
        model: &M,
        fields: &[&str],
    ) -> Result<Vec<Condition>> {
        let table_schema = self.table(table)?;

        if !fields.is_empty() {
            let mut conditions = Vec::with_capacity(fields.len());
            for &field in fields {
                if !model.binds(field) {
                    return Err(Error::invalid_field_reference(field));
                }
                let value = model
                    .field(field)
                    .ok_or_else(|| Error::invalid_field_reference(field))?;
                let column_schema = table_schema
                    .column(field)
                    .ok_or_else(|| Error::unknown_column(table, field))?;
                conditions.push(Condition::equal(
                    field,
                    codec::to_wire(field, column_schema, &value)?,
                ));
            }
            return Ok(conditions);
        }

        for tuple in table_schema.index_tuples() {
            let Some(values) = self.tuple_values(model, tuple) else {
                continue;
            };
            tracing::trace!(table, index = ?tuple, "deriving equality condition");
            let mut conditions = Vec::with_capacity(tuple.len());
            for (column, value) in tuple.iter().zip(values) {
                let column_schema = table_schema
                    .column(column)
                    .ok_or_else(|| Error::unknown_column(table, column))?;
                conditions.push(Condition::equal(
                    column.as_str(),
                    codec::to_wire(column, column_schema, &value)?,
                ));
            }
            return Ok(conditions);
        }

        Err(Error::no_index(table))
    }

    /// Whether `a` and `b` denote the same row: equal under the `_uuid`
    /// binding, any declared index tuple, or the caller's `extra` columns
    /// taken together as one more tuple. Sets compare as multisets.
    pub fn equal_indexes<M: Model>(
        &self,
        table: &str,
        a: &M,
        b: &M,
        extra: &[&str],
    ) -> Result<bool> {
        let table_schema = self.table(table)?;

        for &column in extra {
            if table_schema.column(column).is_none() {
                return Err(Error::unknown_column(table, column));
            }
        }
        let extra_tuple: Vec<String> = extra.iter().map(|s| s.to_string()).collect();

        let tuples = table_schema
            .index_tuples()
            .chain((!extra_tuple.is_empty()).then_some(extra_tuple.as_slice()));

        for tuple in tuples {
            let Some(values) = self.tuple_values(a, tuple) else {
                continue;
            };
            let equal = tuple.iter().zip(&values).all(|(column, value_a)| {
                b.field(column)
                    .is_some_and(|value_b| value_a.equivalent(&value_b))
            });
            if equal {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Like [`equal_indexes`], but the comparison columns are the caller's
    /// field selectors into `a`. A selector that `a` does not bind fails
    /// with `invalid field reference`. With no selectors, falls back to
    /// the index-based comparison.
    ///
    /// [`equal_indexes`]: Self::equal_indexes
    pub fn equal_fields<M: Model>(
        &self,
        table: &str,
        a: &M,
        b: &M,
        fields: &[&str],
    ) -> Result<bool> {
        for &field in fields {
            if !a.binds(field) {
                return Err(Error::invalid_field_reference(field));
            }
        }
        self.equal_indexes(table, a, b, fields)
    }

    /// Builds one element of an operation's `mutations` list.
    ///
    /// Arithmetic mutators apply only to mutable scalar integer or real
    /// columns; `insert` and `delete` only to set and map columns. A
    /// `delete` on a map column accepts either a map or a set of keys.
    pub fn new_mutation<M: Model>(
        &self,
        table: &str,
        model: &M,
        column: &str,
        mutator: Mutator,
        value: FieldValue,
    ) -> Result<Mutation> {
        let table_schema = self.table(table)?;
        let column_schema = table_schema
            .column(column)
            .ok_or_else(|| Error::unknown_column(table, column))?;
        if !model.binds(column) {
            return Err(Error::invalid_field_reference(column));
        }
        if !column_schema.mutable {
            return Err(Error::immutable_column(table, column));
        }

        let ty = &column_schema.ty;

        if mutator.is_arithmetic() {
            if !ty.is_scalar() || !matches!(ty.key.kind, AtomicKind::Integer | AtomicKind::Real) {
                return Err(Error::illegal_mutator(mutator.to_string(), ty.kind_name()));
            }
            let FieldValue::Scalar(atom) = &value else {
                return Err(Error::type_mismatch(ty.key.kind.as_str(), value.type_name()));
            };
            let wire = codec::atom_to_wire(column, &ty.key, atom)?;
            return Ok(Mutation::new(column, mutator, wire));
        }

        if !ty.is_container() {
            return Err(Error::illegal_mutator(mutator.to_string(), ty.kind_name()));
        }

        let wire = if ty.is_map() {
            match (&value, mutator) {
                (FieldValue::Map(_), _) => codec::to_wire(column, column_schema, &value)?,
                // Deleting from a map by key set.
                (FieldValue::Set(keys), Mutator::Delete) => {
                    let keys = keys
                        .iter()
                        .map(|key| codec::atom_to_wire(column, &ty.key, key))
                        .collect::<Result<_>>()?;
                    Value::Set(keys)
                }
                _ => return Err(Error::type_mismatch("map", value.type_name())),
            }
        } else {
            match &value {
                FieldValue::Set(items) => {
                    let items = items
                        .iter()
                        .map(|item| codec::atom_to_wire(column, &ty.key, item))
                        .collect::<Result<_>>()?;
                    Value::Set(items)
                }
                FieldValue::Scalar(atom) => {
                    Value::Set(vec![codec::atom_to_wire(column, &ty.key, atom)?])
                }
                _ => {
                    return Err(Error::type_mismatch(
                        format!("set of {}", ty.key.kind),
                        value.type_name(),
                    ))
                }
            }
        };

        Ok(Mutation::new(column, mutator, wire))
    }

    /// The model's values for every column of `tuple`, provided each one
    /// is populated; `None` marks the tuple unusable for this model.
    fn tuple_values<M: Model>(&self, model: &M, tuple: &[String]) -> Option<Vec<FieldValue>> {
        let mut values = Vec::with_capacity(tuple.len());
        for column in tuple {
            let value = model.field(column)?;
            if !populated(column, &value) {
                return None;
            }
            values.push(value);
        }
        Some(values)
    }
}

/// Whether a field value marks its column as "set" for index purposes:
/// non-zero for scalars, non-empty for containers, and for `_uuid` a
/// well-formed identifier.
fn populated(column: &str, value: &FieldValue) -> bool {
    if column == UUID_COLUMN {
        return matches!(
            value,
            FieldValue::Scalar(Atom::String(id)) if Uuid::is_well_formed(id)
        );
    }
    !value.is_default()
}
