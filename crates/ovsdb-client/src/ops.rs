//! Assembly of operation records for the transport.
//!
//! Each builder packages a model or a [`Conditional`] into the operation
//! mappings of RFC 7047 §5.2; conditionals expand to one operation per
//! outer entry of [`generate`](Conditional::generate).

use crate::cond::Conditional;
use crate::mapper::Mapper;
use crate::model::Model;
use ovsdb_core::schema::DatabaseSchema;
use ovsdb_core::wire::{Mutation, OpKind, Operation, Row};
use ovsdb_core::Result;

/// An `insert` of the model's row, optionally named so later operations in
/// the same transaction can reference it as a `["named-uuid", ...]`.
pub fn insert<M: Model>(
    schema: &DatabaseSchema,
    table: &str,
    model: &M,
    uuid_name: Option<&str>,
) -> Result<Operation> {
    let row = Mapper::new(schema).new_row(table, model, &[])?;
    let mut op = Operation::new(OpKind::Insert, table);
    op.row = Some(row);
    op.uuid_name = uuid_name.map(str::to_string);
    Ok(op)
}

/// One `select` per generated entry. An entry with no conditions still
/// serializes `"where": []`, selecting every row of the table.
pub fn select<M: Model>(cond: &dyn Conditional<M>, columns: &[&str]) -> Result<Vec<Operation>> {
    per_entry(cond, |op| {
        op.columns = columns.iter().map(|s| s.to_string()).collect();
        op.op = OpKind::Select;
    })
}

/// A `select` of every row of `table`.
pub fn select_all(table: &str, columns: &[&str]) -> Operation {
    let mut op = Operation::new(OpKind::Select, table);
    op.columns = columns.iter().map(|s| s.to_string()).collect();
    op
}

/// One `update` per generated entry, writing the model's row.
pub fn update<M: Model>(
    schema: &DatabaseSchema,
    cond: &dyn Conditional<M>,
    model: &M,
    fields: &[&str],
) -> Result<Vec<Operation>> {
    let row = Mapper::new(schema).new_row(cond.table(), model, fields)?;
    per_entry(cond, |op| {
        op.op = OpKind::Update;
        op.row = Some(row.clone());
    })
}

/// One `mutate` per generated entry, applying the given mutations.
pub fn mutate<M: Model>(
    cond: &dyn Conditional<M>,
    mutations: Vec<Mutation>,
) -> Result<Vec<Operation>> {
    per_entry(cond, |op| {
        op.op = OpKind::Mutate;
        op.mutations = mutations.clone();
    })
}

/// One `delete` per generated entry.
pub fn delete<M: Model>(cond: &dyn Conditional<M>) -> Result<Vec<Operation>> {
    per_entry(cond, |op| op.op = OpKind::Delete)
}

/// One `wait` per generated entry: block the transaction until the
/// selected rows do (`until == "=="`) or do not (`"!="`) match `rows`.
pub fn wait<M: Model>(
    cond: &dyn Conditional<M>,
    timeout: Option<i64>,
    columns: &[&str],
    until: &str,
    rows: Vec<Row>,
) -> Result<Vec<Operation>> {
    per_entry(cond, |op| {
        op.op = OpKind::Wait;
        op.timeout = timeout;
        op.columns = columns.iter().map(|s| s.to_string()).collect();
        op.until = Some(until.to_string());
        op.rows = rows.clone();
    })
}

fn per_entry<M: Model>(
    cond: &dyn Conditional<M>,
    fill: impl Fn(&mut Operation),
) -> Result<Vec<Operation>> {
    let entries = cond.generate()?;
    let mut operations = Vec::with_capacity(entries.len());
    for conditions in entries {
        let mut op = Operation::new(OpKind::Select, cond.table());
        op.where_clause = conditions;
        fill(&mut op);
        operations.push(op);
    }
    Ok(operations)
}
