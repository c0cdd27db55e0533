//! Conversion between native field values and the tagged wire forms,
//! driven by the column schema.
//!
//! The two directions are symmetric: for any legal native value `v` of
//! column `c`, `from_wire(c, to_wire(c, v))` equals `v`, up to set element
//! order and the optional/empty-set equivalence.

use crate::native::{Atom, FieldShape, FieldValue};
use crate::schema::{AtomicKind, BaseType, ColumnSchema};
use crate::wire::{Uuid, Value};
use crate::{Error, Result};

/// Renders a native field value as the wire form declared for `column`.
///
/// Empty sets and maps are rendered literally (`["set", []]`); whether an
/// empty container should be emitted at all is the row builder's call, not
/// the codec's.
pub fn to_wire(column: &str, schema: &ColumnSchema, value: &FieldValue) -> Result<Value> {
    let ty = &schema.ty;

    if let Some(value_base) = &ty.value {
        let FieldValue::Map(entries) = value else {
            return Err(Error::type_mismatch("map", value.type_name()));
        };
        let pairs = entries
            .iter()
            .map(|(k, v)| {
                Ok((
                    atom_to_wire(column, &ty.key, k)?,
                    atom_to_wire(column, value_base, v)?,
                ))
            })
            .collect::<Result<_>>()?;
        return Ok(Value::Map(pairs));
    }

    if ty.is_set() {
        let items = match value {
            FieldValue::Set(items) => items
                .iter()
                .map(|atom| atom_to_wire(column, &ty.key, atom))
                .collect::<Result<_>>()?,
            FieldValue::Optional(None) => Vec::new(),
            FieldValue::Optional(Some(atom)) | FieldValue::Scalar(atom) => {
                vec![atom_to_wire(column, &ty.key, atom)?]
            }
            FieldValue::Map(_) => {
                return Err(Error::type_mismatch(
                    format!("set of {}", ty.key.kind),
                    "map",
                ))
            }
        };
        return Ok(Value::Set(items));
    }

    let FieldValue::Scalar(atom) = value else {
        return Err(Error::type_mismatch(
            ty.key.kind.as_str(),
            value.type_name(),
        ));
    };
    atom_to_wire(column, &ty.key, atom)
}

/// Renders one atom against a base type, enforcing the enum domain and
/// tagging uuid identifiers.
pub fn atom_to_wire(column: &str, base: &BaseType, atom: &Atom) -> Result<Value> {
    if !base.allows(atom) {
        return Err(Error::constraint_violation(
            column,
            format!("{atom} is not in the allowed set"),
        ));
    }

    match (base.kind, atom) {
        (AtomicKind::Integer, Atom::Integer(v)) => Ok(Value::Integer(*v)),
        (AtomicKind::Real, Atom::Real(v)) => Ok(Value::Real(*v)),
        (AtomicKind::Real, Atom::Integer(v)) => Ok(Value::Real(*v as f64)),
        (AtomicKind::Boolean, Atom::Boolean(v)) => Ok(Value::Boolean(*v)),
        (AtomicKind::String, Atom::String(v)) => Ok(Value::String(v.clone())),
        (AtomicKind::Uuid, Atom::String(v)) => Ok(Value::Uuid(Uuid::new(v.clone()))),
        _ => Err(Error::type_mismatch(
            base.kind.as_str(),
            atom.type_name(),
        )),
    }
}

/// Decodes a wire value into the native shape of the destination field.
///
/// Accepts both `["set", [v]]` and bare `v` wherever cardinality one is
/// legal; `["set", []]` decodes to an empty set or an absent optional.
pub fn from_wire(
    column: &str,
    schema: &ColumnSchema,
    wire: &Value,
    shape: FieldShape,
) -> Result<FieldValue> {
    let ty = &schema.ty;

    if ty.is_map() != (shape == FieldShape::Map) {
        return Err(Error::type_mismatch(ty.kind_name(), shape_name(shape)));
    }

    match shape {
        FieldShape::Map => {
            // `ty.is_map()` holds here, so the value base type exists.
            let Some(value_base) = &ty.value else {
                return Err(Error::type_mismatch(ty.kind_name(), "map"));
            };
            let Value::Map(entries) = wire else {
                return Err(Error::type_mismatch("map", wire.type_name()));
            };
            let entries = entries
                .iter()
                .map(|(k, v)| {
                    Ok((
                        atom_from_wire(&ty.key, k)?,
                        atom_from_wire(value_base, v)?,
                    ))
                })
                .collect::<Result<_>>()?;
            Ok(FieldValue::Map(entries))
        }
        FieldShape::Set => match wire {
            Value::Set(items) => {
                let items = items
                    .iter()
                    .map(|item| atom_from_wire(&ty.key, item))
                    .collect::<Result<_>>()?;
                Ok(FieldValue::Set(items))
            }
            Value::Map(_) => Err(Error::type_mismatch("set", "map")),
            scalar => Ok(FieldValue::Set(vec![atom_from_wire(&ty.key, scalar)?])),
        },
        FieldShape::Optional => match wire {
            Value::Set(items) => match items.as_slice() {
                [] => Ok(FieldValue::Optional(None)),
                [item] => Ok(FieldValue::Optional(Some(atom_from_wire(&ty.key, item)?))),
                _ => Err(Error::type_mismatch(
                    "set of at most one element",
                    "larger set",
                )),
            },
            Value::Map(_) => Err(Error::type_mismatch("optional scalar", "map")),
            scalar => Ok(FieldValue::Optional(Some(atom_from_wire(&ty.key, scalar)?))),
        },
        FieldShape::Scalar => match wire {
            Value::Set(items) => match items.as_slice() {
                [item] => Ok(FieldValue::Scalar(atom_from_wire(&ty.key, item)?)),
                _ => Err(Error::type_mismatch(
                    "set of exactly one element",
                    "set",
                )),
            },
            Value::Map(_) => Err(Error::type_mismatch(ty.key.kind.as_str(), "map")),
            scalar => Ok(FieldValue::Scalar(atom_from_wire(&ty.key, scalar)?)),
        },
    }
}

/// Decodes one wire atom against a base type.
///
/// JSON carries a single number type, so an integer column accepts a
/// fraction-free real and a real column accepts an integer literal. Uuids
/// normalize to their identifier string.
pub fn atom_from_wire(base: &BaseType, wire: &Value) -> Result<Atom> {
    match (base.kind, wire) {
        (AtomicKind::Integer, Value::Integer(v)) => Ok(Atom::Integer(*v)),
        (AtomicKind::Integer, Value::Real(v)) if v.fract() == 0.0 => Ok(Atom::Integer(*v as i64)),
        (AtomicKind::Real, Value::Real(v)) => Ok(Atom::Real(*v)),
        (AtomicKind::Real, Value::Integer(v)) => Ok(Atom::Real(*v as f64)),
        (AtomicKind::Boolean, Value::Boolean(v)) => Ok(Atom::Boolean(*v)),
        (AtomicKind::String, Value::String(v)) => Ok(Atom::String(v.clone())),
        (AtomicKind::Uuid, Value::Uuid(v)) => Ok(Atom::String(v.as_str().to_string())),
        // Some servers hand back bare identifier strings in monitor rows.
        (AtomicKind::Uuid, Value::String(v)) => Ok(Atom::String(v.clone())),
        _ => Err(Error::type_mismatch(
            base.kind.as_str(),
            wire.type_name(),
        )),
    }
}

fn shape_name(shape: FieldShape) -> &'static str {
    match shape {
        FieldShape::Scalar => "scalar",
        FieldShape::Optional => "optional",
        FieldShape::Set => "set",
        FieldShape::Map => "map",
    }
}
