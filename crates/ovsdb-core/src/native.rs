use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// A native scalar of one of the OVSDB atomic types.
///
/// Uuid-typed columns carry their identifier as a plain string; the codec
/// applies the tagged wire form based on the column schema.
#[derive(Debug, Clone)]
pub enum Atom {
    Integer(i64),
    Real(f64),
    Boolean(bool),
    String(String),
}

impl Atom {
    /// Returns `true` if this is the zero value of its type: `0`, `0.0`,
    /// `false` or the empty string.
    ///
    /// Zero values mark a field as "unset" when scanning a model for a
    /// populated index tuple.
    pub fn is_default(&self) -> bool {
        match self {
            Self::Integer(v) => *v == 0,
            Self::Real(v) => *v == 0.0,
            Self::Boolean(v) => !*v,
            Self::String(v) => v.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Name of the atom's type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Boolean(_) => "boolean",
            Self::String(_) => "string",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Integer(_) => 0,
            Self::Real(_) => 1,
            Self::Boolean(_) => 2,
            Self::String(_) => 3,
        }
    }
}

// Reals are compared with `total_cmp` so atoms form a total order and can
// key a `BTreeMap` or be sorted for multiset comparison.
impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Atom {}

impl PartialOrd for Atom {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Atom {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Real(a), Self::Real(b)) => a.total_cmp(b),
            (Self::Boolean(a), Self::Boolean(b)) => a.cmp(b),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => v.fmt(f),
            Self::Real(v) => v.fmt(f),
            Self::Boolean(v) => v.fmt(f),
            Self::String(v) => v.fmt(f),
        }
    }
}

impl From<i64> for Atom {
    fn from(src: i64) -> Self {
        Self::Integer(src)
    }
}

impl From<f64> for Atom {
    fn from(src: f64) -> Self {
        Self::Real(src)
    }
}

impl From<bool> for Atom {
    fn from(src: bool) -> Self {
        Self::Boolean(src)
    }
}

impl From<String> for Atom {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&str> for Atom {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

/// The logical shape of a model field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldShape {
    /// A required scalar.
    Scalar,
    /// An optional scalar (cardinality 0 or 1).
    Optional,
    /// A set of atoms.
    Set,
    /// A map from key atoms to value atoms.
    Map,
}

/// The value of a single model field, in its native representation.
///
/// This is the input to [`codec::to_wire`] and the output of
/// [`codec::from_wire`].
///
/// [`codec::to_wire`]: crate::codec::to_wire
/// [`codec::from_wire`]: crate::codec::from_wire
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Scalar(Atom),
    Optional(Option<Atom>),
    Set(Vec<Atom>),
    Map(BTreeMap<Atom, Atom>),
}

impl FieldValue {
    pub fn shape(&self) -> FieldShape {
        match self {
            Self::Scalar(_) => FieldShape::Scalar,
            Self::Optional(_) => FieldShape::Optional,
            Self::Set(_) => FieldShape::Set,
            Self::Map(_) => FieldShape::Map,
        }
    }

    /// Returns `true` if the field carries no value: a zero scalar, an
    /// absent optional, or an empty set or map.
    pub fn is_default(&self) -> bool {
        match self {
            Self::Scalar(atom) => atom.is_default(),
            Self::Optional(atom) => atom.is_none(),
            Self::Set(items) => items.is_empty(),
            Self::Map(entries) => entries.is_empty(),
        }
    }

    /// Returns `true` for an empty set or empty map; `false` for every
    /// scalar or optional, whatever its value.
    pub fn is_empty_container(&self) -> bool {
        match self {
            Self::Set(items) => items.is_empty(),
            Self::Map(entries) => entries.is_empty(),
            Self::Scalar(_) | Self::Optional(_) => false,
        }
    }

    /// Value equality with set semantics: sets compare as multisets, maps
    /// by key/value pairs, scalars and optionals by value.
    pub fn equivalent(&self, other: &FieldValue) -> bool {
        match (self, other) {
            (Self::Set(a), Self::Set(b)) => {
                if a.len() != b.len() {
                    return false;
                }
                let mut a = a.clone();
                let mut b = b.clone();
                a.sort();
                b.sort();
                a == b
            }
            _ => self == other,
        }
    }

    pub fn as_scalar(&self) -> Option<&Atom> {
        match self {
            Self::Scalar(atom) => Some(atom),
            _ => None,
        }
    }

    /// Name of the field's shape (and scalar type), for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Scalar(atom) => atom.type_name(),
            Self::Optional(_) => "optional",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
        }
    }
}

impl From<Atom> for FieldValue {
    fn from(src: Atom) -> Self {
        Self::Scalar(src)
    }
}

impl From<i64> for FieldValue {
    fn from(src: i64) -> Self {
        Self::Scalar(Atom::Integer(src))
    }
}

impl From<f64> for FieldValue {
    fn from(src: f64) -> Self {
        Self::Scalar(Atom::Real(src))
    }
}

impl From<bool> for FieldValue {
    fn from(src: bool) -> Self {
        Self::Scalar(Atom::Boolean(src))
    }
}

impl From<&str> for FieldValue {
    fn from(src: &str) -> Self {
        Self::Scalar(Atom::String(src.to_string()))
    }
}

impl From<String> for FieldValue {
    fn from(src: String) -> Self {
        Self::Scalar(Atom::String(src))
    }
}

impl<T> From<Vec<T>> for FieldValue
where
    Atom: From<T>,
{
    fn from(src: Vec<T>) -> Self {
        Self::Set(src.into_iter().map(Atom::from).collect())
    }
}

impl<K, V> From<BTreeMap<K, V>> for FieldValue
where
    Atom: From<K> + From<V>,
{
    fn from(src: BTreeMap<K, V>) -> Self {
        Self::Map(
            src.into_iter()
                .map(|(k, v)| (Atom::from(k), Atom::from(v)))
                .collect(),
        )
    }
}
