use super::{AtomicKind, Limit, RefType};
use crate::native::Atom;
use serde::de::{self, Deserializer};
use serde::Deserialize;

/// The base type of a column key or value: an atomic kind plus optional
/// constraints.
///
/// Tolerates both the terse form (`"string"`) and the verbose form
/// (`{"type": "string", "enum": ...}`); the enum domain may appear as a
/// bare atom or as `["set", [...]]`, and both normalize to a set of
/// permitted atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseType {
    pub kind: AtomicKind,
    /// The finite set of permitted values, when the column is an enum.
    pub enum_domain: Option<Vec<Atom>>,
    /// Table referenced by a uuid column.
    pub ref_table: Option<String>,
    pub ref_type: RefType,
}

impl BaseType {
    pub fn new(kind: AtomicKind) -> Self {
        Self {
            kind,
            enum_domain: None,
            ref_table: None,
            ref_type: RefType::default(),
        }
    }

    /// Checks `atom` against the enum domain, if one is declared.
    pub fn allows(&self, atom: &Atom) -> bool {
        match &self.enum_domain {
            Some(domain) => domain.contains(atom),
            None => true,
        }
    }
}

impl<'de> Deserialize<'de> for BaseType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Terse(AtomicKind),
            Verbose(Verbose),
        }

        // Constraint fields this core does not enforce (minInteger and
        // friends) are tolerated by not denying unknown fields.
        #[derive(Deserialize)]
        struct Verbose {
            #[serde(rename = "type")]
            kind: AtomicKind,
            #[serde(default, rename = "enum")]
            enum_domain: Option<serde_json::Value>,
            #[serde(default, rename = "refTable")]
            ref_table: Option<String>,
            #[serde(default, rename = "refType")]
            ref_type: Option<RefType>,
        }

        match Repr::deserialize(deserializer)? {
            Repr::Terse(kind) => Ok(BaseType::new(kind)),
            Repr::Verbose(v) => {
                let enum_domain = v
                    .enum_domain
                    .map(|raw| parse_enum_domain(v.kind, raw).map_err(de::Error::custom))
                    .transpose()?;
                Ok(BaseType {
                    kind: v.kind,
                    enum_domain,
                    ref_table: v.ref_table,
                    ref_type: v.ref_type.unwrap_or_default(),
                })
            }
        }
    }
}

/// Normalizes an enum domain given as either a bare atom or a
/// `["set", [...]]` wire set.
fn parse_enum_domain(kind: AtomicKind, raw: serde_json::Value) -> Result<Vec<Atom>, String> {
    let members = match raw {
        serde_json::Value::Array(parts) => match parts.as_slice() {
            [serde_json::Value::String(tag), serde_json::Value::Array(members)]
                if tag == "set" =>
            {
                members.clone()
            }
            _ => return Err("enum must be an atom or [\"set\", [...]]".to_string()),
        },
        scalar => vec![scalar],
    };

    members
        .into_iter()
        .map(|member| enum_atom(kind, member))
        .collect()
}

fn enum_atom(kind: AtomicKind, raw: serde_json::Value) -> Result<Atom, String> {
    let atom = match raw {
        serde_json::Value::Bool(v) => Atom::Boolean(v),
        serde_json::Value::String(v) => Atom::String(v),
        serde_json::Value::Number(v) => match v.as_i64() {
            Some(n) => Atom::Integer(n),
            None => Atom::Real(v.as_f64().unwrap_or_default()),
        },
        other => return Err(format!("enum member {other} is not an atom")),
    };

    let matches_kind = match kind {
        AtomicKind::Integer => matches!(atom, Atom::Integer(_)),
        AtomicKind::Real => matches!(atom, Atom::Integer(_) | Atom::Real(_)),
        AtomicKind::Boolean => matches!(atom, Atom::Boolean(_)),
        AtomicKind::String | AtomicKind::Uuid => matches!(atom, Atom::String(_)),
    };
    if !matches_kind {
        return Err(format!("enum member {atom} does not match type {kind}"));
    }
    Ok(atom)
}

/// The full type of a column: key base type, optional value base type
/// (which makes the column a map), and cardinality bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnType {
    pub key: BaseType,
    pub value: Option<BaseType>,
    pub min: u64,
    pub max: Limit,
}

impl ColumnType {
    pub fn scalar(kind: AtomicKind) -> Self {
        Self {
            key: BaseType::new(kind),
            value: None,
            min: 1,
            max: Limit::Finite(1),
        }
    }

    /// A map from key atoms to value atoms.
    pub fn is_map(&self) -> bool {
        self.value.is_some()
    }

    /// A set: no value type, and a cardinality other than exactly one.
    /// Optional scalars (min 0, max 1) count as sets of at most one.
    pub fn is_set(&self) -> bool {
        !self.is_map() && (self.min != 1 || self.max != Limit::Finite(1))
    }

    /// A required scalar (min = max = 1).
    pub fn is_scalar(&self) -> bool {
        !self.is_map() && !self.is_set()
    }

    /// A set or a map; the column types `insert` and `delete` can mutate.
    pub fn is_container(&self) -> bool {
        self.is_map() || self.is_set()
    }

    /// Name of the column's logical shape, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        if self.is_map() {
            "map"
        } else if self.is_set() {
            "set"
        } else {
            self.key.kind.as_str()
        }
    }
}

impl<'de> Deserialize<'de> for ColumnType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Terse(AtomicKind),
            Verbose(Verbose),
        }

        #[derive(Deserialize)]
        struct Verbose {
            key: BaseType,
            #[serde(default)]
            value: Option<BaseType>,
            #[serde(default = "one")]
            min: u64,
            #[serde(default)]
            max: Option<Limit>,
        }

        fn one() -> u64 {
            1
        }

        match Repr::deserialize(deserializer)? {
            Repr::Terse(kind) => Ok(ColumnType::scalar(kind)),
            Repr::Verbose(v) => Ok(ColumnType {
                key: v.key,
                value: v.value,
                min: v.min,
                max: v.max.unwrap_or(Limit::Finite(1)),
            }),
        }
    }
}

/// The schema of one column.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnSchema {
    #[serde(rename = "type")]
    pub ty: ColumnType,

    /// Whether the column may be changed after the row is inserted.
    #[serde(default = "default_mutable")]
    pub mutable: bool,

    /// Ephemeral columns are not persisted by the server.
    #[serde(default)]
    pub ephemeral: bool,
}

fn default_mutable() -> bool {
    true
}
