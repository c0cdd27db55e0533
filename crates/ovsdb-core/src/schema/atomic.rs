use serde::{Deserialize, Deserializer};
use std::fmt;

/// The five OVSDB atomic types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AtomicKind {
    Integer,
    Real,
    Boolean,
    String,
    Uuid,
}

impl AtomicKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Real => "real",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Uuid => "uuid",
        }
    }
}

impl fmt::Display for AtomicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference strength of a uuid column pointing at another table.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefType {
    #[default]
    Strong,
    Weak,
}

/// An upper cardinality bound: a finite count or `"unlimited"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Limit {
    Finite(u64),
    Unlimited,
}

impl Limit {
    pub fn is_unlimited(self) -> bool {
        matches!(self, Self::Unlimited)
    }

    /// Returns `true` when the bound admits more than one element.
    pub fn exceeds_one(self) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Finite(n) => n > 1,
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(n) => n.fmt(f),
            Self::Unlimited => "unlimited".fmt(f),
        }
    }
}

impl<'de> Deserialize<'de> for Limit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Count(u64),
            Word(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Count(n) => Ok(Limit::Finite(n)),
            Repr::Word(word) if word == "unlimited" => Ok(Limit::Unlimited),
            Repr::Word(word) => Err(serde::de::Error::custom(format!(
                "expected a count or \"unlimited\", got \"{word}\""
            ))),
        }
    }
}
