use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A row identifier in wire form.
///
/// Serializes as `["uuid", id]` when the identifier is a well-formed
/// 36-character uuid, and as `["named-uuid", id]` otherwise — the
/// placeholder form an insert operation uses before the server has
/// assigned a real identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uuid(String);

impl Uuid {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns `true` if the identifier is a named-uuid placeholder rather
    /// than a well-formed uuid.
    pub fn is_named(&self) -> bool {
        !Self::is_well_formed(&self.0)
    }

    /// Returns `true` if `id` parses as a 36-character uuid.
    pub fn is_well_formed(id: &str) -> bool {
        id.len() == 36 && uuid::Uuid::parse_str(id).is_ok()
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Uuid {
    fn from(src: &str) -> Self {
        Self(src.to_string())
    }
}

impl From<String> for Uuid {
    fn from(src: String) -> Self {
        Self(src)
    }
}

impl Serialize for Uuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tag = if self.is_named() { "named-uuid" } else { "uuid" };
        let mut seq = serializer.serialize_seq(Some(2))?;
        seq.serialize_element(tag)?;
        seq.serialize_element(&self.0)?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct UuidVisitor;

        impl<'de> Visitor<'de> for UuidVisitor {
            type Value = Uuid;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a [\"uuid\", id] or [\"named-uuid\", id] pair")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Uuid, A::Error> {
                let tag: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                if tag != "uuid" && tag != "named-uuid" {
                    return Err(de::Error::custom(format!("unexpected uuid tag: {tag}")));
                }
                let id: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                Ok(Uuid(id))
            }
        }

        deserializer.deserialize_seq(UuidVisitor)
    }
}
