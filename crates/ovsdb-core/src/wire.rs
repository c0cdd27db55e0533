//! The self-describing wire forms of RFC 7047 §5.1.
//!
//! Scalars travel bare; composite values are tagged two-element JSON
//! arrays: `["set", [...]]`, `["map", [[k, v], ...]]`, `["uuid", "..."]`
//! and `["named-uuid", "..."]`.

mod condition;
pub use condition::{Condition, Function};

mod mutation;
pub use mutation::{Mutation, Mutator};

mod operation;
pub use operation::{OpKind, Operation};

mod row;
pub use row::Row;

mod uuid;
pub use self::uuid::Uuid;

mod value;
pub use value::Value;
