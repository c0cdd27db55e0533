//! Parsed table schemas, per RFC 7047 §3.
//!
//! Schemas are parsed once at connection startup and immutable thereafter;
//! every lookup is read-only and safe for concurrent readers.

mod atomic;
pub use atomic::{AtomicKind, Limit, RefType};

mod column;
pub use column::{BaseType, ColumnSchema, ColumnType};

mod database;
pub use database::DatabaseSchema;

mod table;
pub use table::{TableSchema, UUID_COLUMN};
