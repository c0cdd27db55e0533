use super::Error;

/// Error when a mutation targets a column whose schema marks it immutable.
#[derive(Debug)]
pub(super) struct ImmutableColumn {
    table: Box<str>,
    column: Box<str>,
}

impl core::fmt::Display for ImmutableColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot mutate immutable column: {}.{}",
            self.table, self.column
        )
    }
}

impl Error {
    /// Creates an immutable-column error.
    pub fn immutable_column(table: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ImmutableColumn(ImmutableColumn {
            table: table.into().into_boxed_str(),
            column: column.into().into_boxed_str(),
        }))
    }

    /// Returns `true` if this error is an immutable-column error.
    pub fn is_immutable_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ImmutableColumn(_))
    }
}
