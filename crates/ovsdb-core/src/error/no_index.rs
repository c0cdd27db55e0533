use super::Error;

/// Error when no usable identifier or index tuple could be derived from a
/// model, so no equality condition can be built for it.
#[derive(Debug)]
pub(super) struct NoIndex {
    table: Box<str>,
}

impl core::fmt::Display for NoIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no usable identifier or index for table {}",
            self.table
        )
    }
}

impl Error {
    /// Creates a no-index error for `table`.
    pub fn no_index(table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NoIndex(NoIndex {
            table: table.into().into_boxed_str(),
        }))
    }

    /// Returns `true` if this error is a no-index error.
    pub fn is_no_index(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoIndex(_))
    }
}
