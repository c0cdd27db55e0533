use super::Error;

/// Error when a mutator is applied to a column type it cannot operate on,
/// e.g. an arithmetic mutator on a string column or `insert` on a scalar.
#[derive(Debug)]
pub(super) struct IllegalMutator {
    mutator: Box<str>,
    column_type: Box<str>,
}

impl core::fmt::Display for IllegalMutator {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "mutator {} is not applicable to a column of type {}",
            self.mutator, self.column_type
        )
    }
}

impl Error {
    /// Creates an illegal-mutator error.
    pub fn illegal_mutator(mutator: impl Into<String>, column_type: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::IllegalMutator(IllegalMutator {
            mutator: mutator.into().into_boxed_str(),
            column_type: column_type.into().into_boxed_str(),
        }))
    }

    /// Returns `true` if this error is an illegal-mutator error.
    pub fn is_illegal_mutator(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::IllegalMutator(_))
    }
}
