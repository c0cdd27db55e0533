use super::Error;

/// Error when a wire value's shape is incompatible with the declared column
/// type, or a native field value is incompatible with its column.
#[derive(Debug)]
pub(super) struct TypeMismatch {
    expected: Box<str>,
    actual: Box<str>,
}

impl core::fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "type mismatch: expected {}, got {}",
            self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TypeMismatch(TypeMismatch {
            expected: expected.into().into_boxed_str(),
            actual: actual.into().into_boxed_str(),
        }))
    }

    /// Returns `true` if this error is a type mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeMismatch(_))
    }
}
