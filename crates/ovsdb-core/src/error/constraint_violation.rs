use super::Error;

/// Error when a value falls outside a column's declared constraints, e.g.
/// an enum value that is not a member of the enum domain.
#[derive(Debug)]
pub(super) struct ConstraintViolation {
    column: Box<str>,
    detail: Box<str>,
}

impl core::fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "constraint violation: column {}: {}",
            self.column, self.detail
        )
    }
}

impl Error {
    /// Creates a constraint violation error for `column`.
    pub fn constraint_violation(column: impl Into<String>, detail: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ConstraintViolation(ConstraintViolation {
            column: column.into().into_boxed_str(),
            detail: detail.into().into_boxed_str(),
        }))
    }

    /// Returns `true` if this error is a constraint violation.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConstraintViolation(_))
    }
}
