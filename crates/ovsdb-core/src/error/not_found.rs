use super::Error;

/// Error when a lookup against an external collaborator (e.g. the row
/// cache) finds nothing.
#[derive(Debug)]
pub(super) struct NotFound {
    context: Box<str>,
}

impl core::fmt::Display for NotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "not found: {}", self.context)
    }
}

impl Error {
    /// Creates a not-found error.
    pub fn not_found(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotFound(NotFound {
            context: context.into().into_boxed_str(),
        }))
    }

    /// Returns `true` if this error is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotFound(_))
    }
}
