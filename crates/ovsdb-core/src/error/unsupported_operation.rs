use super::Error;

/// Error when an operation is not supported by the receiver, e.g. local
/// matching against a conditional built from explicit conditions.
#[derive(Debug)]
pub(super) struct UnsupportedOperation {
    context: Box<str>,
}

impl core::fmt::Display for UnsupportedOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported operation: {}", self.context)
    }
}

impl Error {
    /// Creates an unsupported-operation error.
    pub fn unsupported_operation(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedOperation(
            UnsupportedOperation {
                context: context.into().into_boxed_str(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported-operation error.
    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedOperation(_))
    }
}
