use super::Error;

/// Context frame marking an error that was deferred at condition
/// construction time and surfaced when the condition was used.
#[derive(Debug)]
pub(super) struct ConditionError;

impl core::fmt::Display for ConditionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("condition error")
    }
}

impl Error {
    /// Wraps `cause` so it displays with the `condition error:` prefix.
    pub fn condition_error(cause: Error) -> Error {
        cause.context(Error::from(super::ErrorKind::ConditionError(
            ConditionError,
        )))
    }

    /// Returns `true` if this error carries the condition-error frame.
    pub fn is_condition_error(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConditionError(_))
    }
}
