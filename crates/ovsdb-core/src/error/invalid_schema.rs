use super::Error;

/// Error when schema JSON cannot be parsed into a [`DatabaseSchema`].
///
/// Schema parsing happens once, at connection startup; these errors are
/// fatal at load time.
///
/// [`DatabaseSchema`]: crate::DatabaseSchema
#[derive(Debug)]
pub(super) struct InvalidSchema {
    detail: Box<str>,
}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.detail)
    }
}

impl Error {
    /// Creates an invalid-schema error.
    pub fn invalid_schema(detail: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            detail: detail.into().into_boxed_str(),
        }))
    }

    /// Returns `true` if this error is an invalid-schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSchema(_))
    }
}
