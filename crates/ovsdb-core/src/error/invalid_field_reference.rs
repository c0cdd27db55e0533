use super::Error;

/// Error when a field selector does not name a column bound by the model it
/// was applied to.
#[derive(Debug)]
pub(super) struct InvalidFieldReference {
    field: Box<str>,
}

impl core::fmt::Display for InvalidFieldReference {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "field {} is not bound by the model", self.field)
    }
}

impl Error {
    /// Creates an invalid field reference error.
    pub fn invalid_field_reference(field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidFieldReference(
            InvalidFieldReference {
                field: field.into().into_boxed_str(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid field reference.
    pub fn is_invalid_field_reference(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidFieldReference(_))
    }
}
