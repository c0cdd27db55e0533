mod adhoc;
mod cancelled;
mod condition_error;
mod constraint_violation;
mod illegal_mutator;
mod immutable_column;
mod invalid_field_reference;
mod invalid_schema;
mod no_index;
mod not_found;
mod type_mismatch;
mod unknown_column;
mod unknown_table;
mod unsupported_operation;

use adhoc::Adhoc;
use cancelled::Cancelled;
use condition_error::ConditionError;
use constraint_violation::ConstraintViolation;
use illegal_mutator::IllegalMutator;
use immutable_column::ImmutableColumn;
use invalid_field_reference::InvalidFieldReference;
use invalid_schema::InvalidSchema;
use no_index::NoIndex;
use not_found::NotFound;
use std::sync::Arc;
use type_mismatch::TypeMismatch;
use unknown_column::UnknownColumn;
use unknown_table::UnknownTable;
use unsupported_operation::UnsupportedOperation;

/// An error produced by the OVSDB client core.
///
/// Errors are distinguishable by kind: every kind has a constructor and an
/// `is_*` predicate, so consumers never have to match on message text.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(Adhoc),
    Cancelled(Cancelled),
    ConditionError(ConditionError),
    ConstraintViolation(ConstraintViolation),
    IllegalMutator(IllegalMutator),
    ImmutableColumn(ImmutableColumn),
    InvalidFieldReference(InvalidFieldReference),
    InvalidSchema(InvalidSchema),
    NoIndex(NoIndex),
    NotFound(NotFound),
    TypeMismatch(TypeMismatch),
    UnknownColumn(UnknownColumn),
    UnknownTable(UnknownTable),
    UnsupportedOperation(UnsupportedOperation),
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, ending with the root cause.
    pub fn context(self, consequent: Error) -> Error {
        let mut err = consequent;
        let inner = Arc::get_mut(&mut err.inner).unwrap();
        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        inner.cause = Some(self);
        err
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Cancelled(err) => core::fmt::Display::fmt(err, f),
            ConditionError(err) => core::fmt::Display::fmt(err, f),
            ConstraintViolation(err) => core::fmt::Display::fmt(err, f),
            IllegalMutator(err) => core::fmt::Display::fmt(err, f),
            ImmutableColumn(err) => core::fmt::Display::fmt(err, f),
            InvalidFieldReference(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            NoIndex(err) => core::fmt::Display::fmt(err, f),
            NotFound(err) => core::fmt::Display::fmt(err, f),
            TypeMismatch(err) => core::fmt::Display::fmt(err, f),
            UnknownColumn(err) => core::fmt::Display::fmt(err, f),
            UnknownTable(err) => core::fmt::Display::fmt(err, f),
            UnsupportedOperation(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}
