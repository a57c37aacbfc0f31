mod adhoc;
mod ambiguous_reference;
mod configuration;
mod cyclic_reference;
mod internal_consistency;

use adhoc::AdhocError;
use ambiguous_reference::AmbiguousReferenceError;
use configuration::ConfigurationError;
use cyclic_reference::CyclicReferenceError;
use internal_consistency::InternalConsistencyError;
use std::sync::Arc;

/// Creates an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while compiling domain objects.
///
/// Errors fall in two families. Configuration errors (including ambiguous
/// references and cyclic references) are caused by the domain-object
/// declarations and are meant to be surfaced to the user verbatim. Internal
/// consistency errors indicate that the compiler or its caller broke an
/// invariant, for example by asking for expressions without supplying a
/// referenced relationship.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }

        let inner = err
            .inner
            .as_mut()
            .and_then(Arc::get_mut)
            .expect("consequent error must be uniquely owned");
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
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    fn find_kind<T>(&self, f: impl Fn(&ErrorKind) -> Option<&T>) -> Option<&T> {
        self.chain().find_map(|err| f(err.kind()))
    }

    /// Returns `true` if the error was caused by the domain-object
    /// declarations rather than by the compiler.
    pub fn is_configuration(&self) -> bool {
        self.chain().any(|err| {
            matches!(
                err.kind(),
                ErrorKind::Configuration(_)
                    | ErrorKind::AmbiguousReference(_)
                    | ErrorKind::CyclicReference(_)
            )
        })
    }

    /// Returns `true` if the error signals a broken internal invariant.
    pub fn is_internal_consistency(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), ErrorKind::InternalConsistency(_)))
    }

    /// Name of the domain object a configuration error is about.
    pub fn domain_object(&self) -> Option<&str> {
        self.chain().find_map(|err| match err.kind() {
            ErrorKind::Configuration(err) => Some(err.domain_object()),
            ErrorKind::AmbiguousReference(err) => Some(err.domain_object()),
            _ => None,
        })
    }

    /// Name of the property a configuration error is about, if any.
    pub fn property(&self) -> Option<&str> {
        self.chain().find_map(|err| match err.kind() {
            ErrorKind::Configuration(err) => err.property(),
            ErrorKind::AmbiguousReference(err) => Some(err.property()),
            _ => None,
        })
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

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
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Configuration(ConfigurationError),
    AmbiguousReference(AmbiguousReferenceError),
    CyclicReference(CyclicReferenceError),
    InternalConsistency(InternalConsistencyError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Configuration(err) => core::fmt::Display::fmt(err, f),
            AmbiguousReference(err) => core::fmt::Display::fmt(err, f),
            CyclicReference(err) => core::fmt::Display::fmt(err, f),
            InternalConsistency(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown sqldao error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_chain_display() {
        let root = Error::invalid_domain_object("Train", "`unique` must be declared");
        let top = err!("deriving relationships");

        let chained = root.context(top);
        assert_eq!(
            chained.to_string(),
            "deriving relationships: invalid domain object `Train`: `unique` must be declared"
        );
        assert!(chained.is_configuration());
        assert_eq!(chained.domain_object(), Some("Train"));
        assert_eq!(chained.property(), None);
    }

    #[test]
    fn anyhow_bridge() {
        let err: Error = anyhow::anyhow!("something failed").into();
        assert_eq!(err.to_string(), "something failed");
        assert!(!err.is_configuration());
        assert!(!err.is_internal_consistency());
    }

    #[test]
    fn property_error_with_remediation() {
        let err = Error::invalid_property_with_remediation(
            "Train",
            "engineer",
            "directly nesting entity `TrainEngineer` is forbidden",
            "reference it by uuid instead",
        );
        assert_eq!(
            err.to_string(),
            "invalid domain object `Train` property `engineer`: directly nesting entity \
             `TrainEngineer` is forbidden; reference it by uuid instead"
        );
        assert_eq!(err.property(), Some("engineer"));
    }

    #[test]
    fn ambiguous_reference_lists_matches() {
        let err = Error::ambiguous_reference(
            "Person",
            "address",
            vec!["HomeAddress".to_string(), "WorkAddress".to_string()],
        );
        assert!(err.is_configuration());
        assert_eq!(err.ambiguous_matches(), Some(&["HomeAddress".to_string(), "WorkAddress".to_string()][..]));
        assert!(err.to_string().contains("`HomeAddress`, `WorkAddress`"));
    }

    #[test]
    fn internal_consistency_is_not_configuration() {
        let err = Error::internal_consistency("relationship for `Geocode` was not supplied");
        assert!(err.is_internal_consistency());
        assert!(!err.is_configuration());
        assert_eq!(
            err.to_string(),
            "internal consistency failure: relationship for `Geocode` was not supplied"
        );
    }
}
