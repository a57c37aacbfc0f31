use super::Error;

/// Error when the compiler, or a caller of it, breaks an invariant.
///
/// This occurs when:
/// - An expression generator is asked about a reference whose relationship
///   was not supplied
/// - A reference method and property shape combination has no handling
///
/// These errors indicate a bug and are never caused by the domain-object
/// declarations themselves.
#[derive(Debug)]
pub(super) struct InternalConsistencyError {
    message: Box<str>,
}

impl std::error::Error for InternalConsistencyError {}

impl core::fmt::Display for InternalConsistencyError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "internal consistency failure: {}", self.message)
    }
}

impl Error {
    /// Creates an internal consistency error.
    pub fn internal_consistency(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InternalConsistency(
            InternalConsistencyError {
                message: message.into().into(),
            },
        ))
    }
}
