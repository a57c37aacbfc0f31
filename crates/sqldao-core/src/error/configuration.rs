use super::Error;

/// Error when a domain object is declared in a way the compiler cannot map
/// onto a relational schema.
///
/// This occurs when:
/// - A variant's decoration invariants are violated (`unique` on a literal,
///   missing `unique` on an entity)
/// - An entity or event is nested directly instead of referenced by uuid
/// - A literal is referenced by uuid instead of nested directly
/// - A `unique` entry names no declared property
/// - An array property has an element shape that cannot be stored
/// - A reference property is named after a different domain object
/// - A reserved column is redeclared with a different type
///
/// The message is meant to be shown to the user verbatim.
#[derive(Debug)]
pub(super) struct ConfigurationError {
    domain_object: Box<str>,
    property: Option<Box<str>>,
    message: Box<str>,
    remediation: Option<Box<str>>,
}

impl ConfigurationError {
    pub(super) fn domain_object(&self) -> &str {
        &self.domain_object
    }

    pub(super) fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }
}

impl std::error::Error for ConfigurationError {}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid domain object `{}`", self.domain_object)?;

        if let Some(property) = &self.property {
            write!(f, " property `{property}`")?;
        }

        write!(f, ": {}", self.message)?;

        if let Some(remediation) = &self.remediation {
            write!(f, "; {remediation}")?;
        }

        Ok(())
    }
}

impl Error {
    /// Creates a configuration error about a whole domain object.
    pub fn invalid_domain_object(domain_object: &str, message: impl Into<String>) -> Error {
        Error::configuration(domain_object, None, message.into(), None)
    }

    /// Creates a configuration error about one property of a domain object.
    pub fn invalid_property(
        domain_object: &str,
        property: &str,
        message: impl Into<String>,
    ) -> Error {
        Error::configuration(domain_object, Some(property), message.into(), None)
    }

    /// Creates a configuration error about one property of a domain object,
    /// including a suggestion of how to fix the declaration.
    pub fn invalid_property_with_remediation(
        domain_object: &str,
        property: &str,
        message: impl Into<String>,
        remediation: impl Into<String>,
    ) -> Error {
        Error::configuration(
            domain_object,
            Some(property),
            message.into(),
            Some(remediation.into()),
        )
    }

    fn configuration(
        domain_object: &str,
        property: Option<&str>,
        message: String,
        remediation: Option<String>,
    ) -> Error {
        Error::from(super::ErrorKind::Configuration(ConfigurationError {
            domain_object: domain_object.into(),
            property: property.map(Into::into),
            message: message.into(),
            remediation: remediation.map(Into::into),
        }))
    }
}
