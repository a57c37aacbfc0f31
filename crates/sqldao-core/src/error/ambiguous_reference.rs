use super::Error;

/// Error when a property name matches more than one domain object at the
/// same qualifier-drop level.
#[derive(Debug)]
pub(super) struct AmbiguousReferenceError {
    domain_object: Box<str>,
    property: Box<str>,
    matches: Vec<String>,
}

impl AmbiguousReferenceError {
    pub(super) fn domain_object(&self) -> &str {
        &self.domain_object
    }

    pub(super) fn property(&self) -> &str {
        &self.property
    }
}

impl std::error::Error for AmbiguousReferenceError {}

impl core::fmt::Display for AmbiguousReferenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid domain object `{}` property `{}`: ambiguous reference, could refer to any of ",
            self.domain_object, self.property
        )?;

        let mut s = "";
        for name in &self.matches {
            write!(f, "{s}`{name}`")?;
            s = ", ";
        }

        f.write_str("; rename the property so that it ends with exactly one of them")
    }
}

impl Error {
    /// Creates an ambiguous reference error listing every matching domain
    /// object name.
    pub fn ambiguous_reference(
        domain_object: &str,
        property: &str,
        matches: Vec<String>,
    ) -> Error {
        Error::from(super::ErrorKind::AmbiguousReference(
            AmbiguousReferenceError {
                domain_object: domain_object.into(),
                property: property.into(),
                matches,
            },
        ))
    }

    /// The candidate names of an ambiguous reference error.
    pub fn ambiguous_matches(&self) -> Option<&[String]> {
        self.find_kind(|kind| match kind {
            super::ErrorKind::AmbiguousReference(err) => Some(&err.matches),
            _ => None,
        })
        .map(Vec::as_slice)
    }
}
