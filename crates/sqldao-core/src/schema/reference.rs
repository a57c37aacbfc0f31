//! Decides whether a property refers to another domain object, and how.

mod disambiguate;
pub use disambiguate::{Disambiguator, Resolution};

use super::{
    domain::{DomainObjectProperty, DomainObjectReference, PropertyTy, Universe},
    sql::{ReferenceMethod, SqlSchemaReference},
    Limits, Result,
};
use crate::Error;

use std_util::str;
use tracing::trace;

/// Suffix marking a string property as the uuid of another domain object.
pub const UUID_SUFFIX: &str = "Uuid";

/// Suffix marking a string array property as uuids of other domain objects.
pub const UUIDS_SUFFIX: &str = "Uuids";

/// Classifies properties against the universe of known domain objects.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    universe: &'a Universe,
    limits: Limits,
}

/// What a property's declaration says it might be, before any lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// Typed as a reference, or an array of references.
    Direct(&'a DomainObjectReference),

    /// A string (array) named `...Uuid` (`...Uuids`). Carries the name with
    /// the suffix removed.
    Implicit { stem: &'a str },

    NotReference,
}

impl<'a> Candidate<'a> {
    pub fn of(property: &'a DomainObjectProperty) -> Self {
        let (ty, suffix) = match &property.ty {
            PropertyTy::Array(element) => (&**element, UUIDS_SUFFIX),
            ty => (ty, UUID_SUFFIX),
        };

        match ty {
            PropertyTy::Reference(target) => Candidate::Direct(target),
            PropertyTy::String => match property.name.strip_suffix(suffix) {
                Some(stem) if !stem.is_empty() => Candidate::Implicit { stem },
                _ => Candidate::NotReference,
            },
            _ => Candidate::NotReference,
        }
    }
}

impl<'a> Classifier<'a> {
    pub fn new(universe: &'a Universe, limits: Limits) -> Self {
        Self { universe, limits }
    }

    /// Returns how `property` of the domain object `owner` refers to another
    /// domain object, or `None` if it does not.
    pub fn classify(
        &self,
        owner: &str,
        property: &DomainObjectProperty,
    ) -> Result<Option<SqlSchemaReference>> {
        match Candidate::of(property) {
            Candidate::Direct(target) => self.classify_direct(owner, property, target).map(Some),
            Candidate::Implicit { stem } => self.classify_implicit(owner, property, stem),
            Candidate::NotReference => Ok(None),
        }
    }

    fn classify_direct(
        &self,
        owner: &str,
        property: &DomainObjectProperty,
        target: &DomainObjectReference,
    ) -> Result<SqlSchemaReference> {
        if target.variant.is_identifiable() {
            let suffix = if property.ty.is_array() {
                UUIDS_SUFFIX
            } else {
                UUID_SUFFIX
            };

            return Err(Error::invalid_property_with_remediation(
                owner,
                &property.name,
                format!(
                    "directly nesting {} `{}` is forbidden",
                    target.variant, target.name
                ),
                format!(
                    "reference it by uuid instead, e.g. `{}{suffix}: string{}`",
                    str::camel_case(&target.name),
                    if property.ty.is_array() { "[]" } else { "" },
                ),
            ));
        }

        let disambiguator = Disambiguator::new(
            self.universe
                .names()
                .chain(std::iter::once(target.name.as_str())),
            self.limits.max_qualifier_drops,
        );

        match disambiguator.resolve(&property.name) {
            Resolution::Resolved(name) if name == target.name => Ok(SqlSchemaReference {
                method: ReferenceMethod::DirectByNesting,
                of: target.clone(),
            }),
            Resolution::Resolved(other) => Err(Error::invalid_property_with_remediation(
                owner,
                &property.name,
                format!(
                    "incorrectly named reference: typed as `{}` but named after `{other}`",
                    target.name
                ),
                format!("rename the property so that it ends with `{}`", target.name),
            )),
            Resolution::Ambiguous(matches) => Err(Error::ambiguous_reference(
                owner,
                &property.name,
                matches,
            )),
            Resolution::Unresolved => Err(Error::invalid_property_with_remediation(
                owner,
                &property.name,
                format!(
                    "incorrectly named reference: typed as `{}` but its name does not refer to it",
                    target.name
                ),
                format!("rename the property so that it ends with `{}`", target.name),
            )),
        }
    }

    fn classify_implicit(
        &self,
        owner: &str,
        property: &DomainObjectProperty,
        stem: &str,
    ) -> Result<Option<SqlSchemaReference>> {
        let disambiguator =
            Disambiguator::new(self.universe.names(), self.limits.max_qualifier_drops);

        let name = match disambiguator.resolve(stem) {
            Resolution::Resolved(name) => name,
            Resolution::Ambiguous(matches) => {
                return Err(Error::ambiguous_reference(owner, &property.name, matches));
            }
            Resolution::Unresolved => {
                // An opaque identifier unrelated to any known domain object.
                trace!(owner, property = %property.name, "uuid-named property refers to nothing");
                return Ok(None);
            }
        };

        let target = self.universe.get(&name).ok_or_else(|| {
            Error::internal_consistency(format!(
                "disambiguation resolved `{}` to unknown domain object `{name}`",
                property.name
            ))
        })?;

        if target.variant.is_literal() {
            return Err(Error::invalid_property_with_remediation(
                owner,
                &property.name,
                format!("literal `{name}` cannot be referenced by uuid"),
                format!(
                    "nest it directly instead, e.g. `{}: {name}{}`",
                    stem,
                    if property.ty.is_array() { "[]" } else { "" },
                ),
            ));
        }

        Ok(Some(SqlSchemaReference {
            method: ReferenceMethod::ImplicitByUuid,
            of: target.reference(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::domain::Variant;

    fn geocode() -> DomainObjectReference {
        DomainObjectReference::new("Geocode", Variant::Literal)
    }

    #[test]
    fn candidates() {
        let property = DomainObjectProperty::reference("homeStationGeocode", geocode());
        assert_eq!(Candidate::of(&property), Candidate::Direct(&geocode()));

        let property = DomainObjectProperty::array("geocodes", PropertyTy::Reference(geocode()));
        assert_eq!(Candidate::of(&property), Candidate::Direct(&geocode()));

        let property = DomainObjectProperty::string("leadEngineerUuid");
        assert_eq!(
            Candidate::of(&property),
            Candidate::Implicit {
                stem: "leadEngineer"
            }
        );

        let property = DomainObjectProperty::array("locomotiveUuids", PropertyTy::String);
        assert_eq!(
            Candidate::of(&property),
            Candidate::Implicit { stem: "locomotive" }
        );
    }

    #[test]
    fn not_candidates() {
        for property in [
            DomainObjectProperty::string("name"),
            DomainObjectProperty::string("uuid"),
            DomainObjectProperty::string("Uuid"),
            DomainObjectProperty::number("engineerUuid"),
            DomainObjectProperty::array("locomotiveUuid", PropertyTy::String),
            DomainObjectProperty::string("locomotiveUuids"),
        ] {
            assert_eq!(Candidate::of(&property), Candidate::NotReference, "{property:?}");
        }
    }
}
