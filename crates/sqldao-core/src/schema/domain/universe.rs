use super::DomainObject;
use crate::{Error, Provider, Result};

use indexmap::IndexMap;

/// Every domain object known to one compilation run, keyed by name.
///
/// Reference classification resolves property names against this set, so
/// it must be complete before any relationship is derived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Universe {
    objects: IndexMap<String, DomainObject>,
}

impl Universe {
    /// Collects domain objects, rejecting duplicate names.
    pub fn new(objects: impl IntoIterator<Item = DomainObject>) -> Result<Self> {
        let mut universe = Self::default();

        for object in objects {
            if universe.objects.contains_key(&object.name) {
                return Err(Error::invalid_domain_object(
                    &object.name,
                    "declared more than once",
                ));
            }

            universe.objects.insert(object.name.clone(), object);
        }

        Ok(universe)
    }

    /// Loads the universe from a metadata provider.
    pub fn from_provider(provider: &(impl Provider + ?Sized)) -> Result<Self> {
        Self::new(provider.domain_objects()?)
    }

    pub fn get(&self, name: &str) -> Option<&DomainObject> {
        self.objects.get(name)
    }

    pub fn objects(&self) -> impl Iterator<Item = &DomainObject> {
        self.objects.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }
}
