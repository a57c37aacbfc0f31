use super::{DomainObjectProperty, DomainObjectReference};

use indexmap::IndexMap;
use std::fmt;

/// Structural description of one application concept.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainObject {
    /// Name of the domain object, in upper camel case (`TrainEngineer`)
    pub name: String,

    /// Literal, entity, or event
    pub variant: Variant,

    /// Declared properties, in declaration order
    pub properties: IndexMap<String, DomainObjectProperty>,

    /// Identity and mutability modifiers
    #[cfg_attr(feature = "serde", serde(default))]
    pub decorations: Decorations,
}

/// Identity rules of a domain object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Variant {
    /// Value object. Identified by all of its properties, never updated.
    Literal,

    /// Has a persistent identity and may change over time.
    Entity,

    /// Immutable, identified by a natural key that includes when it occurred.
    Event,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Decorations {
    /// Properties forming the natural key. Must be unset for literals.
    pub unique: Option<Vec<String>>,

    /// Properties that may change after creation. Must be unset for literals.
    pub updatable: Option<Vec<String>>,

    /// Alternative name used when the object's table is aliased in queries.
    pub alias: Option<String>,
}

impl DomainObject {
    pub fn new(name: impl Into<String>, variant: Variant) -> Self {
        Self {
            name: name.into(),
            variant,
            properties: IndexMap::new(),
            decorations: Decorations::default(),
        }
    }

    /// Shorthand for a new literal.
    pub fn literal(name: impl Into<String>) -> Self {
        Self::new(name, Variant::Literal)
    }

    /// Shorthand for a new entity.
    pub fn entity(name: impl Into<String>) -> Self {
        Self::new(name, Variant::Entity)
    }

    /// Shorthand for a new event.
    pub fn event(name: impl Into<String>) -> Self {
        Self::new(name, Variant::Event)
    }

    pub fn property(mut self, property: DomainObjectProperty) -> Self {
        self.properties.insert(property.name.clone(), property);
        self
    }

    pub fn unique<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.decorations.unique = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn updatable<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.decorations.updatable = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.decorations.alias = Some(alias.into());
        self
    }

    /// A reference to this domain object, as embedded in property types.
    pub fn reference(&self) -> DomainObjectReference {
        DomainObjectReference {
            name: self.name.clone(),
            variant: self.variant,
        }
    }

    pub fn is_updatable(&self, property: &str) -> bool {
        self.decorations
            .updatable
            .as_ref()
            .is_some_and(|updatable| updatable.iter().any(|name| name == property))
    }
}

impl Variant {
    pub fn is_literal(self) -> bool {
        matches!(self, Self::Literal)
    }

    /// Entities and events carry a uuid and may be referenced by it.
    pub fn is_identifiable(self) -> bool {
        matches!(self, Self::Entity | Self::Event)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Literal => "literal",
            Self::Entity => "entity",
            Self::Event => "event",
        })
    }
}
