//! The mapping between one domain object and its table.

use super::{domain::DomainObjectProperty, sql::SqlSchemaProperty};
use crate::{Error, Result};

use indexmap::IndexMap;

/// Defines the correspondence between one domain object and the relational
/// schema that stores it.
///
/// The relationship is computed once per compilation run and never mutated
/// afterwards. Downstream emitters read it to produce table definitions,
/// queries, and data access functions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relationship {
    pub name: RelationshipName,

    /// One pair per column. Reserved columns come first, followed by the
    /// user-declared properties in declaration order.
    pub properties: Vec<PropertyPair>,

    pub decorations: RelationshipDecorations,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationshipDecorations {
    /// The natural key, in both naming conventions.
    pub unique: UniqueKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationshipName {
    /// Table name (`train_engineer`)
    pub sql_schema: String,

    /// Domain object name (`TrainEngineer`)
    pub domain_object: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyPair {
    /// `None` for database-generated columns the user did not redeclare.
    pub domain_object: Option<DomainObjectProperty>,

    pub sql_schema: SqlSchemaProperty,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniqueKey {
    pub domain_object: Vec<String>,
    pub sql_schema: Vec<String>,
}

impl Relationship {
    /// Finds the pair for a column by its relational name.
    pub fn column(&self, name: &str) -> Option<&PropertyPair> {
        self.properties
            .iter()
            .find(|pair| pair.sql_schema.name == name)
    }

    /// Finds the pair for a domain-object property by its declared name.
    pub fn property(&self, name: &str) -> Option<&PropertyPair> {
        self.properties.iter().find(|pair| {
            pair.domain_object
                .as_ref()
                .is_some_and(|property| property.name == name)
        })
    }

    /// Pairs whose column is visible from the domain side.
    pub fn user_visible(
        &self,
    ) -> impl Iterator<Item = (&DomainObjectProperty, &SqlSchemaProperty)> {
        self.properties.iter().filter_map(|pair| {
            pair.domain_object
                .as_ref()
                .map(|property| (property, &pair.sql_schema))
        })
    }

    /// Names of every domain object this relationship refers to, by either
    /// reference method, in column order.
    pub fn referenced_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().filter_map(|pair| {
            pair.sql_schema
                .reference
                .as_ref()
                .map(|reference| reference.of.name.as_str())
        })
    }
}

impl PropertyPair {
    /// Name used on the domain side: the declared property name, or the
    /// column name for reserved columns nobody redeclared.
    pub fn domain_name(&self) -> &str {
        self.domain_object
            .as_ref()
            .map(|property| property.name.as_str())
            .unwrap_or(&self.sql_schema.name)
    }
}

/// Every relationship of a compilation run, keyed by domain-object name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relationships {
    relationships: IndexMap<String, Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, relationship: Relationship) {
        self.relationships
            .insert(relationship.name.domain_object.clone(), relationship);
    }

    /// Returns the relationship for a domain object.
    ///
    /// A missing relationship means a dependency was not supplied to
    /// whoever is asking, which is an internal consistency failure.
    pub fn get(&self, domain_object: &str) -> Result<&Relationship> {
        self.relationships.get(domain_object).ok_or_else(|| {
            Error::internal_consistency(format!(
                "relationship for domain object `{domain_object}` was not supplied"
            ))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.values()
    }

    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }
}

impl FromIterator<Relationship> for Relationships {
    fn from_iter<T: IntoIterator<Item = Relationship>>(iter: T) -> Self {
        let mut relationships = Self::new();
        for relationship in iter {
            relationships.insert(relationship);
        }
        relationships
    }
}

impl<'a> IntoIterator for &'a Relationships {
    type Item = &'a Relationship;
    type IntoIter = indexmap::map::Values<'a, String, Relationship>;

    fn into_iter(self) -> Self::IntoIter {
        self.relationships.values()
    }
}
