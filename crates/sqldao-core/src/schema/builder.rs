mod reserved;
use reserved::ReservedColumn;

use super::{
    domain::{DomainObject, DomainObjectProperty, PropertyTy, Universe, Variant},
    reference::{Classifier, UUIDS_SUFFIX},
    relationship::{
        PropertyPair, Relationship, RelationshipDecorations, RelationshipName, Relationships,
        UniqueKey,
    },
    sql::{SqlSchemaProperty, SqlSchemaReference},
    Limits, Result,
};
use crate::Error;

use std_util::str;
use tracing::{debug, warn};

/// Derives relationships from domain-object metadata.
#[derive(Debug, Clone, Default)]
pub struct Builder {
    /// Bounds on the fixed-point searches
    pub(super) limits: Limits,
}

/// Used to track state while deriving one relationship
struct BuildRelationship<'a> {
    object: &'a DomainObject,

    classifier: Classifier<'a>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limits(&mut self, limits: Limits) -> &mut Self {
        self.limits = limits;
        self
    }

    pub fn max_qualifier_drops(&mut self, max: usize) -> &mut Self {
        self.limits.max_qualifier_drops = max;
        self
    }

    pub fn max_provisioning_passes(&mut self, max: usize) -> &mut Self {
        self.limits.max_provisioning_passes = max;
        self
    }

    /// Derives the relationship of every domain object in the universe, in
    /// the universe's order.
    pub fn build(&self, universe: &Universe) -> Result<Relationships> {
        universe
            .objects()
            .map(|object| self.build_relationship(object, universe))
            .collect()
    }

    /// Derives the relationship of a single domain object. The universe is
    /// needed to classify the object's references.
    pub fn build_relationship(
        &self,
        object: &DomainObject,
        universe: &Universe,
    ) -> Result<Relationship> {
        let relationship = BuildRelationship {
            object,
            classifier: Classifier::new(universe, self.limits),
        }
        .build()?;

        debug!(
            domain_object = %relationship.name.domain_object,
            sql_schema = %relationship.name.sql_schema,
            columns = relationship.properties.len(),
            "derived relationship"
        );

        Ok(relationship)
    }

    /// Orders relationships for provisioning within this builder's pass
    /// budget. See [`Relationships::provisioning_order`].
    pub fn provisioning_order(&self, relationships: &Relationships) -> Result<Vec<String>> {
        relationships.provisioning_order(&self.limits)
    }
}

impl BuildRelationship<'_> {
    fn build(&self) -> Result<Relationship> {
        self.verify_decorations()?;

        let reserved = reserved::for_variant(self.object.variant);

        let mut properties = Vec::with_capacity(reserved.len() + self.object.properties.len());

        for column in reserved {
            properties.push(self.map_reserved_column(column)?);
        }

        for property in self.object.properties.values() {
            if reserved.iter().any(|column| column.property == property.name) {
                continue;
            }

            properties.push(self.map_property(property)?);
        }

        let unique = self.unique_key(&properties, reserved.len())?;

        Ok(Relationship {
            name: RelationshipName {
                sql_schema: str::snake_case(&self.object.name),
                domain_object: self.object.name.clone(),
            },
            properties,
            decorations: RelationshipDecorations { unique },
        })
    }

    fn verify_decorations(&self) -> Result<()> {
        let name = &self.object.name;
        let decorations = &self.object.decorations;

        match self.object.variant {
            Variant::Literal => {
                if decorations.unique.is_some() {
                    return Err(Error::invalid_domain_object(
                        name,
                        "literals are unique on all of their properties and must not declare `unique`",
                    ));
                }

                if decorations.updatable.is_some() {
                    return Err(Error::invalid_domain_object(
                        name,
                        "literals are never updated and must not declare `updatable`",
                    ));
                }
            }
            variant @ (Variant::Entity | Variant::Event) => {
                if !matches!(&decorations.unique, Some(unique) if !unique.is_empty()) {
                    return Err(Error::invalid_domain_object(
                        name,
                        format!(
                            "an {variant} must declare `unique`, the properties forming its natural key"
                        ),
                    ));
                }

                match (&decorations.updatable, variant) {
                    (None, Variant::Entity) => {
                        return Err(Error::invalid_domain_object(
                            name,
                            "an entity must declare `updatable`, even if it is empty",
                        ));
                    }
                    (Some(updatable), Variant::Event) if !updatable.is_empty() => {
                        warn!(
                            domain_object = %name,
                            updatable = ?updatable,
                            "events are immutable but declare `updatable` properties"
                        );
                    }
                    _ => {}
                }

                for property in decorations.updatable.iter().flatten() {
                    if !self.object.properties.contains_key(property) {
                        warn!(
                            domain_object = %name,
                            property = %property,
                            "`updatable` names a property that is not declared"
                        );
                    }
                }
            }
        }

        Ok(())
    }

    fn map_reserved_column(&self, column: &ReservedColumn) -> Result<PropertyPair> {
        let Some(property) = self.object.properties.get(column.property) else {
            return Ok(PropertyPair {
                domain_object: None,
                sql_schema: SqlSchemaProperty::reserved(column.column),
            });
        };

        if property.ty != column.ty {
            return Err(Error::invalid_property(
                &self.object.name,
                &property.name,
                format!(
                    "redeclares the reserved column `{}`, which must be of type `{}` but is `{}`",
                    column.column, column.ty, property.ty
                ),
            ));
        }

        Ok(PropertyPair {
            domain_object: Some(property.clone()),
            sql_schema: SqlSchemaProperty::reserved(column.column),
        })
    }

    fn map_property(&self, property: &DomainObjectProperty) -> Result<PropertyPair> {
        self.verify_array_shape(property)?;

        let reference = self.classifier.classify(&self.object.name, property)?;

        Ok(PropertyPair {
            domain_object: Some(property.clone()),
            sql_schema: SqlSchemaProperty {
                name: column_name(property, reference.as_ref()),
                is_nullable: property.nullable,
                is_updatable: self.object.is_updatable(&property.name),
                is_array: property.ty.is_array(),
                reference,
            },
        })
    }

    /// Arrays may only hold references, or uuids of references.
    fn verify_array_shape(&self, property: &DomainObjectProperty) -> Result<()> {
        let Some(element) = property.ty.element() else {
            return Ok(());
        };

        match element {
            PropertyTy::Reference(_) => Ok(()),
            PropertyTy::String if property.name.ends_with(UUIDS_SUFFIX) => Ok(()),
            _ => Err(Error::invalid_property_with_remediation(
                &self.object.name,
                &property.name,
                format!("arrays of `{element}` cannot be stored"),
                "wrap the element in its own domain literal or entity and reference that instead",
            )),
        }
    }

    /// Expresses the natural key in both naming conventions.
    fn unique_key(&self, properties: &[PropertyPair], reserved: usize) -> Result<UniqueKey> {
        let Some(unique) = &self.object.decorations.unique else {
            // Literals are unique on every property they declare.
            let user_columns = &properties[reserved..];

            return Ok(UniqueKey {
                domain_object: user_columns
                    .iter()
                    .map(|pair| pair.domain_name().to_string())
                    .collect(),
                sql_schema: user_columns
                    .iter()
                    .map(|pair| pair.sql_schema.name.clone())
                    .collect(),
            });
        };

        let mut sql_schema = Vec::with_capacity(unique.len());

        for entry in unique {
            let Some(pair) = properties.iter().find(|pair| {
                pair.domain_object
                    .as_ref()
                    .is_some_and(|property| &property.name == entry)
            }) else {
                return Err(Error::invalid_domain_object(
                    &self.object.name,
                    format!("`unique` names `{entry}`, which is not a declared property"),
                ));
            };

            sql_schema.push(pair.sql_schema.name.clone());
        }

        Ok(UniqueKey {
            domain_object: unique.clone(),
            sql_schema,
        })
    }
}

/// Snake cases the property name, and for references makes sure it ends in
/// `_id` (single) or `_ids` (array).
fn column_name(property: &DomainObjectProperty, reference: Option<&SqlSchemaReference>) -> String {
    let name = str::snake_case(&property.name);

    if reference.is_none() {
        return name;
    }

    if property.ty.is_array() {
        if let Some(stem) = name.strip_suffix("_uuids") {
            format!("{stem}_ids")
        } else if name.ends_with("_ids") {
            name
        } else {
            format!("{}_ids", str::singularize(&name))
        }
    } else if let Some(stem) = name.strip_suffix("_uuid") {
        format!("{stem}_id")
    } else if name.ends_with("_id") {
        name
    } else {
        format!("{name}_id")
    }
}
