//! Domain-object metadata and its relational-schema counterpart.
//!
//! The `domain` module describes what the application declares. The `sql`
//! and `relationship` modules describe the computed mapping onto tables and
//! columns. `reference` decides which properties point at other domain
//! objects, `builder` derives one relationship per domain object, and
//! `provision` orders relationships so dependencies come first.

pub mod domain;
pub use domain::{DomainObject, DomainObjectProperty, DomainObjectReference, Universe, Variant};

mod builder;
pub use builder::Builder;

mod limits;
pub use limits::Limits;

mod name;
pub use name::Name;

mod provision;

pub mod reference;
pub use reference::{Classifier, Disambiguator, Resolution};

pub mod relationship;
pub use relationship::{
    PropertyPair, Relationship, RelationshipDecorations, RelationshipName, Relationships,
    UniqueKey,
};

pub mod sql;
pub use sql::{ReferenceMethod, SqlSchemaProperty, SqlSchemaReference};

use crate::Result;
