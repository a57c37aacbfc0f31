//! Relational-level metadata for one column.

use super::domain::DomainObjectReference;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SqlSchemaProperty {
    /// Column name, snake cased and suffixed `_id`/`_ids` for references
    pub name: String,

    pub is_nullable: bool,

    pub is_updatable: bool,

    pub is_array: bool,

    /// Set when the column stores a reference to another domain object.
    pub reference: Option<SqlSchemaReference>,
}

/// How a column refers to another domain object.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SqlSchemaReference {
    pub method: ReferenceMethod,

    /// The referenced domain object
    pub of: DomainObjectReference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ReferenceMethod {
    /// The referenced literal is nested inside the owning object. The column
    /// stores the referenced row's internal id.
    DirectByNesting,

    /// The referenced entity or event is identified by its uuid. The column
    /// stores the internal id, resolved from the uuid inside generated SQL.
    ImplicitByUuid,

    /// The referenced object is nested and its target is declared rather
    /// than resolved by name lookup. Reads and writes behave like
    /// `DirectByNesting`.
    DirectByDeclaration,
}

impl SqlSchemaProperty {
    /// A database-generated column: never null, never updated by callers.
    pub fn reserved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_nullable: false,
            is_updatable: false,
            is_array: false,
            reference: None,
        }
    }

    pub fn is_reference(&self) -> bool {
        self.reference.is_some()
    }
}

impl ReferenceMethod {
    /// True for the methods that embed the referenced object's data.
    pub fn is_direct(self) -> bool {
        matches!(self, Self::DirectByNesting | Self::DirectByDeclaration)
    }

    pub fn is_implicit(self) -> bool {
        matches!(self, Self::ImplicitByUuid)
    }
}
