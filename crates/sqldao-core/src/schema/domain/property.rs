use super::Variant;

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainObjectProperty {
    /// The property name, in lower camel case (`homeStationGeocode`)
    pub name: String,

    /// Primitive, reference, array, ...
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: PropertyTy,

    /// True if the property may be null.
    #[cfg_attr(feature = "serde", serde(default))]
    pub nullable: bool,

    /// True if the property must be supplied on creation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "of", rename_all = "lowercase")
)]
pub enum PropertyTy {
    String,
    Number,
    Boolean,
    Date,

    /// One of a fixed set of string values.
    Enum(Vec<String>),

    /// Another domain object, embedded by name and variant.
    Reference(DomainObjectReference),

    /// A list of elements of the given type.
    Array(Box<PropertyTy>),
}

/// Points at another domain object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainObjectReference {
    pub name: String,
    pub variant: Variant,
}

impl DomainObjectProperty {
    pub fn new(name: impl Into<String>, ty: PropertyTy) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: false,
            required: true,
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, PropertyTy::String)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, PropertyTy::Number)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, PropertyTy::Boolean)
    }

    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, PropertyTy::Date)
    }

    pub fn reference(name: impl Into<String>, target: DomainObjectReference) -> Self {
        Self::new(name, PropertyTy::Reference(target))
    }

    pub fn array(name: impl Into<String>, element: PropertyTy) -> Self {
        Self::new(name, PropertyTy::Array(Box::new(element)))
    }

    /// Marks the property as nullable, and therefore not required.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self.required = false;
        self
    }
}

impl PropertyTy {
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// The element type if this is an array.
    pub fn element(&self) -> Option<&PropertyTy> {
        match self {
            Self::Array(element) => Some(element),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Number => f.write_str("number"),
            Self::Boolean => f.write_str("boolean"),
            Self::Date => f.write_str("date"),
            Self::Enum(_) => f.write_str("enum"),
            Self::Reference(reference) => f.write_str(&reference.name),
            Self::Array(element) => write!(f, "{element}[]"),
        }
    }
}

impl DomainObjectReference {
    pub fn new(name: impl Into<String>, variant: Variant) -> Self {
        Self {
            name: name.into(),
            variant,
        }
    }
}
