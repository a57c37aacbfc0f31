//! Domain-level metadata, as declared by the application.

mod object;
pub use object::{Decorations, DomainObject, Variant};

mod property;
pub use property::{DomainObjectProperty, DomainObjectReference, PropertyTy};

mod universe;
pub use universe::Universe;
