use crate::{schema::DomainObject, Result};

/// Supplies the domain-object metadata a compilation run works on.
///
/// Extracting metadata from source declarations happens outside of this
/// crate. Whatever performs that extraction hands its result over through
/// this trait, and the compiler never looks at the declarations themselves.
pub trait Provider {
    fn domain_objects(&self) -> Result<Vec<DomainObject>>;
}

impl Provider for [DomainObject] {
    fn domain_objects(&self) -> Result<Vec<DomainObject>> {
        Ok(self.to_vec())
    }
}

impl Provider for Vec<DomainObject> {
    fn domain_objects(&self) -> Result<Vec<DomainObject>> {
        self.as_slice().domain_objects()
    }
}

impl<P: Provider + ?Sized> Provider for &P {
    fn domain_objects(&self) -> Result<Vec<DomainObject>> {
        (**self).domain_objects()
    }
}
