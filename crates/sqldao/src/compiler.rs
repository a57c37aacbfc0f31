use crate::{Limits, Provider, Relationship, Relationships, Result, Serializer};

use sqldao_core::{
    err,
    schema::{self, Universe},
};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Compiler {
    /// Relationship builder
    core: schema::Builder,
}

/// Output of one compilation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    /// One relationship per domain object, in declaration order
    pub relationships: Relationships,

    /// Domain-object names, every one after the objects it references
    pub provisioning_order: Vec<String>,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limits(&mut self, limits: Limits) -> &mut Self {
        self.core.limits(limits);
        self
    }

    /// Set how many leading words may be dropped from domain-object names
    /// when resolving references
    pub fn max_qualifier_drops(&mut self, max: usize) -> &mut Self {
        self.core.max_qualifier_drops(max);
        self
    }

    /// Set how many passes the provisioning order may take
    pub fn max_provisioning_passes(&mut self, max: usize) -> &mut Self {
        self.core.max_provisioning_passes(max);
        self
    }

    pub fn compile(&self, provider: &(impl Provider + ?Sized)) -> Result<Compilation> {
        let universe = Universe::from_provider(provider)?;
        let relationships = self
            .core
            .build(&universe)
            .map_err(|e| e.context(err!("failed to derive relationships")))?;
        let provisioning_order = self
            .core
            .provisioning_order(&relationships)
            .map_err(|e| e.context(err!("failed to order relationships for provisioning")))?;

        debug!(
            relationships = relationships.len(),
            ?provisioning_order,
            "compiled domain objects"
        );

        Ok(Compilation {
            relationships,
            provisioning_order,
        })
    }
}

impl Compilation {
    pub fn relationship(&self, domain_object: &str) -> Result<&Relationship> {
        self.relationships.get(domain_object)
    }

    /// Relationships in provisioning order.
    pub fn provisioned(&self) -> impl Iterator<Item = Result<&Relationship>> {
        self.provisioning_order
            .iter()
            .map(|name| self.relationships.get(name))
    }

    pub fn serializer(&self) -> Serializer<'_> {
        Serializer::new(&self.relationships)
    }
}
