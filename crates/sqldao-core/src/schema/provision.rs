use super::{Limits, Relationships, Result};
use crate::Error;

use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::{debug, trace};

impl Relationships {
    /// Orders every domain object so that the objects it references come
    /// before it. Tables must be created in this order.
    ///
    /// Names are scanned in lexicographic order and a name is placed as soon
    /// as everything it references is placed, so the result does not depend
    /// on declaration order. Objects still unplaced after
    /// `limits.max_provisioning_passes` scans are reported as a cyclic
    /// reference.
    pub fn provisioning_order(&self, limits: &Limits) -> Result<Vec<String>> {
        let dependencies = self.dependencies()?;

        let mut order = Vec::with_capacity(dependencies.len());
        let mut placed = HashSet::with_capacity(dependencies.len());

        for pass in 1..=limits.max_provisioning_passes {
            if order.len() == dependencies.len() {
                break;
            }

            for (name, references) in &dependencies {
                if placed.contains(name.as_str()) {
                    continue;
                }

                if references
                    .iter()
                    .all(|reference| placed.contains(reference.as_str()))
                {
                    placed.insert(name.as_str());
                    order.push(name.clone());
                }
            }

            trace!(pass, placed = order.len(), total = dependencies.len(), "provisioning pass");
        }

        if order.len() != dependencies.len() {
            let unplaced = dependencies
                .keys()
                .filter(|name| !placed.contains(name.as_str()))
                .cloned()
                .collect();

            return Err(Error::cyclic_reference(
                limits.max_provisioning_passes,
                unplaced,
                dependencies,
            ));
        }

        debug!(order = ?order, "derived provisioning order");

        Ok(order)
    }

    /// Maps each domain object to the set of domain objects it references.
    pub fn dependencies(&self) -> Result<BTreeMap<String, BTreeSet<String>>> {
        let mut dependencies = BTreeMap::new();

        for relationship in self {
            let mut references = BTreeSet::new();

            for name in relationship.referenced_names() {
                // Fails on a reference to an object nobody supplied.
                self.get(name)?;
                references.insert(name.to_string());
            }

            dependencies.insert(relationship.name.domain_object.clone(), references);
        }

        Ok(dependencies)
    }
}
