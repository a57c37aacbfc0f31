use super::Error;

use std::collections::{BTreeMap, BTreeSet};

/// Error when a provisioning order cannot be found within the pass budget,
/// which almost always means two domain objects reference each other.
#[derive(Debug)]
pub(super) struct CyclicReferenceError {
    passes: usize,
    unplaced: Vec<String>,
    dependencies: BTreeMap<String, BTreeSet<String>>,
}

impl std::error::Error for CyclicReferenceError {}

impl core::fmt::Display for CyclicReferenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "could not order domain objects for provisioning after {} passes, \
             probably because of a cyclic reference; unplaced: [{}]; dependencies: {{",
            self.passes,
            self.unplaced.join(", ")
        )?;

        let mut s = "";
        for (name, references) in &self.dependencies {
            let references = references.iter().map(String::as_str).collect::<Vec<_>>();
            write!(f, "{s}{name}: [{}]", references.join(", "))?;
            s = ", ";
        }

        f.write_str("}")
    }
}

impl Error {
    /// Creates a cyclic reference error, reporting the full dependency map.
    pub fn cyclic_reference(
        passes: usize,
        unplaced: Vec<String>,
        dependencies: BTreeMap<String, BTreeSet<String>>,
    ) -> Error {
        Error::from(super::ErrorKind::CyclicReference(CyclicReferenceError {
            passes,
            unplaced,
            dependencies,
        }))
    }

    /// Returns `true` if this error is a cyclic reference error.
    pub fn is_cyclic_reference(&self) -> bool {
        self.find_kind(|kind| match kind {
            super::ErrorKind::CyclicReference(err) => Some(err),
            _ => None,
        })
        .is_some()
    }
}
