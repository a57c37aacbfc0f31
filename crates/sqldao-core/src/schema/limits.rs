/// Bounds on the compiler's fixed-point searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Limits {
    /// How many leading words may be dropped from domain-object names while
    /// looking for the object a property refers to.
    pub max_qualifier_drops: usize,

    /// How many full scans the provisioning order may take before the
    /// remaining objects are reported as a probable cycle.
    pub max_provisioning_passes: usize,
}

impl Limits {
    pub const DEFAULT_MAX_QUALIFIER_DROPS: usize = 20;
    pub const DEFAULT_MAX_PROVISIONING_PASSES: usize = 21;
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_qualifier_drops: Self::DEFAULT_MAX_QUALIFIER_DROPS,
            max_provisioning_passes: Self::DEFAULT_MAX_PROVISIONING_PASSES,
        }
    }
}
