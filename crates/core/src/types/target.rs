use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Per-target metadata exported by Pants for an imported module.
///
/// Instances arrive serialized as a JSON array stored in an opaque module
/// option value; the engine decodes them but never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetAddressInfo {
    /// Full target address, e.g. `src/java/com/example:lib`
    pub address: String,
    /// Filename-safe target id used by the export-classpath link convention,
    /// e.g. `src.java.com.example.lib`
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pants_target_type: Option<String>,
    #[serde(default)]
    pub is_synthetic: bool,
    /// Library coordinates excluded from this target's resolution
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub excludes: BTreeSet<String>,
}

impl TargetAddressInfo {
    pub fn new(address: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            id: id.into(),
            pants_target_type: None,
            is_synthetic: false,
            excludes: BTreeSet::new(),
        }
    }
}
