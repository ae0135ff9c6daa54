//! Module metadata as handed over by the project importer
//!
//! The host IDE stores per-module Pants metadata as opaque option strings.
//! This module models that store as plain data: a graph of module names to
//! their metadata, with the doubly-encoded option values decoded on demand.

use crate::error::{Error, Result};
use crate::types::TargetAddressInfo;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Metadata attached to one imported module
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleMetadata {
    /// Target ids published for this module, in import order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_ids: Vec<String>,
    /// JSON-encoded array of [`TargetAddressInfo`], as stored by the importer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_address_infos: Option<String>,
    /// Human-readable target addresses owned by this module; used as the
    /// origin label for exclusions it declares
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_addresses: Option<String>,
    /// JSON-encoded array of excluded library coordinates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_excludes: Option<String>,
    /// Runtime-only dependency edges to other modules
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runtime_deps: Vec<String>,
}

impl ModuleMetadata {
    /// Decode the target-address-info option value.
    ///
    /// An absent value means the importer published nothing for this module
    /// and decodes to an empty set. A present value that fails to parse is
    /// malformed project state and must not be mistaken for "nothing built".
    pub fn decode_target_infos(&self) -> Result<HashSet<TargetAddressInfo>> {
        match &self.target_address_infos {
            None => Ok(HashSet::new()),
            Some(raw) => serde_json::from_str(raw).map_err(|e| {
                Error::MalformedMetadata(format!("target address infos: {e}"))
            }),
        }
    }

    /// Decode the library-excludes option value; absent decodes to empty.
    pub fn decode_library_excludes(&self) -> Result<BTreeSet<String>> {
        match &self.library_excludes {
            None => Ok(BTreeSet::new()),
            Some(raw) => serde_json::from_str(raw)
                .map_err(|e| Error::MalformedMetadata(format!("library excludes: {e}"))),
        }
    }
}

/// All imported modules and their runtime-only adjacency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleGraph {
    pub modules: HashMap<String, ModuleMetadata>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a serialized module graph, e.g. the CLI's project-metadata file
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| Error::MalformedMetadata(format!("module graph: {e}")))
    }

    pub fn get(&self, module: &str) -> Option<&ModuleMetadata> {
        self.modules.get(module)
    }

    pub fn insert(&mut self, name: impl Into<String>, metadata: ModuleMetadata) {
        self.modules.insert(name.into(), metadata);
    }
}
