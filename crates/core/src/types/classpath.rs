use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Map from excluded library coordinate to the origin that declared it
/// (a module's target-address string, or the module name as a fallback)
pub type ExcludeMap = BTreeMap<String, String>;

/// What kind of entry the export directory published for an index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// A linked output directory; bundles the target's full transitive
    /// output, so it is always the last entry of a probe
    Directory,
    /// A linked jar for one dependency layer; further indices may follow
    Jar,
}

/// One resolved physical classpath location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClasspathEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl ClasspathEntry {
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn jar(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Jar,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Outcome of resolving a module's runtime classpath
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClasspathResolution {
    /// A single aggregated manifest jar supersedes per-target entries
    Manifest { path: PathBuf },
    /// Per-target published entries, in target order then probe order,
    /// with the exclusion origins discovered on the runtime closure
    Published {
        entries: Vec<ClasspathEntry>,
        excludes: ExcludeMap,
    },
}

impl ClasspathResolution {
    /// Classpath paths in the order a process command line should use them
    pub fn paths(&self) -> Vec<&PathBuf> {
        match self {
            ClasspathResolution::Manifest { path } => vec![path],
            ClasspathResolution::Published { entries, .. } => {
                entries.iter().map(|e| &e.path).collect()
            }
        }
    }

    pub fn is_manifest(&self) -> bool {
        matches!(self, ClasspathResolution::Manifest { .. })
    }
}
