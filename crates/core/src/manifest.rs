//! Manifest jar lookup
//!
//! When Pants runs with `--export-classpath-manifest-jar-only`, it collapses
//! a session's entire classpath into a single jar whose manifest carries the
//! real entries. Resolution then uses that one artifact and nothing else.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Conventional manifest jar name inside the export-classpath directory
pub const MANIFEST_JAR_NAME: &str = "manifest.jar";

/// The resolution context for one build session: where Pants publishes
/// classpath links, and whether the session advertises manifest-jar mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportContext {
    pub export_dir: PathBuf,
    pub manifest_jar_only: bool,
}

impl ExportContext {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
            manifest_jar_only: false,
        }
    }

    pub fn with_manifest_jar(mut self, enabled: bool) -> Self {
        self.manifest_jar_only = enabled;
        self
    }
}

/// A session's single aggregated classpath artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestArtifact {
    pub path: PathBuf,
}

impl ManifestArtifact {
    /// Whether the advertised artifact actually resolves to a file on disk
    pub fn resolves(&self) -> bool {
        std::fs::metadata(&self.path)
            .map(|m| m.is_file())
            .unwrap_or(false)
    }
}

/// Look up the manifest artifact governing this session.
///
/// `None` is not an error: sessions without manifest-jar support simply
/// fall back to per-target probing. Whether the returned artifact resolves
/// on disk is the caller's concern; an advertised-but-missing manifest is
/// inconsistent build state and must not degrade silently.
pub fn find_manifest(ctx: &ExportContext) -> Option<ManifestArtifact> {
    if !ctx.manifest_jar_only {
        return None;
    }
    Some(ManifestArtifact {
        path: manifest_jar_path(&ctx.export_dir),
    })
}

pub fn manifest_jar_path(export_dir: &Path) -> PathBuf {
    export_dir.join(MANIFEST_JAR_NAME)
}
