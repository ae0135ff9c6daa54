//! Classpath assembly
//!
//! There are two ways to resolve a module's runtime classpath:
//! 1. If the session was exported with manifest-jar support, the single
//!    manifest jar carries every classpath link and supersedes everything
//!    else.
//! 2. Otherwise the classpath is collected per target id, probing the
//!    export directory for each id the module declares.

use crate::error::{Error, Result};
use crate::excludes::collect_excludes;
use crate::manifest::{ExportContext, find_manifest};
use crate::metadata::ModuleGraph;
use crate::probe::probe;
use crate::types::{ClasspathEntry, ClasspathResolution};
use tracing::debug;

/// Resolves module classpaths against an imported module graph
pub struct ClasspathAssembler<'a> {
    graph: &'a ModuleGraph,
}

impl<'a> ClasspathAssembler<'a> {
    pub fn new(graph: &'a ModuleGraph) -> Self {
        Self { graph }
    }

    /// Resolve the runtime classpath for `module` within `ctx`.
    ///
    /// Manifest-first: when the session advertises a manifest jar, the
    /// result is exactly that artifact, and an advertised-but-missing jar
    /// fails the call rather than falling back — the export directory and
    /// the build's options disagree, which only a re-run can fix.
    ///
    /// Without a manifest, every target id the module declares is probed
    /// and the results unioned in declaration order, duplicates preserved.
    /// Zero entries is a valid result meaning the targets were never built.
    pub fn resolve(&self, module: &str, ctx: &ExportContext) -> Result<ClasspathResolution> {
        if let Some(artifact) = find_manifest(ctx) {
            if !artifact.resolves() {
                return Err(Error::ManifestMissing(artifact.path));
            }
            debug!("resolve {}: manifest jar at {:?}", module, artifact.path);
            return Ok(ClasspathResolution::Manifest {
                path: artifact.path,
            });
        }

        let metadata = self
            .graph
            .get(module)
            .ok_or_else(|| Error::UnknownModule(module.to_string()))?;

        let mut entries: Vec<ClasspathEntry> = Vec::new();
        for target_id in target_ids(metadata)? {
            let published = probe(&ctx.export_dir, &target_id);
            debug!(
                "resolve {}: target {} published {} entries",
                module,
                target_id,
                published.len()
            );
            entries.extend(published);
        }

        let excludes = collect_excludes(self.graph, module)?;
        Ok(ClasspathResolution::Published { entries, excludes })
    }
}

/// The target ids to probe for a module, in a deterministic order: the
/// imported `target_ids` list when present, otherwise the ids carried by
/// the decoded target-address infos (sorted, since the encoded set has no
/// inherent order).
fn target_ids(metadata: &crate::metadata::ModuleMetadata) -> Result<Vec<String>> {
    if !metadata.target_ids.is_empty() {
        return Ok(metadata.target_ids.clone());
    }
    let mut ids: Vec<String> = metadata
        .decode_target_infos()?
        .into_iter()
        .map(|info| info.id)
        .collect();
    ids.sort();
    Ok(ids)
}
