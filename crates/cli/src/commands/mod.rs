pub mod classpath;
pub mod excludes;
pub mod scan;

pub use classpath::classpath_command;
pub use excludes::excludes_command;
pub use scan::scan_command;

use anyhow::{Context, Result, anyhow};
use pants_classpath_core::buildroot::{export_classpath_dir, find_buildroot};
use pants_classpath_core::metadata::ModuleGraph;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Load the project-metadata file the importer wrote for this project
pub(crate) fn load_module_graph(metadata: &Path) -> Result<ModuleGraph> {
    let raw = fs::read_to_string(metadata)
        .with_context(|| format!("Failed to read metadata file {}", metadata.display()))?;
    let graph = ModuleGraph::from_json(&raw)
        .with_context(|| format!("Failed to decode metadata file {}", metadata.display()))?;
    Ok(graph)
}

/// Resolve the export directory: an explicit flag wins, otherwise the
/// conventional location under the buildroot discovered from the cwd
pub(crate) fn resolve_export_dir(export_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = export_dir {
        return Ok(dir.to_path_buf());
    }
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let buildroot = find_buildroot(&cwd).ok_or_else(|| {
        anyhow!(
            "No Pants buildroot found above {}; pass --export-dir explicitly",
            cwd.display()
        )
    })?;
    Ok(export_classpath_dir(&buildroot))
}
