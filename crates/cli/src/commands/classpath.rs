use anyhow::{Context, Result};
use pants_classpath_core::{ClasspathAssembler, ExportContext};
use std::path::Path;
use tracing::debug;

use super::{load_module_graph, resolve_export_dir};
use crate::display::print_resolution;

pub fn classpath_command(
    module: &str,
    metadata: &Path,
    export_dir: Option<&Path>,
    manifest_jar_only: bool,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let graph = load_module_graph(metadata)?;
    let export_dir = resolve_export_dir(export_dir)?;
    debug!(
        "classpath: module={}, export_dir={:?}, manifest_jar_only={}",
        module, export_dir, manifest_jar_only
    );

    let ctx = ExportContext::new(export_dir).with_manifest_jar(manifest_jar_only);
    let resolution = ClasspathAssembler::new(&graph)
        .resolve(module, &ctx)
        .with_context(|| format!("Failed to resolve classpath for module '{module}'"))?;

    if quiet {
        for path in resolution.paths() {
            println!("{}", path.display());
        }
    } else if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        print_resolution(module, &resolution);
    }

    Ok(())
}
