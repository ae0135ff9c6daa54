use anyhow::{Context, Result};
use pants_classpath_core::collect_excludes;
use std::path::Path;

use super::load_module_graph;

pub fn excludes_command(module: &str, metadata: &Path) -> Result<()> {
    let graph = load_module_graph(metadata)?;
    let excludes = collect_excludes(&graph, module)
        .with_context(|| format!("Failed to collect excludes for module '{module}'"))?;

    if excludes.is_empty() {
        println!("No library exclusions on the runtime closure of '{module}'");
        return Ok(());
    }

    println!("🚫 {} exclusion(s) on the runtime closure of '{module}':", excludes.len());
    for (exclude, origin) in &excludes {
        println!("   • {exclude} (declared by {origin})");
    }

    Ok(())
}
