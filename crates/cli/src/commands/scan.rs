use anyhow::Result;
use pants_classpath_core::probe;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use super::resolve_export_dir;

#[derive(Debug, Serialize)]
pub struct ScanTarget {
    pub id: String,
    /// Entries the probe can actually reach, honoring the gap-terminated
    /// numbering; dangling links past a gap are published but unreachable
    pub resolvable_entries: usize,
    pub ends_in_directory: bool,
}

pub fn scan_command(export_dir: Option<&Path>, json: bool) -> Result<()> {
    let export_dir = resolve_export_dir(export_dir)?;
    debug!("scan: export_dir={:?}", export_dir);

    let mut ids: BTreeSet<String> = BTreeSet::new();
    for entry in WalkDir::new(&export_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let name = entry.file_name().to_string_lossy().to_string();
        if let Some(id) = published_target_id(&name) {
            ids.insert(id);
        }
    }

    let targets: Vec<ScanTarget> = ids
        .into_iter()
        .map(|id| {
            let entries = probe(&export_dir, &id);
            ScanTarget {
                resolvable_entries: entries.len(),
                ends_in_directory: entries.last().is_some_and(|e| e.is_directory()),
                id,
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&targets)?);
        return Ok(());
    }

    if targets.is_empty() {
        println!(
            "No published targets under {} (has the export been run?)",
            export_dir.display()
        );
        return Ok(());
    }

    println!("📦 {} published target(s) under {}:", targets.len(), export_dir.display());
    for target in &targets {
        println!(
            "   • {} ({} entr{}{})",
            target.id,
            target.resolvable_entries,
            if target.resolvable_entries == 1 { "y" } else { "ies" },
            if target.ends_in_directory { ", bundled directory" } else { "" }
        );
    }

    Ok(())
}

/// Extract the target id from a published link name of the form
/// `<id>-<n>` or `<id>-<n>.jar`
fn published_target_id(name: &str) -> Option<String> {
    let stem = name.strip_suffix(".jar").unwrap_or(name);
    let (id, index) = stem.rsplit_once('-')?;
    if id.is_empty() || index.parse::<u32>().is_err() {
        return None;
    }
    Some(id.to_string())
}
