//! Probe the export-classpath directory for one target's published entries

use crate::types::ClasspathEntry;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Enumerate the classpath entries published for `target_id` under
/// `export_root`.
///
/// Pants publishes links named `<targetId>-<n>` (a directory) or
/// `<targetId>-<n>.jar` (a file), with `n` counting up from 0 and no zero
/// padding. A directory bundles the target's full transitive output, so a
/// directory match ends the probe. A jar covers one dependency layer, so a
/// jar match continues with the next index. The probe stops at the first
/// index with neither form; entries past a gap are never considered.
///
/// Unreadable entries are indistinguishable from missing ones here: probing
/// stops silently, and an empty result is left for the caller to interpret
/// (usually "target not yet built").
pub fn probe(export_root: &Path, target_id: &str) -> Vec<ClasspathEntry> {
    let mut entries = Vec::new();
    let mut index: u32 = 0;

    loop {
        let link_dir = export_root.join(format!("{target_id}-{index}"));
        let link_jar = export_root.join(format!("{target_id}-{index}.jar"));

        if fs::metadata(&link_dir).map(|m| m.is_dir()).unwrap_or(false) {
            debug!("probe {}: directory at index {}, stopping", target_id, index);
            entries.push(ClasspathEntry::directory(link_dir));
            break;
        }

        if fs::metadata(&link_jar).map(|m| m.is_file()).unwrap_or(false) {
            debug!("probe {}: jar at index {}", target_id, index);
            entries.push(ClasspathEntry::jar(link_jar));
            index += 1;
            continue;
        }

        debug!(
            "probe {}: nothing at index {}, {} entries found",
            target_id,
            index,
            entries.len()
        );
        break;
    }

    entries
}
