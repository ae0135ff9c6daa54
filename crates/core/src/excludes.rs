//! Exclusion-origin discovery over the runtime dependency closure

use crate::error::Result;
use crate::metadata::ModuleGraph;
use crate::types::ExcludeMap;
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Collect the library exclusions declared anywhere on `root_module`'s
/// runtime-only dependency closure, mapped to the declaring module's
/// target-address string (module name when no address is declared).
///
/// The walk is breadth-first starting at the root module itself, so an
/// exclusion's recorded origin is the most direct dependency path that
/// declares it: once an origin is recorded, later visits never overwrite
/// it. A visited set bounds the walk, so cyclic runtime declarations
/// terminate with each module visited exactly once.
///
/// Modules named in edges but absent from the graph are skipped silently;
/// a present but undecodable exclusion string is malformed project state
/// and fails the call.
pub fn collect_excludes(graph: &ModuleGraph, root_module: &str) -> Result<ExcludeMap> {
    let mut excludes = ExcludeMap::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    queue.push_back(root_module);
    visited.insert(root_module);

    while let Some(name) = queue.pop_front() {
        let Some(metadata) = graph.get(name) else {
            debug!("collect_excludes: module {} not in graph, skipping", name);
            continue;
        };

        let origin = metadata
            .target_addresses
            .clone()
            .unwrap_or_else(|| name.to_string());
        for exclude in metadata.decode_library_excludes()? {
            // First writer wins
            excludes.entry(exclude).or_insert_with(|| origin.clone());
        }

        for dep in &metadata.runtime_deps {
            if visited.insert(dep.as_str()) {
                queue.push_back(dep.as_str());
            }
        }
    }

    debug!(
        "collect_excludes: {} exclusions over {} modules from {}",
        excludes.len(),
        visited.len(),
        root_module
    );
    Ok(excludes)
}
