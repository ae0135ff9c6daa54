//! pants-classpath-core - classpath resolution for Pants-exported projects
//!
//! This crate provides functionality to:
//! - Probe the `dist/export-classpath` numbered link convention for the
//!   entries a target published
//! - Resolve a module's runtime classpath, preferring the session's
//!   aggregated manifest jar when one governs the export
//! - Walk the runtime-only dependency closure to map library exclusions to
//!   the modules that declared them
pub mod buildroot;
pub mod error;
pub mod excludes;
pub mod manifest;
pub mod metadata;
pub mod probe;
pub mod resolver;
pub mod types;

// Re-export commonly used types and entry points
pub use error::{Error, Result};
pub use types::*;

pub use excludes::collect_excludes;
pub use manifest::{ExportContext, MANIFEST_JAR_NAME, ManifestArtifact, find_manifest};
pub use metadata::{ModuleGraph, ModuleMetadata};
pub use probe::probe;
pub use resolver::ClasspathAssembler;
