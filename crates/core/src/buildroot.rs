//! Locate the Pants buildroot and its export conventions

use std::path::{Path, PathBuf};
use tracing::debug;

/// Files that mark a directory as a Pants buildroot
const BUILDROOT_MARKERS: [&str; 3] = ["pants", "pants.ini", "pants.toml"];

/// Directory under the buildroot where `./pants export-classpath` publishes
/// its numbered classpath links
pub const EXPORT_CLASSPATH_DIR: &str = "dist/export-classpath";

/// Walk `start` and its ancestors looking for a Pants marker file; the
/// first directory containing one is the buildroot.
pub fn find_buildroot(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        if BUILDROOT_MARKERS
            .iter()
            .any(|marker| dir.join(marker).is_file())
        {
            debug!("find_buildroot: {:?}", dir);
            return Some(dir.to_path_buf());
        }
    }
    debug!("find_buildroot: no marker above {:?}", start);
    None
}

/// The conventional export-classpath directory for a buildroot
pub fn export_classpath_dir(buildroot: &Path) -> PathBuf {
    buildroot.join(EXPORT_CLASSPATH_DIR)
}
