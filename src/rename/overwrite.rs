//! Overwrite hazard detection.
//! Advisory only: the caller decides whether to warn, prompt or abort.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::op::RenameOp;
use super::temp::is_temp_path;
use super::validate::strip_cur_dir;

/// Targets in `plan` that already exist on disk and are not part of the request.
///
/// Paths listed in `originals` will have moved away by the time they are written
/// to, and temp paths are created and consumed by the plan itself, so neither
/// is reported.
pub fn check_overwrites(plan: &[RenameOp], originals: &[PathBuf]) -> Vec<PathBuf> {
    let originals: HashSet<&Path> = originals.iter().map(|p| strip_cur_dir(p)).collect();

    let hazards: Vec<PathBuf> = plan
        .iter()
        .filter(|op| !is_temp_path(&op.to))
        .filter(|op| !originals.contains(strip_cur_dir(&op.to)))
        .filter(|op| fs::symlink_metadata(&op.to).is_ok())
        .filter(|op| !same_entry(&op.from, &op.to))
        .map(|op| op.to.clone())
        .collect();

    for path in &hazards {
        warn!(path = %path.display(), "Rename target exists and is not part of the rename set");
    }
    hazards
}

// On case-insensitive filesystems `a.txt -> A.txt` finds its own source at the target.
#[cfg(unix)]
fn same_entry(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;
    match (fs::symlink_metadata(a), fs::symlink_metadata(b)) {
        (Ok(ma), Ok(mb)) => ma.dev() == mb.dev() && ma.ino() == mb.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_entry(a: &Path, b: &Path) -> bool {
    a.as_os_str().eq_ignore_ascii_case(b.as_os_str())
}
