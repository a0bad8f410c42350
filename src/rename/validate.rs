//! Input checks run before any planning.
//! Everything here is read-only; the only filesystem access is an existence probe.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::{GmvError, Result};

/// Parent directory of `path`; a bare file name lives in `.`.
pub fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        Some(_) => Path::new("."),
        None => path,
    }
}

/// `path` without leading `./` components, so `./b` and `b` compare equal.
pub fn strip_cur_dir(path: &Path) -> &Path {
    let mut rest = path;
    while let Ok(stripped) = rest.strip_prefix(".") {
        if stripped.as_os_str().is_empty() {
            break;
        }
        rest = stripped;
    }
    rest
}

/// Reject repeated paths and paths that do not exist right now.
///
/// A dangling symlink counts as present: the link itself can be renamed.
pub fn validate_paths(paths: &[PathBuf]) -> Result<()> {
    let mut seen: HashSet<&Path> = HashSet::with_capacity(paths.len());

    for path in paths {
        if !seen.insert(strip_cur_dir(path)) {
            return Err(GmvError::DuplicateInput(path.clone()));
        }
        match fs::symlink_metadata(path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(GmvError::NotFound(path.clone()));
            }
            _ => {}
        }
    }

    debug!(count = paths.len(), "Input paths validated");
    Ok(())
}

/// Check the edited listing against the original one.
///
/// - lengths must match (a deleted line would shift every later entry)
/// - each entry must stay in its original directory
/// - no two entries may end up with the same name
pub fn validate_edits(original: &[PathBuf], edited: &[PathBuf]) -> Result<()> {
    if original.len() != edited.len() {
        return Err(GmvError::ShapeMismatch {
            expected: original.len(),
            actual: edited.len(),
        });
    }

    let mut targets: HashSet<&Path> = HashSet::with_capacity(edited.len());

    for (orig, edit) in original.iter().zip(edited) {
        if strip_cur_dir(parent_dir(orig)) != strip_cur_dir(parent_dir(edit)) {
            return Err(GmvError::DirectoryChanged {
                from: orig.clone(),
                to: edit.clone(),
            });
        }
        if !targets.insert(strip_cur_dir(edit)) {
            return Err(GmvError::DuplicateTarget(edit.clone()));
        }
    }

    debug!(count = edited.len(), "Edits validated");
    Ok(())
}
