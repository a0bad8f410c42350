//! Plan executor.
//! Applies renames strictly in plan order and stops at the first failure.
//! Already-applied renames are left in place; there is no rollback.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

use crate::errors::{GmvError, Result};
use crate::output as out;
use crate::platform::fsync_dir;

use super::hints::rename_hint;
use super::op::RenameOp;
use super::validate::parent_dir;

/// Apply `plan`, or print it when `dry_run` is set. Returns the number of ops applied.
pub fn execute_plan(plan: &[RenameOp], dry_run: bool) -> Result<usize> {
    if dry_run {
        for op in plan {
            out::print_user(&op.to_string());
        }
        info!(ops = plan.len(), "dry-run: no files renamed");
        return Ok(0);
    }

    for (idx, op) in plan.iter().enumerate() {
        if let Err(source) = fs::rename(&op.from, &op.to) {
            let hint = rename_hint(&source);
            error!(
                step = idx + 1,
                of = plan.len(),
                from = %op.from.display(),
                to = %op.to.display(),
                error = %source,
                "Rename failed; earlier renames were kept"
            );
            return Err(GmvError::RenameFailed {
                from: op.from.clone(),
                to: op.to.clone(),
                source,
                hint,
            });
        }
        debug!(from = %op.from.display(), to = %op.to.display(), "Renamed");
    }

    // Best-effort durability; a failed fsync does not undo a successful rename.
    let dirs: BTreeSet<&Path> = plan.iter().map(|op| parent_dir(&op.to)).collect();
    for dir in dirs {
        if let Err(e) = fsync_dir(dir) {
            debug!(dir = %dir.display(), error = %e, "Directory fsync failed");
        }
    }

    info!(ops = plan.len(), "Renames applied");
    Ok(plan.len())
}
