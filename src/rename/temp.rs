//! Scratch names used while rotating a rename cycle.
//! Pattern: .gmv_temp_<pid>_<nanos>_<seq>, placed next to the path it stands in for.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Reserved file-name prefix marking a path as transient plan bookkeeping.
pub const TEMP_PREFIX: &str = ".gmv_temp_";

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// True if the file-name component carries the reserved temp prefix.
pub fn is_temp_path(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|n| n.to_string_lossy().starts_with(TEMP_PREFIX))
}

/// Pick a sibling of `anchor` that neither exists on disk nor appears in `taken`.
pub(crate) fn temp_sibling(anchor: &Path, taken: &HashSet<PathBuf>) -> PathBuf {
    let pid = std::process::id();
    loop {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
        let candidate = anchor.with_file_name(format!("{TEMP_PREFIX}{pid}_{nanos}_{seq}"));
        if !taken.contains(&candidate) && fs::symlink_metadata(&candidate).is_err() {
            return candidate;
        }
    }
}
