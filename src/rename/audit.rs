//! Audit log of an applied plan.
//!
//! Format:
//!   # gmv operation log - 2024-05-01 13:37:00
//!   # Working directory: /home/user/photos
//!
//!   a.jpg -> .gmv_temp_...
//!   b.jpg -> a.jpg
//!   ...

use chrono::{DateTime, Local};
use std::env;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::errors::{GmvError, Result};
use crate::platform::create_new_private;

use super::op::RenameOp;

/// Name prefix of audit log files.
pub const AUDIT_PREFIX: &str = "gmv-log-";

// Two runs within the same second get "-2", "-3", ... instead of clobbering each other.
const MAX_NAME_ATTEMPTS: u32 = 100;

/// Write one `from -> to` line per op into a fresh, timestamped file in `dir`.
pub fn write_audit_log(plan: &[RenameOp], dir: &Path) -> Result<PathBuf> {
    let now = Local::now();
    let cwd = env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "unknown".into());

    let (path, file) = create_log_file(dir, &now)?;
    let mut w = BufWriter::new(file);
    write_entries(&mut w, plan, &now, &cwd)
        .and_then(|()| w.flush())
        .map_err(|e| GmvError::io(format!("failed to write log '{}'", path.display()), e))?;

    info!(path = %path.display(), ops = plan.len(), "Audit log written");
    Ok(path)
}

fn create_log_file(dir: &Path, now: &DateTime<Local>) -> Result<(PathBuf, std::fs::File)> {
    let stem = format!("{AUDIT_PREFIX}{}", now.format("%Y%m%d-%H%M%S"));
    for attempt in 1..=MAX_NAME_ATTEMPTS {
        let name = if attempt == 1 {
            stem.clone()
        } else {
            format!("{stem}-{attempt}")
        };
        let path = dir.join(name);
        match create_new_private(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(GmvError::io(
                    format!("failed to create log file '{}'", path.display()),
                    e,
                ));
            }
        }
    }
    Err(GmvError::io(
        format!("failed to create log file in '{}'", dir.display()),
        io::Error::from(io::ErrorKind::AlreadyExists),
    ))
}

fn write_entries(
    w: &mut impl Write,
    plan: &[RenameOp],
    now: &DateTime<Local>,
    cwd: &str,
) -> io::Result<()> {
    writeln!(w, "# gmv operation log - {}", now.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(w, "# Working directory: {cwd}")?;
    writeln!(w)?;
    for op in plan {
        writeln!(w, "{op}")?;
    }
    Ok(())
}
