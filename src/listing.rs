//! The editable listing: one path per line, in request order.
//!
//! On Unix paths are written and read back as raw bytes, so names that are not
//! valid UTF-8 survive the trip through the editor unchanged.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempPath;

use crate::errors::{GmvError, Result};

/// Serialize `paths`, newline-terminated.
pub fn render_listing(paths: &[PathBuf]) -> Vec<u8> {
    let mut buf = Vec::new();
    for p in paths {
        buf.extend_from_slice(&path_bytes(p));
        buf.push(b'\n');
    }
    buf
}

/// Parse an edited listing. Lines are trimmed and blank lines dropped.
pub fn parse_listing(content: &[u8]) -> Vec<PathBuf> {
    content
        .split(|b| *b == b'\n')
        .map(<[u8]>::trim_ascii)
        .filter(|line| !line.is_empty())
        .map(bytes_to_path)
        .collect()
}

/// False when `path` cannot come back unchanged from an untouched listing line
/// (surrounding whitespace, embedded line break).
pub fn survives_listing(path: &Path) -> bool {
    let back = parse_listing(&render_listing(&[path.to_path_buf()]));
    back.len() == 1 && back[0] == path
}

/// Write the listing to a fresh temp file; the file is removed when the handle drops.
pub fn write_listing(paths: &[PathBuf]) -> Result<TempPath> {
    let mut file = tempfile::Builder::new()
        .prefix("gmv-")
        .suffix(".txt")
        .tempfile()
        .map_err(|e| GmvError::io("failed to create temp file", e))?;
    file.write_all(&render_listing(paths))
        .and_then(|()| file.flush())
        .map_err(|e| GmvError::io("failed to write file path", e))?;
    Ok(file.into_temp_path())
}

/// Read the listing back after the editor exits.
pub fn read_listing(path: &Path) -> Result<Vec<PathBuf>> {
    let content = fs::read(path).map_err(|e| GmvError::io("failed to read edited file", e))?;
    Ok(parse_listing(&content))
}

#[cfg(unix)]
fn path_bytes(p: &Path) -> std::borrow::Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    std::borrow::Cow::Borrowed(p.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_bytes(p: &Path) -> std::borrow::Cow<'_, [u8]> {
    std::borrow::Cow::Owned(p.to_string_lossy().into_owned().into_bytes())
}

#[cfg(unix)]
fn bytes_to_path(b: &[u8]) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(std::ffi::OsStr::from_bytes(b))
}

#[cfg(not(unix))]
fn bytes_to_path(b: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(b).into_owned())
}
