//! Short, actionable suffixes for failed renames, keyed on the OS error.

use std::io;

/// Hint appended to a rename failure message; empty when nothing useful applies.
pub fn rename_hint(e: &io::Error) -> &'static str {
    #[cfg(unix)]
    if let Some(code) = e.raw_os_error() {
        return match code {
            libc::EACCES | libc::EPERM => " (permission denied; check write access to the directory)",
            libc::EXDEV => " (cross-filesystem rename is not supported)",
            libc::EBUSY => " (resource busy; another process may be using it)",
            libc::ENOENT => " (source vanished after validation)",
            libc::ENOTEMPTY | libc::EEXIST => " (target is a non-empty directory)",
            libc::EISDIR => " (cannot replace a directory with a file)",
            libc::ENOTDIR => " (cannot replace a file with a directory)",
            libc::EROFS => " (read-only filesystem)",
            libc::ENAMETOOLONG => " (file name too long)",
            _ => "",
        };
    }

    match e.kind() {
        io::ErrorKind::PermissionDenied => " (permission denied; check write access to the directory)",
        io::ErrorKind::NotFound => " (source vanished after validation)",
        io::ErrorKind::AlreadyExists => " (target already exists)",
        _ => "",
    }
}
