//! Typed error definitions for gmv.
//! Every failure mode of a run has a variant here, so logs and tests can match on it.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GmvError {
    #[error("no files specified")]
    NoFiles,

    #[error("duplicate file specified: {}", .0.display())]
    DuplicateInput(PathBuf),

    #[error("file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("line count mismatch: expected {expected} lines, got {actual} lines")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("cannot move files to different directories: {} -> {}", .from.display(), .to.display())]
    DirectoryChanged { from: PathBuf, to: PathBuf },

    #[error("duplicate target filename: {}", .0.display())]
    DuplicateTarget(PathBuf),

    #[error("no editor found: {0}")]
    EditorUnavailable(String),

    #[error("editor '{editor}' exited with error: {status}")]
    EditorFailed { editor: String, status: ExitStatus },

    #[error("failed to rename {} to {}: {source}{hint}", .from.display(), .to.display())]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
        hint: &'static str,
    },

    #[error("aborted: {0} file(s) would be overwritten")]
    Aborted(usize),

    #[error("Operation interrupted by user")]
    Interrupted,

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl GmvError {
    /// Stable short identifier, used as the `kind` field in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GmvError::NoFiles => "no_files",
            GmvError::DuplicateInput(_) => "duplicate_input",
            GmvError::NotFound(_) => "not_found",
            GmvError::ShapeMismatch { .. } => "shape_mismatch",
            GmvError::DirectoryChanged { .. } => "directory_changed",
            GmvError::DuplicateTarget(_) => "duplicate_target",
            GmvError::EditorUnavailable(_) => "editor_unavailable",
            GmvError::EditorFailed { .. } => "editor_failed",
            GmvError::RenameFailed { .. } => "rename_failed",
            GmvError::Aborted(_) => "aborted",
            GmvError::Interrupted => "interrupted",
            GmvError::Io { .. } => "io",
        }
    }

    /// True for errors raised before anything on disk was touched.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            GmvError::NoFiles
                | GmvError::DuplicateInput(_)
                | GmvError::NotFound(_)
                | GmvError::ShapeMismatch { .. }
                | GmvError::DirectoryChanged { .. }
                | GmvError::DuplicateTarget(_)
        )
    }

    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        GmvError::Io {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GmvError>;
