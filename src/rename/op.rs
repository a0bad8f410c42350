use std::fmt;
use std::path::PathBuf;

use super::temp::is_temp_path;

/// One filesystem rename, applied exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenameOp {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl RenameOp {
    pub fn new(from: impl Into<PathBuf>, to: impl Into<PathBuf>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// True when either side is a scratch path introduced to break a cycle.
    pub fn touches_temp(&self) -> bool {
        is_temp_path(&self.from) || is_temp_path(&self.to)
    }
}

impl fmt::Display for RenameOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from.display(), self.to.display())
    }
}
