//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Warnings and errors (default)
    #[default]
    Normal,
    /// Plan summaries and per-run events
    Info,
    /// Every operation, traversal details
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "warn" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for a rename session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Editor command (may include arguments); None falls back to $VISUAL/$EDITOR
    pub editor: Option<String>,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional diagnostic log file (tracing output, not the audit log)
    pub log_file: Option<PathBuf>,
    /// Where audit logs are written; None means the platform temp dir
    pub audit_dir: Option<PathBuf>,
    /// Write an audit log after a successful run
    pub audit_log: bool,
    /// Print the plan instead of applying it
    pub dry_run: bool,
    /// Skip the confirmation prompt when unrelated files would be overwritten
    pub force: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: None,
            log_level: LogLevel::Normal,
            log_file: None,
            audit_dir: None,
            audit_log: true,
            dry_run: false,
            force: false,
        }
    }
}

impl Config {
    /// Directory that receives audit logs.
    pub fn audit_dir(&self) -> PathBuf {
        self.audit_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}
