//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - FILES is optional at the clap level so `--print-config` works alone;
//!   an empty list is rejected by the app with exit status 1.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Batch rename files by editing their names in your editor.
/// CLI flags override config values (loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gmv",
    author,
    version,
    about = "Batch rename files using $EDITOR",
    after_help = "Swaps and rotations (a->b, b->a) are handled through temporary names.\n\
                  A log of applied renames is written to the system temp directory."
)]
pub struct Args {
    /// Files or directories to rename.
    #[arg(value_name = "FILES", value_hint = ValueHint::AnyPath)]
    pub files: Vec<PathBuf>,

    /// Dry-run: print the renames but do not touch the filesystem.
    #[arg(long, help = "Preview the renames without applying them")]
    pub dry_run: bool,

    /// Do not ask before overwriting files outside the rename set.
    #[arg(
        short = 'f',
        long,
        help = "Skip confirmation when files outside the list would be overwritten"
    )]
    pub force: bool,

    /// Editor command to use instead of $VISUAL / $EDITOR.
    #[arg(long, value_name = "CMD", help = "Editor command (overrides config and $EDITOR)")]
    pub editor: Option<String>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Print where gmv looks for its config file (or GMV_CONFIG if set), then exit.
    #[arg(long, help = "Print the config file location used by gmv and exit")]
    pub print_config: bool,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Write the gmv(1) manual page to stdout and exit (used when packaging).
    #[arg(long, hide = true)]
    pub generate_man: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(editor) = &self.editor {
            cfg.editor = Some(editor.clone());
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.force {
            cfg.force = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
