//! Core library for `gmv`.
//!
//! Turns an edited listing of paths into a safe, ordered list of renames:
//! input validation, cycle-aware plan building, overwrite checks, execution
//! and the audit log. The binary adds argument parsing, the editor round-trip
//! and logging setup on top.

pub mod cli;
pub mod config;
pub mod editor;
pub mod errors;
pub mod listing;
pub mod man;
pub mod output;
pub mod platform;
pub mod rename;
pub mod shutdown;

pub use config::{default_config_path, path_has_symlink_ancestor, Config, LogLevel};
pub use errors::GmvError;
pub use rename::{
    build_plan, check_overwrites, detect_cycles, execute_plan, validate_edits, validate_paths,
    write_audit_log, RenameOp,
};

/// Convenience re-exports for callers embedding the planner.
pub mod prelude {
    pub use crate::config::{Config, LogLevel};
    pub use crate::errors::{GmvError as Error, Result as GmvResult};
    pub use crate::rename::{
        build_plan, check_overwrites, detect_cycles, execute_plan, is_temp_path,
        validate_edits, validate_paths, write_audit_log, RenameOp,
    };
    pub use crate::shutdown::request as request_shutdown;
}
