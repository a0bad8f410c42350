//! Rename planning and execution.
//!
//! Pipeline: validate_paths / validate_edits -> build_plan -> check_overwrites
//! -> execute_plan -> write_audit_log.

mod audit;
mod cycles;
mod execute;
mod hints;
mod op;
mod overwrite;
mod plan;
mod temp;
mod validate;

pub use audit::{write_audit_log, AUDIT_PREFIX};
pub use cycles::detect_cycles;
pub use execute::execute_plan;
pub use hints::rename_hint;
pub use op::RenameOp;
pub use overwrite::check_overwrites;
pub use plan::build_plan;
pub use temp::{is_temp_path, TEMP_PREFIX};
pub use validate::{parent_dir, strip_cur_dir, validate_edits, validate_paths};
