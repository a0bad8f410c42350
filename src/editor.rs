//! External editor support.
//!
//! Resolution order: explicit command (flag or config), `$VISUAL`, `$EDITOR`,
//! then the first of `vi` / `nano` found on PATH. A command may carry arguments
//! (`code --wait`); the listing path is appended last.

use std::env;
use std::io;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

use crate::errors::{GmvError, Result};

const FALLBACK_EDITORS: &[&str] = &["vi", "nano"];

/// Pick the editor command to run.
pub fn resolve_editor(configured: Option<&str>) -> Result<String> {
    resolve_from(
        configured,
        env::var("VISUAL").ok().as_deref(),
        env::var("EDITOR").ok().as_deref(),
        |name| which::which(name).is_ok(),
    )
}

fn resolve_from(
    configured: Option<&str>,
    visual: Option<&str>,
    editor: Option<&str>,
    on_path: impl Fn(&str) -> bool,
) -> Result<String> {
    let chosen = [configured, visual, editor]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty());
    if let Some(cmd) = chosen {
        return Ok(cmd.to_owned());
    }

    FALLBACK_EDITORS
        .iter()
        .find(|&&name| on_path(name))
        .map(|name| (*name).to_owned())
        .ok_or_else(|| {
            GmvError::EditorUnavailable(
                "$EDITOR not set and neither vi nor nano are available".into(),
            )
        })
}

/// Run `editor` on `file`, inheriting the terminal, and wait for it to exit.
pub fn launch_editor(editor: &str, file: &Path) -> Result<()> {
    let mut parts = editor.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(GmvError::EditorUnavailable("editor command is empty".into()));
    };

    debug!(editor, file = %file.display(), "Launching editor");
    let status = Command::new(program)
        .args(parts)
        .arg(file)
        .status()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                GmvError::EditorUnavailable(format!("cannot run '{program}': {e}"))
            }
            _ => GmvError::io(format!("failed to start editor '{program}'"), e),
        })?;

    if !status.success() {
        return Err(GmvError::EditorFailed {
            editor: editor.to_owned(),
            status,
        });
    }
    info!(editor, "Editor closed");
    Ok(())
}
