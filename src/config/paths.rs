//! Default path helpers and symlink checks.
//! Determines the config file location and detects symlinked ancestors for safety.

use dirs::config_dir;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::CONFIG_ENV;

/// Config file location.
///
/// `$GMV_CONFIG` wins when set; a relative value is resolved against the current
/// directory. Otherwise the OS config dir is used (`~/.config/gmv/config.xml` on Linux).
pub fn default_config_path() -> io::Result<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        let p = PathBuf::from(p);
        if p.is_absolute() {
            return Ok(p);
        }
        return Ok(env::current_dir()?.join(p));
    }

    if let Some(mut base) = config_dir() {
        base.push("gmv");
        base.push("config.xml");
        return Ok(base);
    }

    env::var_os("HOME")
        .map(|h| PathBuf::from(h).join(".config").join("gmv").join("config.xml"))
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no config directory or $HOME"))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.as_os_str().is_empty() {
            break;
        }
        match fs::symlink_metadata(anc) {
            Ok(meta) if meta.file_type().is_symlink() => return Ok(true),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        p = anc.parent();
    }
    Ok(false)
}
