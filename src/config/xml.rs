//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - A missing file is not an error; defaults apply.
//!
//! Notes:
//! - Unknown XML fields are rejected so typos surface instead of being ignored.

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::default_config_path;
use super::types::{Config, LogLevel};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "editor")]
    editor: Option<String>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
    #[serde(rename = "audit_dir")]
    audit_dir: Option<String>,
    #[serde(rename = "audit_log")]
    audit_log: Option<bool>,
    #[serde(rename = "force")]
    force: Option<bool>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

// Map XmlConfig -> Config; absent or blank fields keep their defaults.
fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    cfg.editor = non_empty(parsed.editor.as_deref()).map(str::to_owned);
    cfg.log_file = non_empty(parsed.log_file.as_deref()).map(PathBuf::from);
    cfg.audit_dir = non_empty(parsed.audit_dir.as_deref()).map(PathBuf::from);

    if let Some(level) = non_empty(parsed.log_level.as_deref()).and_then(LogLevel::parse) {
        cfg.log_level = level;
    }

    cfg.audit_log = parsed.audit_log.unwrap_or(true);
    cfg.force = parsed.force.unwrap_or(false);
    cfg
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(xml_to_config(parsed))
}

/// Load the config from `$GMV_CONFIG` or the default location.
/// Returns Ok(None) when no file exists there.
pub fn load_config_from_xml() -> Result<Option<Config>> {
    let path = default_config_path().context("resolve config path")?;
    if !path.exists() {
        debug!(path = %path.display(), "No config file; using defaults");
        return Ok(None);
    }
    debug!(path = %path.display(), "Loading config");
    load_config_from_xml_path(&path).map(Some)
}
