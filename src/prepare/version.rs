//! Version stamp consumed by the front-end build.

use std::fs;
use std::path::PathBuf;

use crate::discovery::Project;
use crate::error::{Result, SkinError};

/// Build number used when none is given.
pub const DEFAULT_BUILD: &str = "0";

/// The version text, e.g. `MC SkinShop BETA build 42`.
pub fn version_string(prefix: &str, build: &str) -> String {
    format!("{} {}", prefix, build)
}

/// Write the version as a JSON string literal (quotes included).
pub fn set_version(project: &Project, build: Option<&str>) -> Result<(String, PathBuf)> {
    let version = version_string(&project.config.version_prefix, build.unwrap_or(DEFAULT_BUILD));
    let path = project.version_path();

    let literal = serde_json::to_string(&version).map_err(|e| SkinError::Parse {
        message: format!("Failed to serialize version: {}", e),
        help: None,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| SkinError::io(parent, "Failed to create version directory", e))?;
    }
    fs::write(&path, literal).map_err(|e| SkinError::io(&path, "Failed to write version", e))?;

    Ok((version, path))
}
