//! Project configuration (skinshop.yaml) parsing.
//!
//! Every key is optional; the defaults match the MC SkinShop repository
//! layout, so most projects need no config file at all.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkinError};

/// Project configuration loaded from skinshop.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Folders to zip for the compressed asset build.
    pub assets: PathBuf,

    /// Output directory for the compressed archives and database.
    pub compressed: PathBuf,

    /// File name of the folder-name database written next to the archives.
    pub database: String,

    /// Feature folders scanned for the asset map.
    pub features: PathBuf,

    /// Where the asset map JSON is written.
    pub asset_map: PathBuf,

    /// Where the version string is written.
    pub version_file: PathBuf,

    /// Text placed before the build number in the version string.
    pub version_prefix: String,

    /// Root of the work-in-progress folders offered by `entry`.
    pub wip: PathBuf,

    /// Patterns skipped while scanning (`*.ext`, `**/dir/*`, or a plain name).
    pub excludes: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            assets: PathBuf::from("assets"),
            compressed: PathBuf::from("public/assets/compressed"),
            database: "fake_database.json".to_string(),
            features: PathBuf::from("public/assets/features"),
            asset_map: PathBuf::from("src/asset_map.json"),
            version_file: PathBuf::from("src/version.json"),
            version_prefix: "MC SkinShop BETA build".to_string(),
            wip: PathBuf::from("public/assets/wip"),
            excludes: vec![],
        }
    }
}

impl ProjectConfig {
    /// Load configuration from a skinshop.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SkinError::io(path, "Failed to read config", e))?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| SkinError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some("Check skinshop.yaml syntax".to_string()),
        })
    }

    /// Check a path (relative to a scan root) against the exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy().replace('\\', "/");
        self.excludes.iter().any(|pattern| pattern_matches(&path, pattern))
    }
}

fn pattern_matches(path: &str, pattern: &str) -> bool {
    if let Some(dir) = pattern
        .strip_prefix("**/")
        .and_then(|rest| rest.strip_suffix("/*"))
    {
        return path.split('/').rev().skip(1).any(|part| part == dir);
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        return !suffix.contains('/') && path.ends_with(suffix);
    }

    path.split('/').any(|part| part == pattern)
}
