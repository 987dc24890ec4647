//! Project discovery: configuration and asset folder scanning.
//!
//! A project is the front-end repository root. Its optional
//! `skinshop.yaml` says where asset folders live and where generated files
//! go; all relative paths resolve against the root.
//!
//! # Example
//!
//! ```ignore
//! use skinshop::discovery::discover;
//!
//! let project = discover(".")?;
//! println!("Zipping folders from {}", project.assets_dir().display());
//! ```

mod config;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use config::ProjectConfig;
pub use scanner::{
    feature_images, filtered_subdirectory_names, png_files, summarize_folders, FolderSummary,
};

/// The name of the configuration file.
pub const CONFIG_FILENAME: &str = "skinshop.yaml";

/// A discovered project.
#[derive(Debug, Clone)]
pub struct Project {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded configuration (default if no skinshop.yaml was found).
    pub config: ProjectConfig,

    /// Whether a skinshop.yaml was found.
    pub has_config: bool,
}

impl Project {
    /// A project using default configuration.
    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: ProjectConfig::default(),
            has_config: false,
        }
    }

    /// Resolve a configured path against the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.resolve(&self.config.assets)
    }

    pub fn compressed_dir(&self) -> PathBuf {
        self.resolve(&self.config.compressed)
    }

    pub fn database_path(&self) -> PathBuf {
        self.compressed_dir().join(&self.config.database)
    }

    pub fn features_dir(&self) -> PathBuf {
        self.resolve(&self.config.features)
    }

    pub fn asset_map_path(&self) -> PathBuf {
        self.resolve(&self.config.asset_map)
    }

    pub fn version_path(&self) -> PathBuf {
        self.resolve(&self.config.version_file)
    }

    pub fn wip_dir(&self) -> PathBuf {
        self.resolve(&self.config.wip)
    }
}

/// Discover a project rooted at `root`, loading skinshop.yaml when present.
pub fn discover(root: impl AsRef<Path>) -> Result<Project> {
    let root = root.as_ref().to_path_buf();

    let config_path = root.join(CONFIG_FILENAME);
    if config_path.exists() {
        Ok(Project {
            config: ProjectConfig::load(&config_path)?,
            root,
            has_config: true,
        })
    } else {
        Ok(Project::with_defaults(root))
    }
}
