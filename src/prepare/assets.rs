//! Compressed asset build: one zip per asset folder plus a name database.

use std::fs;
use std::path::PathBuf;

use crate::archive::zip_directory;
use crate::discovery::{filtered_subdirectory_names, Project};
use crate::error::{Result, SkinError};

/// What `build_assets` produced.
#[derive(Debug, Clone, Default)]
pub struct AssetBuild {
    /// Folder names, in archive order.
    pub folders: Vec<String>,
    /// Archive paths, parallel to `folders`.
    pub archives: Vec<PathBuf>,
    /// The folder-name database.
    pub database: PathBuf,
}

/// Rebuild the compressed directory from scratch.
///
/// Any previous output is removed first, so archives of deleted folders do
/// not linger.
pub fn build_assets(project: &Project) -> Result<AssetBuild> {
    let source = project.assets_dir();
    let output = project.compressed_dir();

    if output.is_dir() {
        fs::remove_dir_all(&output)
            .map_err(|e| SkinError::io(&output, "Failed to clear compressed directory", e))?;
    }
    fs::create_dir_all(&output)
        .map_err(|e| SkinError::io(&output, "Failed to create compressed directory", e))?;

    let folders = filtered_subdirectory_names(&source, &project.config)?;
    let mut archives = Vec::with_capacity(folders.len());

    for folder in &folders {
        let archive = output.join(format!("{}.zip", folder));
        zip_directory(&source.join(folder), &archive)?;
        archives.push(archive);
    }

    let database = project.database_path();
    write_database(&database, &folders)?;

    Ok(AssetBuild {
        folders,
        archives,
        database,
    })
}

fn write_database(path: &std::path::Path, folders: &[String]) -> Result<()> {
    let json = serde_json::to_string(folders).map_err(|e| SkinError::Parse {
        message: format!("Failed to serialize asset database: {}", e),
        help: None,
    })?;

    fs::write(path, json).map_err(|e| SkinError::io(path, "Failed to write asset database", e))
}
