//! Asset map: feature folder name -> sorted PNG paths inside it.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::discovery::{feature_images, filtered_subdirectory_names, Project};
use crate::error::{Result, SkinError};

/// Feature name to relative image paths, keyed in name order.
pub type AssetMap = BTreeMap<String, Vec<String>>;

/// Scan the features directory into an asset map.
pub fn collect_asset_map(project: &Project) -> Result<AssetMap> {
    let features = project.features_dir();
    let mut map = AssetMap::new();

    for feature in filtered_subdirectory_names(&features, &project.config)? {
        let images = feature_images(&features.join(&feature), &project.config)?;
        map.insert(feature, images);
    }

    Ok(map)
}

/// Scan the features directory and write the asset map JSON.
pub fn generate_asset_map(project: &Project) -> Result<(AssetMap, PathBuf)> {
    let map = collect_asset_map(project)?;
    let path = project.asset_map_path();
    write_asset_map(&path, &map)?;
    Ok((map, path))
}

pub fn write_asset_map(path: &Path, map: &AssetMap) -> Result<()> {
    let json = serde_json::to_string(map).map_err(|e| SkinError::Parse {
        message: format!("Failed to serialize asset map: {}", e),
        help: None,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| SkinError::io(parent, "Failed to create asset map directory", e))?;
    }
    fs::write(path, json).map_err(|e| SkinError::io(path, "Failed to write asset map", e))
}
