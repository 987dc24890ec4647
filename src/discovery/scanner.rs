//! File system scanning for asset folders and layer images.
//!
//! Every listing is sorted by name so menu numbers and generated files are
//! the same on every platform.

use std::path::Path;

use walkdir::WalkDir;

use crate::entry::ENTRY_FILENAME;
use crate::error::{Result, SkinError};

use super::config::ProjectConfig;

/// Depth of PNGs collected for the asset map: the feature folder itself
/// and one level of subfolders.
const FEATURE_SCAN_DEPTH: usize = 2;

/// Summary of one asset folder for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSummary {
    pub name: String,
    pub png_count: usize,
    pub has_entry: bool,
}

fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(SkinError::Io {
            path: path.to_path_buf(),
            message: "Not a directory".to_string(),
        })
    }
}

/// Names of the immediate subdirectories of `root`, sorted, skipping folders
/// matched by the config excludes.
pub fn filtered_subdirectory_names(root: &Path, config: &ProjectConfig) -> Result<Vec<String>> {
    ensure_dir(root)?;

    Ok(WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| !config.is_excluded(Path::new(name)))
        .collect())
}

/// PNG file names directly inside `folder`, sorted.
pub fn png_files(folder: &Path) -> Result<Vec<String>> {
    ensure_dir(folder)?;

    Ok(WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| !e.file_type().is_dir())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".png"))
        .collect())
}

/// PNGs under a feature folder as `/`-separated relative paths, sorted.
pub fn feature_images(folder: &Path, config: &ProjectConfig) -> Result<Vec<String>> {
    ensure_dir(folder)?;

    let mut images: Vec<String> = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(FEATURE_SCAN_DEPTH)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| !e.file_type().is_dir())
        .filter_map(|e| {
            let relative = e.path().strip_prefix(folder).ok()?;
            if config.is_excluded(relative) {
                return None;
            }
            let relative = crate::archive::archive_path(relative);
            relative.ends_with(".png").then_some(relative)
        })
        .collect();

    images.sort();
    Ok(images)
}

/// Summaries for every asset folder under `root`.
pub fn summarize_folders(root: &Path, config: &ProjectConfig) -> Result<Vec<FolderSummary>> {
    filtered_subdirectory_names(root, config)?
        .into_iter()
        .map(|name| {
            let folder = root.join(&name);
            Ok(FolderSummary {
                png_count: png_files(&folder)?.len(),
                has_entry: folder.join(ENTRY_FILENAME).is_file(),
                name,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_subdirectories_sorted_and_dirs_only() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("hat02")).unwrap();
        fs::create_dir_all(dir.path().join("cape01")).unwrap();
        fs::write(dir.path().join("readme.txt"), "x").unwrap();

        let names = filtered_subdirectory_names(dir.path(), &ProjectConfig::default()).unwrap();
        assert_eq!(names, vec!["cape01", "hat02"]);
    }

    #[test]
    fn test_subdirectories_respect_excludes() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("cape01")).unwrap();
        fs::create_dir_all(dir.path().join("scratch")).unwrap();

        let config = ProjectConfig {
            excludes: vec!["scratch".into()],
            ..Default::default()
        };
        let names = filtered_subdirectory_names(dir.path(), &config).unwrap();
        assert_eq!(names, vec!["cape01"]);
    }

    #[test]
    fn test_missing_root_is_error() {
        let dir = tempdir().unwrap();
        assert!(filtered_subdirectory_names(
            &dir.path().join("missing"),
            &ProjectConfig::default()
        )
        .is_err());
        assert!(png_files(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_png_files_filters_and_sorts() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("trim.png"), "x").unwrap();
        fs::write(dir.path().join("base.png"), "x").unwrap();
        fs::write(dir.path().join("entry.json"), "{}").unwrap();
        fs::write(dir.path().join("shadow.PNG"), "x").unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/deep.png"), "x").unwrap();

        assert_eq!(png_files(dir.path()).unwrap(), vec!["base.png", "trim.png"]);
    }

    #[test]
    fn test_feature_images_two_levels() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("b/deeper")).unwrap();
        fs::write(dir.path().join("z.png"), "x").unwrap();
        fs::write(dir.path().join("b/a.png"), "x").unwrap();
        fs::write(dir.path().join("b/deeper/skip.png"), "x").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let images = feature_images(dir.path(), &ProjectConfig::default()).unwrap();
        assert_eq!(images, vec!["b/a.png", "z.png"]);
    }

    #[test]
    fn test_summarize_folders() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("cape01")).unwrap();
        fs::write(dir.path().join("cape01/base.png"), "x").unwrap();
        fs::write(dir.path().join("cape01/entry.json"), "{}").unwrap();
        fs::create_dir_all(dir.path().join("empty")).unwrap();

        let summaries = summarize_folders(dir.path(), &ProjectConfig::default()).unwrap();

        assert_eq!(
            summaries,
            vec![
                FolderSummary {
                    name: "cape01".into(),
                    png_count: 1,
                    has_entry: true
                },
                FolderSummary {
                    name: "empty".into(),
                    png_count: 0,
                    has_entry: false
                },
            ]
        );
    }
}
