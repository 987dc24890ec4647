//! Zip archive writing.
//!
//! Two layouts are produced: a flat archive of an authored asset folder
//! (its PNG layers plus `entry.json`), and a full recursive copy of a folder
//! for the compressed asset build.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::entry::ENTRY_FILENAME;
use crate::error::{Result, SkinError};

/// A file to store in an archive under `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveItem {
    pub source: PathBuf,
    pub name: String,
    pub is_dir: bool,
}

impl ArchiveItem {
    pub fn file(source: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            source: PathBuf::new(),
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Write `items` into a new deflate-compressed archive at `dest`.
///
/// Returns the number of files stored (directories not counted).
pub fn write_zip(dest: &Path, items: &[ArchiveItem]) -> Result<usize> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| SkinError::io(parent, "Failed to create archive directory", e))?;
    }

    let file = File::create(dest).map_err(|e| SkinError::io(dest, "Failed to create archive", e))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let archive_err = |e: zip::result::ZipError| SkinError::Archive {
        path: dest.to_path_buf(),
        message: e.to_string(),
    };

    let mut stored = 0;
    for item in items {
        if item.is_dir {
            zip.add_directory(item.name.as_str(), options)
                .map_err(archive_err)?;
            continue;
        }

        zip.start_file(item.name.as_str(), options)
            .map_err(archive_err)?;
        let mut source = File::open(&item.source)
            .map_err(|e| SkinError::io(&item.source, "Failed to open archive input", e))?;
        io::copy(&mut source, &mut zip)
            .map_err(|e| SkinError::io(&item.source, "Failed to compress file", e))?;
        stored += 1;
    }

    zip.finish().map_err(archive_err)?;
    Ok(stored)
}

/// Archive an authored asset folder: every `*.png` plus `entry.json`, flat.
pub fn zip_entry_folder(folder: &Path, dest: &Path) -> Result<usize> {
    let mut names: Vec<String> = fs::read_dir(folder)
        .map_err(|e| SkinError::io(folder, "Failed to read asset folder", e))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".png") || name == ENTRY_FILENAME)
        .collect();
    names.sort();

    let items: Vec<ArchiveItem> = names
        .into_iter()
        .map(|name| ArchiveItem::file(folder.join(&name), name))
        .collect();

    write_zip(dest, &items)
}

/// Archive everything under `folder`, keeping relative paths.
pub fn zip_directory(folder: &Path, dest: &Path) -> Result<usize> {
    let mut items = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let relative = match entry.path().strip_prefix(folder) {
            Ok(relative) => archive_path(relative),
            Err(_) => continue,
        };

        if entry.file_type().is_dir() {
            items.push(ArchiveItem::dir(format!("{}/", relative)));
        } else {
            items.push(ArchiveItem::file(entry.path(), relative));
        }
    }

    write_zip(dest, &items)
}

/// Zip entry names always use `/`.
pub fn archive_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::tempdir;
    use zip::ZipArchive;

    fn names_in(path: &Path) -> Vec<String> {
        let archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
        let mut names: Vec<String> = archive.file_names().map(|n| n.to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_entry_folder_keeps_pngs_and_entry_only() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("cape01");
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join("base.png"), b"png").unwrap();
        fs::write(folder.join("trim.png"), b"png").unwrap();
        fs::write(folder.join("entry.json"), b"{}").unwrap();
        fs::write(folder.join("notes.txt"), b"skip").unwrap();

        let dest = dir.path().join("cape01.zip");
        let stored = zip_entry_folder(&folder, &dest).unwrap();

        assert_eq!(stored, 3);
        assert_eq!(names_in(&dest), vec!["base.png", "entry.json", "trim.png"]);
    }

    #[test]
    fn test_entries_are_deflated() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("a.png");
        fs::write(&source, vec![7u8; 4096]).unwrap();

        let dest = dir.path().join("out.zip");
        write_zip(&dest, &[ArchiveItem::file(&source, "a.png")]).unwrap();

        let mut archive = ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        let mut file = archive.by_name("a.png").unwrap();
        assert_eq!(file.compression(), CompressionMethod::Deflated);

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).unwrap();
        assert_eq!(contents.len(), 4096);
    }

    #[test]
    fn test_zip_directory_is_recursive() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("hats");
        fs::create_dir_all(folder.join("variants")).unwrap();
        fs::write(folder.join("hat.png"), b"png").unwrap();
        fs::write(folder.join("variants/red.png"), b"png").unwrap();

        let dest = dir.path().join("out/hats.zip");
        let stored = zip_directory(&folder, &dest).unwrap();

        assert_eq!(stored, 2);
        assert_eq!(
            names_in(&dest),
            vec!["hat.png", "variants/", "variants/red.png"]
        );
    }

    #[test]
    fn test_missing_folder_is_error() {
        let dir = tempdir().unwrap();
        let result = zip_entry_folder(&dir.path().join("nope"), &dir.path().join("x.zip"));
        assert!(result.is_err());
    }

    #[test]
    fn test_archive_path_uses_slashes() {
        assert_eq!(archive_path(Path::new("a").join("b").join("c.png").as_path()), "a/b/c.png");
    }
}
