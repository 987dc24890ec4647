//! Picking the asset folder to author.

use std::path::{Path, PathBuf};

/// How the operator named the folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderChoice {
    /// A 1-based menu number, with the answer as typed.
    ByIndex { index: i64, raw: String },
    /// A literal folder name (or relative path) under the root.
    ByName(String),
}

impl FolderChoice {
    /// Integers are menu numbers, anything else is a name.
    pub fn parse(answer: &str) -> Self {
        match answer.trim().parse::<i64>() {
            Ok(index) => FolderChoice::ByIndex {
                index,
                raw: answer.to_string(),
            },
            Err(_) => FolderChoice::ByName(answer.to_string()),
        }
    }

    /// Resolve against the numbered `folders` (names, in menu order).
    ///
    /// A number outside the menu is taken as the literal answer, so a
    /// folder called `2024` or `007` can still be picked by typing its name.
    /// The result is not checked for existence.
    pub fn resolve(&self, root: &Path, folders: &[String]) -> PathBuf {
        match self {
            FolderChoice::ByIndex { index, .. }
                if *index >= 1 && (*index as usize) <= folders.len() =>
            {
                root.join(&folders[*index as usize - 1])
            }
            FolderChoice::ByIndex { raw, .. } => root.join(raw),
            FolderChoice::ByName(name) => root.join(name),
        }
    }
}

/// Folder name used for the archive (`<name>.zip`).
pub fn folder_name(folder: &Path) -> String {
    folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "entry".to_string())
}
