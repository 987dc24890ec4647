//! The `entry.json` record.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkinError};

use super::colour::ColourSpec;

/// File name of the record inside an asset folder.
pub const ENTRY_FILENAME: &str = "entry.json";

/// One selected layer, in stacking order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerEntry {
    pub filename: String,
    /// 1-based selection order, also the render order.
    pub position: usize,
    pub colour: ColourSpec,
    pub advanced: bool,
}

/// Metadata describing how an asset's layers can be recoloured.
///
/// The three sequences are parallel: `colors[i]` and `advanced[i]` belong to
/// `layers[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub name: String,
    pub layers: Vec<String>,
    pub colors: Vec<ColourSpec>,
    pub advanced: Vec<bool>,
}

impl EntryRecord {
    pub fn new(name: impl Into<String>, layers: &[LayerEntry]) -> Self {
        Self {
            name: name.into(),
            layers: layers.iter().map(|l| l.filename.clone()).collect(),
            colors: layers.iter().map(|l| l.colour.clone()).collect(),
            advanced: layers.iter().map(|l| l.advanced).collect(),
        }
    }

    /// Zip the parallel sequences back into layers.
    ///
    /// Stops at the shortest sequence; use `is_consistent` to detect truncation.
    pub fn layer_entries(&self) -> Vec<LayerEntry> {
        self.layers
            .iter()
            .zip(&self.colors)
            .zip(&self.advanced)
            .enumerate()
            .map(|(i, ((filename, colour), advanced))| LayerEntry {
                filename: filename.clone(),
                position: i + 1,
                colour: colour.clone(),
                advanced: *advanced,
            })
            .collect()
    }

    /// True when `layers`, `colors` and `advanced` have the same length.
    pub fn is_consistent(&self) -> bool {
        self.layers.len() == self.colors.len() && self.layers.len() == self.advanced.len()
    }

    /// Serialize as pretty JSON with 4-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer).map_err(|e| SkinError::Parse {
            message: format!("Failed to serialize entry: {}", e),
            help: None,
        })?;

        String::from_utf8(buf).map_err(|e| SkinError::Parse {
            message: format!("Entry JSON is not UTF-8: {}", e),
            help: None,
        })
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| SkinError::Parse {
            message: format!("Invalid {}: {}", ENTRY_FILENAME, e),
            help: Some(
                "Expected an object with name, layers, colors and advanced".to_string(),
            ),
        })
    }

    /// Load `entry.json` from an asset folder.
    pub fn load(folder: &Path) -> Result<Self> {
        let path = folder.join(ENTRY_FILENAME);
        let content = fs::read_to_string(&path)
            .map_err(|e| SkinError::io(&path, "Failed to read entry", e))?;

        Self::parse(&content)
    }

    /// Write `entry.json` into an asset folder, replacing any previous one.
    pub fn write_to(&self, folder: &Path) -> Result<PathBuf> {
        let path = folder.join(ENTRY_FILENAME);
        let json = self.to_pretty_json()?;

        fs::write(&path, json).map_err(|e| SkinError::io(&path, "Failed to write entry", e))?;

        Ok(path)
    }
}
