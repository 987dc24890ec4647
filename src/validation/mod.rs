//! Offline validation of authored entries.
//!
//! Loads an asset folder's `entry.json` and checks it against the files in
//! the folder. Used by `skinshop validate`.

mod checks;
mod diagnostic;

use std::path::{Path, PathBuf};

pub use diagnostic::{Diagnostic, Report, Severity};

use crate::discovery::png_files;
use crate::entry::EntryRecord;
use crate::error::Result;

/// An entry together with the folder it describes.
#[derive(Debug, Clone)]
pub struct EntryContext {
    pub folder: PathBuf,
    pub record: EntryRecord,
    /// PNG files currently in the folder.
    pub files: Vec<String>,
}

impl EntryContext {
    /// Load `entry.json` and list the folder's PNGs.
    pub fn load(folder: &Path) -> Result<Self> {
        Ok(Self {
            folder: folder.to_path_buf(),
            record: EntryRecord::load(folder)?,
            files: png_files(folder)?,
        })
    }
}

/// Run every check against an entry.
pub fn validate_entry(ctx: &EntryContext) -> Report {
    let mut report = Report::new();

    report.extend(checks::check_name(ctx));
    report.extend(checks::check_lengths(ctx));
    report.extend(checks::check_duplicate_layers(ctx));
    report.extend(checks::check_missing_layers(ctx));
    report.extend(checks::check_unused_files(ctx));
    report.extend(checks::check_copy_sources(ctx));
    report.extend(checks::check_hex_codes(ctx));
    report.extend(checks::check_swatch_counts(ctx));
    report.extend(checks::check_marker_advanced(ctx));
    report.extend(checks::check_layer_sizes(ctx));

    report
}

/// Load and validate the entry in `folder`.
pub fn validate_folder(folder: &Path) -> Result<Report> {
    let ctx = EntryContext::load(folder)?;
    Ok(validate_entry(&ctx))
}
