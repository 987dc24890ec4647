//! skinshop - asset preparation for the MC SkinShop front-end
//!
//! Authors `entry.json` metadata for layered skin assets, zips asset
//! folders, generates the feature asset map and stamps the build version.

pub mod archive;
pub mod cli;
pub mod discovery;
pub mod entry;
pub mod error;
pub mod output;
pub mod prepare;
pub mod validation;

pub use discovery::{discover, Project, ProjectConfig};
pub use entry::{
    normalize_hex, run_console, AuthoringSession, ColourSpec, ConsoleOptions, EntryRecord,
    FolderChoice, LayerEntry, Prompt, SwatchColours, Transition,
};
pub use error::{Result, SkinError};
pub use prepare::{build_assets, generate_asset_map, prepare, set_version, AssetMap};
pub use validation::{validate_entry, validate_folder, Diagnostic, Report, Severity};
