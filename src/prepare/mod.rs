//! Front-end build preparation steps.
//!
//! `prepare` runs the three steps in the order the front-end build expects:
//! compressed asset archives, the asset map, then the version stamp.

mod asset_map;
mod assets;
mod version;

use std::path::PathBuf;

use crate::discovery::Project;
use crate::error::Result;

pub use asset_map::{collect_asset_map, generate_asset_map, write_asset_map, AssetMap};
pub use assets::{build_assets, AssetBuild};
pub use version::{set_version, version_string, DEFAULT_BUILD};

/// Everything `prepare` produced.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub assets: AssetBuild,
    pub asset_map: AssetMap,
    pub asset_map_path: PathBuf,
    pub version: String,
    pub version_path: PathBuf,
}

/// Run all preparation steps.
pub fn prepare(project: &Project, build: Option<&str>) -> Result<Prepared> {
    let assets = build_assets(project)?;
    let (asset_map, asset_map_path) = generate_asset_map(project)?;
    let (version, version_path) = set_version(project, build)?;

    Ok(Prepared {
        assets,
        asset_map,
        asset_map_path,
        version,
        version_path,
    })
}
