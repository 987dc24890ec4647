//! Prepare command implementation.
//!
//! The front-end build hook: archives, asset map, then version.

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::prepare::prepare;

use super::ProjectArgs;

/// Run build, asset-map and version in order
#[derive(Args, Debug)]
pub struct PrepareArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Build number appended to the version prefix (default: 0)
    pub build: Option<String>,
}

pub fn run(args: PrepareArgs, printer: &Printer) -> Result<()> {
    let project = args.project.discover()?;
    if project.has_config {
        printer.info("Using", &display_path(&project.root.join(crate::discovery::CONFIG_FILENAME)));
    }

    let prepared = prepare(&project, args.build.as_deref())?;

    super::build::report(&prepared.assets, printer);
    super::asset_map::report(&prepared.asset_map, &prepared.asset_map_path, printer);
    printer.status(
        "Stamped",
        &format!("{} -> {}", prepared.version, display_path(&prepared.version_path)),
    );

    Ok(())
}
