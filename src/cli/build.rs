//! Build command implementation.
//!
//! Zips each asset folder into the compressed directory.

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::prepare::{build_assets, AssetBuild};

use super::ProjectArgs;

/// Zip every asset folder and write the asset database
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let project = args.project.discover()?;
    printer.status("Scanning", &display_path(&project.assets_dir()));

    let build = build_assets(&project)?;
    report(&build, printer);

    Ok(())
}

pub(crate) fn report(build: &AssetBuild, printer: &Printer) {
    for archive in &build.archives {
        printer.status("Zipped", &display_path(archive));
    }
    printer.status(
        "Finished",
        &format!(
            "{} -> {}",
            plural(build.folders.len(), "archive", "archives"),
            display_path(&build.database)
        ),
    );
}
