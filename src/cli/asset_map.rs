use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::prepare::{generate_asset_map, AssetMap};

use super::ProjectArgs;

/// Generate the feature asset map
#[derive(Args, Debug)]
pub struct AssetMapArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

pub fn run(args: AssetMapArgs, printer: &Printer) -> Result<()> {
    let project = args.project.discover()?;
    printer.status("Scanning", &display_path(&project.features_dir()));

    let (map, path) = generate_asset_map(&project)?;
    report(&map, &path, printer);

    Ok(())
}

pub(crate) fn report(map: &AssetMap, path: &std::path::Path, printer: &Printer) {
    let images: usize = map.values().map(Vec::len).sum();
    printer.status(
        "Mapped",
        &format!(
            "{} in {} -> {}",
            plural(images, "image", "images"),
            plural(map.len(), "feature", "features"),
            display_path(path)
        ),
    );
}
