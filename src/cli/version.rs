use clap::Args;

use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::prepare::set_version;

use super::ProjectArgs;

/// Write the version string
#[derive(Args, Debug)]
pub struct VersionArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Build number appended to the version prefix (default: 0)
    pub build: Option<String>,
}

pub fn run(args: VersionArgs, printer: &Printer) -> Result<()> {
    let project = args.project.discover()?;
    let (version, path) = set_version(&project, args.build.as_deref())?;

    printer.status("Stamped", &format!("{} -> {}", version, display_path(&path)));
    Ok(())
}
