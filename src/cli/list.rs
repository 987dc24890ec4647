//! List command implementation.
//!
//! Shows the asset folders available for authoring.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::summarize_folders;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};

use super::ProjectArgs;

/// List asset folders and their entry status
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Directory holding the asset folders (default: `wip` from config)
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let project = args.project.discover()?;
    let dir = args.dir.unwrap_or_else(|| project.wip_dir());

    let folders = summarize_folders(&dir, &project.config)?;
    for (i, folder) in folders.iter().enumerate() {
        let state = if folder.has_entry {
            "entry.json"
        } else {
            "no entry"
        };
        printer.info(
            &(i + 1).to_string(),
            &format!(
                "{} {}",
                folder.name,
                printer.dim(&format!("({}, {})", plural(folder.png_count, "layer", "layers"), state))
            ),
        );
    }

    printer.status(
        "Found",
        &format!("{} in {}", plural(folders.len(), "folder", "folders"), display_path(&dir)),
    );
    Ok(())
}
