//! Entry command implementation.
//!
//! Runs the interactive authoring session on stdin/stdout.

use std::io;
use std::path::PathBuf;

use clap::Args;

use crate::entry::{run_console, ConsoleOptions};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};

use super::ProjectArgs;

/// Interactively author entry.json for an asset folder and zip it
#[derive(Args, Debug)]
pub struct EntryArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Directory holding the asset folders (default: `wip` from config)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Author this folder instead of choosing from the menu
    #[arg(long)]
    pub folder: Option<String>,

    /// Where to write <folder>.zip
    #[arg(long, short, default_value = ".")]
    pub out: PathBuf,
}

pub fn run(args: EntryArgs, printer: &Printer) -> Result<()> {
    let project = args.project.discover()?;
    let options = ConsoleOptions {
        root: args.dir.unwrap_or_else(|| project.wip_dir()),
        folder: args.folder,
        out_dir: args.out,
        config: project.config.clone(),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let authored = run_console(&options, &mut input, &mut output)?;

    printer.status("Wrote", &display_path(&authored.entry_path));
    printer.status(
        "Zipped",
        &format!(
            "{} ({})",
            display_path(&authored.archive_path),
            plural(authored.archived_files, "file", "files")
        ),
    );

    Ok(())
}
