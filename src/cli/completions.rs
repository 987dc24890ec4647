use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::Shell;

use crate::error::{Result, SkinError};

use super::Cli;

/// Generate shell completions
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    match &args.output {
        Some(path) => {
            let mut file =
                File::create(path).map_err(|e| SkinError::io(path, "Failed to create script", e))?;
            clap_complete::generate(args.shell, &mut cmd, name, &mut file);
        }
        None => clap_complete::generate(args.shell, &mut cmd, name, &mut io::stdout()),
    }

    Ok(())
}
