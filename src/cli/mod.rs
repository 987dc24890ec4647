pub mod asset_map;
pub mod build;
pub mod completions;
pub mod entry;
pub mod list;
pub mod prepare;
pub mod validate;
pub mod version;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::discovery::{discover, Project};
use crate::error::Result;

/// skinshop - asset preparation for MC SkinShop
#[derive(Parser, Debug)]
#[command(name = "skinshop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactively author entry.json for an asset folder and zip it
    Entry(entry::EntryArgs),

    /// Zip every asset folder and write the asset database
    Build(build::BuildArgs),

    /// Generate the feature asset map
    AssetMap(asset_map::AssetMapArgs),

    /// Write the version string
    Version(version::VersionArgs),

    /// Run build, asset-map and version in order
    Prepare(prepare::PrepareArgs),

    /// Check an entry.json against its asset folder
    Validate(validate::ValidateArgs),

    /// List asset folders and their entry status
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Options shared by commands that work on a project.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root containing skinshop.yaml (default: current directory)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

impl ProjectArgs {
    pub fn discover(&self) -> Result<Project> {
        discover(&self.root)
    }
}
