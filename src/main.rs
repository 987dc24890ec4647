use clap::Parser;
use miette::Result;
use skinshop::cli::{Cli, Commands};
use skinshop::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Entry(args) => skinshop::cli::entry::run(args, &printer)?,
        Commands::Build(args) => skinshop::cli::build::run(args, &printer)?,
        Commands::AssetMap(args) => skinshop::cli::asset_map::run(args, &printer)?,
        Commands::Version(args) => skinshop::cli::version::run(args, &printer)?,
        Commands::Prepare(args) => skinshop::cli::prepare::run(args, &printer)?,
        Commands::Validate(args) => skinshop::cli::validate::run(args, &printer)?,
        Commands::List(args) => skinshop::cli::list::run(args, &printer)?,
        Commands::Completions(args) => skinshop::cli::completions::run(args)?,
    }

    Ok(())
}
