//! Cuebank CLI - Soundbank Identifier Toolkit
//!
//! Command-line interface for hashing names, validating manifests, and
//! generating identifier constants.

use clap::Parser;
use env_logger::Env;
use log::info;

use cuebank::cli::{Cli, Commands};
use cuebank::Result;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    info!("Cuebank v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("Cuebank v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Hash { name } => cuebank::cli::commands::hash(&name),
        Commands::Check { manifest } => cuebank::cli::commands::check(&manifest),
        Commands::Generate {
            manifest,
            out,
            format,
            check,
        } => cuebank::cli::commands::generate(&manifest, &out, format.into(), check),
        Commands::List { manifest, category } => {
            cuebank::cli::commands::list(&manifest, category.as_deref())
        }
        Commands::Diff { old, new } => cuebank::cli::commands::diff(&old, &new),
        Commands::Scan { dir } => cuebank::cli::commands::scan(&dir),
    }
}
