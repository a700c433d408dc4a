//! csst - apply class string transforms from the command line.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use csst::{CsstConfig, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Add { args } => cli::tokens::print_added(args),
        Commands::Remove { args } => cli::tokens::print_removed(args),
        Commands::Apply { args } => cli::apply::run_apply(args, &CsstConfig::load(&cli.config)?),
        Commands::Check => cli::check::check_config(&CsstConfig::load(&cli.config)?),
    }
}
