use anyhow::Result;
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::commands::{check, generate, inspect};
use cli::logging;

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate { config, output } => generate::generate_file(config, output.as_deref()),
        Commands::Check { path, config } => check::check_file(path, config),
        Commands::Inspect { arity, config, json } => inspect::inspect_arity(*arity, config, *json),
    }
}
