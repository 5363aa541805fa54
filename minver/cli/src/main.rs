use clap::Parser;
use config::{Cli, Commands};

mod config;
mod error;
mod logging;
mod transform;

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    logging::init_tracing_registry();

    match cli.commands {
        Commands::Transform(args) => transform::transform_command(args)?,
    }

    Ok(())
}
