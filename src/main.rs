use anyhow::Result;
use clap::Parser;

use cvscan::cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    dispatch(cli.command)
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Extract {
            paths,
            config,
            compact,
        } => cvscan::cli::extract::run(&paths, config.as_deref(), compact),
        Commands::Text { config, compact } => cvscan::cli::text::run(config.as_deref(), compact),
        Commands::Skills { config } => cvscan::cli::catalog::run_skills(config.as_deref()),
        Commands::Config => cvscan::cli::catalog::run_config(),
    }
}
