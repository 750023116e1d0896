pub mod catalog;
pub mod extract;
pub mod text;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cvscan_core::{Aggregator, ExtractorConfig};
use serde::Serialize;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "cvscan",
    about = "Extract contact details, skills and work history from resumes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract fields from resume files (.txt, .md, .pdf)
    Extract {
        /// Resume file(s) to read
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// JSON file overriding the extraction tables
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Extract fields from resume text read on stdin
    Text {
        /// JSON file overriding the extraction tables
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// List the recognised skill names
    Skills {
        /// JSON file overriding the extraction tables
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the default extraction tables as JSON
    Config,
}

pub fn load_config(path: Option<&Path>) -> Result<ExtractorConfig> {
    match path {
        Some(p) => {
            debug!(path = %p.display(), "Loading extraction config");
            ExtractorConfig::from_file(p)
                .with_context(|| format!("failed to load config from {}", p.display()))
        }
        None => Ok(ExtractorConfig::default()),
    }
}

pub fn build_aggregator(path: Option<&Path>) -> Result<Aggregator> {
    let config = load_config(path)?;
    Aggregator::from_config(&config).context("invalid extraction config")
}

pub fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{json}");
    Ok(())
}
