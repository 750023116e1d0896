use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::{build_aggregator, print_json};

pub fn run(config: Option<&Path>, compact: bool) -> Result<()> {
    let aggregator = build_aggregator(config)?;

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read resume text from stdin")?;

    print_json(&aggregator.extract_text(&text), compact)
}
