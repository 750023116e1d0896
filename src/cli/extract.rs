use std::path::{Path, PathBuf};

use anyhow::Result;
use console::style;
use cvscan_core::CompositeSource;

use super::{build_aggregator, print_json};

pub fn run(paths: &[PathBuf], config: Option<&Path>, compact: bool) -> Result<()> {
    let aggregator = build_aggregator(config)?;
    let source = CompositeSource::default();

    let batch = aggregator.extract_paths(&source, paths);

    for doc in &batch.documents {
        if let Some(reason) = &doc.acquisition_error {
            eprintln!("{} {}: {reason}", style("✗").red(), doc.source);
        }
    }

    print_json(&batch.documents, compact)?;

    eprintln!(
        "{} Processed {} document(s), {} unreadable",
        style("●").green(),
        batch.len(),
        batch.unreadable()
    );

    Ok(())
}
