use std::path::Path;

use anyhow::Result;
use cvscan_core::{ExtractorConfig, SkillCatalog};

use super::load_config;

pub fn run_skills(config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let catalog = SkillCatalog::new(config.skill_names())?;

    for name in catalog.names() {
        println!("{name}");
    }

    Ok(())
}

pub fn run_config() -> Result<()> {
    println!("{}", ExtractorConfig::default().to_json_pretty()?);
    Ok(())
}
