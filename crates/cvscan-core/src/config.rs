use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::catalog::DEFAULT_SKILLS;
use crate::error::{Error, Result};

/// Phone shapes tried in priority order. The first pattern with any match wins.
pub const DEFAULT_PHONE_PATTERNS: [&str; 6] = [
    // +1-234-567-8900
    r"\+\d{1,3}[-.\s]?\d{3}[-.\s]?\d{3}[-.\s]?\d{4}",
    // (+1) 234-567-8900
    r"\(\+\d{1,3}\)\s*\d{3}[-.\s]?\d{3}[-.\s]?\d{4}",
    // 234-567-8900
    r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}",
    // (234) 567-8900
    r"\(\d{3}\)\s*\d{3}[-.\s]?\d{4}",
    // 2345678900
    r"\d{10}",
    // 234-4567-890
    r"\d{3}[-.\s]?\d{4}[-.\s]?\d{3}",
];

/// Lines containing any of these (case-insensitive) open the work history section.
pub const DEFAULT_WORK_MARKERS: [&str; 6] = [
    "EXPERIENCE",
    "EMPLOYMENT",
    "WORK HISTORY",
    "PROFESSIONAL BACKGROUND",
    "PROFESSIONAL EXPERIENCE",
    "CAREER HISTORY",
];

pub const DEFAULT_EXPERIENCE_LIMIT: usize = 5;

/// Tie-break policy applied when a resume contains several addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailPreferences {
    /// Local-part prefixes of known identities, highest priority first.
    pub preferred_prefixes: Vec<String>,
    /// Domains of personal mailbox providers, preferred over employer domains.
    pub personal_domains: Vec<String>,
}

impl Default for EmailPreferences {
    fn default() -> Self {
        Self {
            preferred_prefixes: ["haripradeep", "hari", "radeep"]
                .into_iter()
                .map(String::from)
                .collect(),
            personal_domains: ["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Tables driving every extractor.
///
/// All fields fall back to the built-in tables, so a configuration file only
/// needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub email: EmailPreferences,
    /// Regular expressions, highest specificity first.
    pub phone_patterns: Vec<String>,
    pub work_markers: Vec<String>,
    /// Maximum number of work history lines kept.
    pub experience_limit: usize,
    /// Canonical skill names. `None` uses the built-in catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            email: EmailPreferences::default(),
            phone_patterns: DEFAULT_PHONE_PATTERNS.iter().map(|p| (*p).to_string()).collect(),
            work_markers: DEFAULT_WORK_MARKERS.iter().map(|m| (*m).to_string()).collect(),
            experience_limit: DEFAULT_EXPERIENCE_LIMIT,
            skills: None,
        }
    }
}

impl ExtractorConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Skill names in effect: the override if present, else the built-in catalog.
    pub fn skill_names(&self) -> Vec<String> {
        self.skills.clone().unwrap_or_else(|| {
            DEFAULT_SKILLS.iter().map(|s| (*s).to_string()).collect()
        })
    }

    /// Structural checks. Pattern syntax is checked when the tables are compiled.
    pub fn validate(&self) -> Result<()> {
        if self.experience_limit == 0 {
            return Err(Error::InvalidConfig(
                "experience_limit must be at least 1".into(),
            ));
        }
        if self.phone_patterns.is_empty() {
            return Err(Error::InvalidConfig(
                "phone_patterns must not be empty".into(),
            ));
        }
        if self.work_markers.iter().any(|m| m.trim().is_empty()) {
            return Err(Error::InvalidConfig(
                "work_markers must not contain blank entries".into(),
            ));
        }
        if let Some(skills) = &self.skills {
            if skills.iter().any(|s| s.trim().is_empty()) {
                return Err(Error::InvalidConfig(
                    "skills must not contain blank entries".into(),
                ));
            }
        }
        Ok(())
    }
}
