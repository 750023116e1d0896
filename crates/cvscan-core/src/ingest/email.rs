use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::extractor::{FieldExtractor, FieldResult};
use super::normalizer::TextNormalizer;
use crate::config::EmailPreferences;
use crate::record::Field;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email pattern")
});

/// Picks one address out of the resume.
///
/// Candidates are ranked by preferred local-part prefix, then by personal
/// mailbox domain, then by position in the text.
#[derive(Debug, Clone, Default)]
pub struct EmailExtractor {
    preferences: EmailPreferences,
}

impl EmailExtractor {
    #[must_use]
    pub fn new(preferences: EmailPreferences) -> Self {
        let preferences = EmailPreferences {
            preferred_prefixes: preferences
                .preferred_prefixes
                .iter()
                .map(|p| p.to_lowercase())
                .collect(),
            personal_domains: preferences
                .personal_domains
                .iter()
                .map(|d| d.to_lowercase())
                .collect(),
        };
        Self { preferences }
    }

    /// Every address-shaped token, in scan order.
    pub fn candidates(normalized: &str) -> Vec<&str> {
        EMAIL.find_iter(normalized).map(|m| m.as_str()).collect()
    }

    pub fn select<'a>(&self, candidates: &[&'a str]) -> Option<&'a str> {
        let first = *candidates.first()?;

        for prefix in &self.preferences.preferred_prefixes {
            if let Some(email) = candidates
                .iter()
                .copied()
                .find(|e| e.to_lowercase().starts_with(prefix.as_str()))
            {
                debug!(email, prefix = prefix.as_str(), "Preferred email");
                return Some(email);
            }
        }

        if let Some(email) = candidates.iter().copied().find(|e| self.is_personal(e)) {
            debug!(email, "Personal-domain email");
            return Some(email);
        }

        debug!(email = first, "First email in text");
        Some(first)
    }

    fn is_personal(&self, email: &str) -> bool {
        email.split_once('@').is_some_and(|(_, domain)| {
            let domain = domain.to_lowercase();
            self.preferences.personal_domains.iter().any(|d| *d == domain)
        })
    }
}

impl FieldExtractor for EmailExtractor {
    type Output = String;

    fn field(&self) -> Field {
        Field::Email
    }

    fn extract(&self, raw: &str) -> FieldResult<String> {
        let normalized = TextNormalizer::email(raw);
        let candidates = Self::candidates(&normalized);

        if candidates.is_empty() {
            debug!("No email found");
            return Ok(String::new());
        }

        Ok(self
            .select(&candidates)
            .map(str::to_string)
            .unwrap_or_default())
    }
}
