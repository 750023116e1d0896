use regex::Regex;
use std::sync::{Arc, LazyLock};
use tracing::debug;

use super::extractor::{ExtractionStrategy, FieldExtractor, FieldResult};
use super::recognizer::{NoopRecognizer, PersonRecognizer};
use crate::record::Field;

/// Number of leading non-empty lines handed to the recognizer.
pub const RECOGNIZER_SAMPLE_LINES: usize = 5;

// Capitals and spaces, 2 to 40 characters, starting with a letter.
static CAPS_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z ]{1,39}$").expect("valid heading pattern"));

/// Resolves the candidate's name through three tiers, first hit wins:
/// recognizer over the opening lines, an all-caps line, then the first line.
#[derive(Clone)]
pub struct NameExtractor {
    recognizer: Arc<dyn PersonRecognizer>,
}

impl NameExtractor {
    #[must_use]
    pub fn new(recognizer: Arc<dyn PersonRecognizer>) -> Self {
        Self { recognizer }
    }

    pub fn resolve(&self, raw: &str) -> Option<(String, ExtractionStrategy)> {
        let text = raw.trim();

        let sample = text
            .lines()
            .filter(|l| !l.trim().is_empty())
            .take(RECOGNIZER_SAMPLE_LINES)
            .collect::<Vec<_>>()
            .join(" ");

        if let Some(span) = self.recognizer.best_person_span(&sample) {
            if !span.trim().is_empty() {
                return Some((span, ExtractionStrategy::NerModel));
            }
        }

        if let Some(line) = text.lines().map(str::trim).find(|l| is_name_heading(l)) {
            return Some((title_case(line), ExtractionStrategy::Heuristic));
        }

        text.lines()
            .find(|l| !l.trim().is_empty())
            .map(|l| (l.to_string(), ExtractionStrategy::Fallback))
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new(Arc::new(NoopRecognizer))
    }
}

impl std::fmt::Debug for NameExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameExtractor").finish_non_exhaustive()
    }
}

impl FieldExtractor for NameExtractor {
    type Output = String;

    fn field(&self) -> Field {
        Field::Name
    }

    fn extract(&self, raw: &str) -> FieldResult<String> {
        match self.resolve(raw) {
            Some((name, strategy)) => {
                debug!(name = name.as_str(), ?strategy, "Extracted name");
                Ok(name)
            }
            None => {
                debug!("No name found");
                Ok(String::new())
            }
        }
    }
}

/// An all-caps line that is not the word RESUME in some form.
pub fn is_name_heading(line: &str) -> bool {
    CAPS_HEADING.is_match(line) && !line.contains("RESUME")
}

/// Uppercases the first letter of each alphabetic run and lowercases the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }

    out
}
