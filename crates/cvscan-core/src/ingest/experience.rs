use tracing::debug;

use super::extractor::{FieldExtractor, FieldResult};
use crate::config::{DEFAULT_EXPERIENCE_LIMIT, DEFAULT_WORK_MARKERS};
use crate::record::Field;

/// Headings longer than this that are fully uppercase close the section.
pub const SECTION_HEADING_MIN_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Seeking,
    Capturing,
    Terminated,
}

/// Collects the first lines following a work history heading.
#[derive(Debug, Clone)]
pub struct WorkExperienceExtractor {
    /// Uppercased so matching is a plain substring test on the uppercased line.
    markers: Vec<String>,
    limit: usize,
}

impl WorkExperienceExtractor {
    #[must_use]
    pub fn new<I, S>(markers: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            markers: markers
                .into_iter()
                .map(|m| m.as_ref().to_uppercase())
                .collect(),
            limit,
        }
    }

    fn is_marker(&self, line: &str) -> bool {
        let upper = line.to_uppercase();
        self.markers.iter().any(|m| upper.contains(m.as_str()))
    }

    /// Advances the machine by one line, appending to `captured` as needed.
    pub fn step(&self, state: CaptureState, line: &str, captured: &mut Vec<String>) -> CaptureState {
        match state {
            CaptureState::Terminated => CaptureState::Terminated,
            CaptureState::Seeking => {
                if self.is_marker(line) {
                    debug!(line, "Found work experience marker");
                    CaptureState::Capturing
                } else {
                    CaptureState::Seeking
                }
            }
            CaptureState::Capturing => {
                let trimmed = line.trim();

                if self.is_marker(line) {
                    return CaptureState::Capturing;
                }
                if is_section_heading(trimmed) {
                    debug!(line = trimmed, "Work experience section closed");
                    return CaptureState::Terminated;
                }
                if !trimmed.is_empty() {
                    captured.push(trimmed.to_string());
                }
                if captured.len() >= self.limit {
                    CaptureState::Terminated
                } else {
                    CaptureState::Capturing
                }
            }
        }
    }
}

impl Default for WorkExperienceExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_WORK_MARKERS, DEFAULT_EXPERIENCE_LIMIT)
    }
}

impl FieldExtractor for WorkExperienceExtractor {
    type Output = Vec<String>;

    fn field(&self) -> Field {
        Field::WorkExperience
    }

    fn extract(&self, raw: &str) -> FieldResult<Vec<String>> {
        let mut captured = Vec::new();
        let mut state = CaptureState::Seeking;

        for line in raw.lines() {
            state = self.step(state, line, &mut captured);
            if state == CaptureState::Terminated {
                break;
            }
        }

        debug!(?captured, "Extracted work experience");
        Ok(captured)
    }
}

/// A fully uppercase line long enough to be a new section title.
pub fn is_section_heading(trimmed: &str) -> bool {
    trimmed.chars().count() > SECTION_HEADING_MIN_LEN && is_uppercase(trimmed)
}

/// At least one cased letter and no lowercase ones.
fn is_uppercase(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}
