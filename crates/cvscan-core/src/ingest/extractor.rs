use thiserror::Error;

use crate::record::Field;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Extraction failed: {0}")]
    Failed(String),
}

pub type FieldResult<T> = Result<T, ExtractionError>;

/// Which tier of a fallback chain produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// External named-entity recognizer.
    NerModel,
    /// Structural guess such as an all-caps heading.
    Heuristic,
    /// First non-empty line.
    Fallback,
}

/// Maps text to one field of the resume record.
///
/// Implementations receive the raw text and apply whatever normalization
/// their patterns need. They must not hold mutable state across calls.
pub trait FieldExtractor: Send + Sync {
    type Output: Default;

    fn field(&self) -> Field;

    fn extract(&self, raw: &str) -> FieldResult<Self::Output>;
}
