/// Finds the most likely person name in a short text sample.
///
/// This is the seam for a named-entity model. Returning `None` is always
/// acceptable; the name extractor falls back to structural heuristics.
pub trait PersonRecognizer: Send + Sync {
    fn best_person_span(&self, sample: &str) -> Option<String>;
}

/// Recognizer that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRecognizer;

impl PersonRecognizer for NoopRecognizer {
    fn best_person_span(&self, _sample: &str) -> Option<String> {
        None
    }
}

impl<F> PersonRecognizer for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn best_person_span(&self, sample: &str) -> Option<String> {
        self(sample)
    }
}
