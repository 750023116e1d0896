use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

use super::email::EmailExtractor;
use super::experience::WorkExperienceExtractor;
use super::extractor::FieldExtractor;
use super::name::NameExtractor;
use super::phone::{PhoneExtractor, PhonePatternTable};
use super::recognizer::PersonRecognizer;
use super::skills::SkillsExtractor;
use super::source::TextSource;
use crate::catalog::SkillCatalog;
use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::record::ExtractionResult;

pub type TextField = Box<dyn FieldExtractor<Output = String>>;
pub type ListField = Box<dyn FieldExtractor<Output = Vec<String>>>;

/// Runs the five field extractors over one document and assembles the record.
///
/// Extractor failures never escape: the affected field keeps its default and
/// a warning is logged. The aggregator holds no per-document state and can
/// be shared across threads.
pub struct Aggregator {
    name: TextField,
    email: TextField,
    phone: TextField,
    skills: ListField,
    experience: ListField,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: Box::new(NameExtractor::default()),
            email: Box::new(EmailExtractor::default()),
            phone: Box::new(PhoneExtractor::default()),
            skills: Box::new(SkillsExtractor::default()),
            experience: Box::new(WorkExperienceExtractor::default()),
        }
    }

    /// Compiles every table in `config`. Bad patterns are reported here,
    /// before any document is touched.
    pub fn from_config(config: &ExtractorConfig) -> Result<Self> {
        config.validate()?;

        let phone_table = PhonePatternTable::new(&config.phone_patterns)?;
        let catalog = match &config.skills {
            Some(skills) => SkillCatalog::new(skills)?,
            None => SkillCatalog::builtin().clone(),
        };

        Ok(Self {
            name: Box::new(NameExtractor::default()),
            email: Box::new(EmailExtractor::new(config.email.clone())),
            phone: Box::new(PhoneExtractor::new(phone_table)),
            skills: Box::new(SkillsExtractor::new(catalog)),
            experience: Box::new(WorkExperienceExtractor::new(
                &config.work_markers,
                config.experience_limit,
            )),
        })
    }

    #[must_use]
    pub fn with_recognizer(mut self, recognizer: Arc<dyn PersonRecognizer>) -> Self {
        self.name = Box::new(NameExtractor::new(recognizer));
        self
    }

    #[must_use]
    pub fn with_name_extractor(mut self, extractor: TextField) -> Self {
        self.name = extractor;
        self
    }

    #[must_use]
    pub fn with_email_extractor(mut self, extractor: TextField) -> Self {
        self.email = extractor;
        self
    }

    #[must_use]
    pub fn with_phone_extractor(mut self, extractor: TextField) -> Self {
        self.phone = extractor;
        self
    }

    #[must_use]
    pub fn with_skills_extractor(mut self, extractor: ListField) -> Self {
        self.skills = extractor;
        self
    }

    #[must_use]
    pub fn with_experience_extractor(mut self, extractor: ListField) -> Self {
        self.experience = extractor;
        self
    }

    /// Extracts every field from raw document text.
    ///
    /// Blank text means acquisition failed upstream; the default record is
    /// returned without running any extractor.
    pub fn extract_text(&self, raw: &str) -> ExtractionResult {
        if raw.trim().is_empty() {
            warn!("No text to extract from");
            return ExtractionResult::default();
        }

        info!(chars = raw.chars().count(), "Starting resume extraction");

        let result = ExtractionResult {
            name: run_field(self.name.as_ref(), raw),
            email: run_field(self.email.as_ref(), raw),
            phone: run_field(self.phone.as_ref(), raw),
            skills: run_field(self.skills.as_ref(), raw),
            work_experience: run_field(self.experience.as_ref(), raw),
        };

        info!(
            populated = result.populated_fields(),
            skills = result.skills.len(),
            "Extraction complete"
        );
        result
    }

    /// Acquires the document at `path` and extracts from it.
    ///
    /// An unreadable document yields the default record, with the reason
    /// recorded in [`ExtractedDocument::acquisition_error`].
    pub fn extract_from(&self, source: &dyn TextSource, path: &Path) -> ExtractedDocument {
        let start = Instant::now();
        let name = path.display().to_string();

        let (data, acquisition_error) = match source.acquire(path) {
            Ok(text) => (self.extract_text(&text), None),
            Err(e) => {
                error!(source = name.as_str(), error = %e, "Text acquisition failed");
                (ExtractionResult::default(), Some(e.to_string()))
            }
        };

        ExtractedDocument {
            source: name,
            data,
            acquisition_error,
            extracted_at: Utc::now(),
            duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub fn extract_paths<P: AsRef<Path>>(
        &self,
        source: &dyn TextSource,
        paths: &[P],
    ) -> BatchExtraction {
        let mut batch = BatchExtraction::new();
        for path in paths {
            batch.add(self.extract_from(source, path.as_ref()));
        }
        batch
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

fn run_field<T: Default>(extractor: &dyn FieldExtractor<Output = T>, raw: &str) -> T {
    match extractor.extract(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(field = %extractor.field(), error = %e, "Extractor failed, using default");
            T::default()
        }
    }
}

/// Outcome for one source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub source: String,
    pub data: ExtractionResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition_error: Option<String>,
    pub extracted_at: DateTime<Utc>,
    #[serde(default)]
    pub duration_ms: u64,
}

impl ExtractedDocument {
    pub fn is_readable(&self) -> bool {
        self.acquisition_error.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchExtraction {
    pub documents: Vec<ExtractedDocument>,
}

impl BatchExtraction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, document: ExtractedDocument) {
        self.documents.push(document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.documents.iter().filter(|d| d.is_readable()).count()
    }

    pub fn unreadable(&self) -> usize {
        self.len() - self.succeeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ingest::extractor::{ExtractionError, FieldResult};
    use crate::ingest::source::PlainTextSource;
    use crate::record::Field;
    use std::io::Write;

    const RESUME: &str = "JOHN SMITH
Software Engineer
john.doe@gmail.com | jdoe@randomcorp.com
Call +1-234-567-8900 or 555-123-4567

Skills: Python, ReactJS, Node.js, Docker

EXPERIENCE
Senior Engineer, Acme Corp
Built services in Python
Led migration to Kubernetes
Mentored four engineers
Engineer, Initech
Intern, Globex
Volunteer, Food Bank
EDUCATION
State University";

    struct FailingExtractor(Field);

    impl FieldExtractor for FailingExtractor {
        type Output = String;

        fn field(&self) -> Field {
            self.0
        }

        fn extract(&self, _raw: &str) -> FieldResult<String> {
            Err(ExtractionError::Failed("boom".into()))
        }
    }

    #[test]
    fn test_full_resume() {
        let result = Aggregator::new().extract_text(RESUME);

        assert_eq!(result.name, "John Smith");
        assert_eq!(result.email, "john.doe@gmail.com");
        assert_eq!(result.phone, "+12345678900");
        assert_eq!(
            result.skills,
            vec!["Docker", "Kubernetes", "Node.js", "Python", "React"]
        );
        assert_eq!(
            result.work_experience,
            vec![
                "Senior Engineer, Acme Corp",
                "Built services in Python",
                "Led migration to Kubernetes",
                "Mentored four engineers",
                "Engineer, Initech",
            ]
        );
    }

    #[test]
    fn test_empty_text_yields_defaults() {
        let aggregator = Aggregator::new()
            .with_name_extractor(Box::new(FailingExtractor(Field::Name)));

        assert_eq!(aggregator.extract_text(""), ExtractionResult::default());
        assert_eq!(aggregator.extract_text(" \n\t"), ExtractionResult::default());
    }

    #[test]
    fn test_failing_extractor_defaults_only_its_field() {
        let aggregator = Aggregator::new()
            .with_email_extractor(Box::new(FailingExtractor(Field::Email)));

        let result = aggregator.extract_text(RESUME);
        assert_eq!(result.email, "");
        assert_eq!(result.name, "John Smith");
        assert_eq!(result.phone, "+12345678900");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let aggregator = Aggregator::new();
        assert_eq!(aggregator.extract_text(RESUME), aggregator.extract_text(RESUME));
    }

    #[test]
    fn test_recognizer_is_used() {
        let aggregator =
            Aggregator::new().with_recognizer(Arc::new(|_: &str| Some("Johnny Smith".to_string())));
        assert_eq!(aggregator.extract_text(RESUME).name, "Johnny Smith");
    }

    #[test]
    fn test_from_config() {
        let config = ExtractorConfig {
            experience_limit: 2,
            skills: Some(vec!["Docker".into(), "Rust".into()]),
            ..ExtractorConfig::default()
        };

        let result = Aggregator::from_config(&config).unwrap().extract_text(RESUME);
        assert_eq!(result.skills, vec!["Docker"]);
        assert_eq!(result.work_experience.len(), 2);
    }

    #[test]
    fn test_from_config_rejects_bad_pattern() {
        let config = ExtractorConfig {
            phone_patterns: vec![r"(\d{3}".into()],
            ..ExtractorConfig::default()
        };

        let result = Aggregator::from_config(&config);
        assert!(matches!(
            result,
            Err(Error::InvalidPattern { field: Field::Phone, .. })
        ));
    }

    #[test]
    fn test_shared_across_threads() {
        let aggregator = Aggregator::new();
        let expected = aggregator.extract_text(RESUME);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| aggregator.extract_text(RESUME)))
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_extract_paths() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("resume.txt");
        let blank = dir.path().join("blank.txt");
        let other = dir.path().join("resume.docx");

        std::fs::File::create(&good)
            .unwrap()
            .write_all(RESUME.as_bytes())
            .unwrap();
        std::fs::File::create(&blank).unwrap();
        std::fs::File::create(&other).unwrap();

        let batch = Aggregator::new().extract_paths(&PlainTextSource, &[&good, &blank, &other]);

        assert_eq!(batch.len(), 3);
        assert_eq!(batch.succeeded(), 1);
        assert_eq!(batch.unreadable(), 2);
        assert_eq!(batch.documents[0].data.name, "John Smith");
        assert!(batch.documents[1].data.is_empty());
        assert!(batch.documents[1].acquisition_error.is_some());
    }

    #[test]
    fn test_document_serialization() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let doc = Aggregator::new().extract_from(&PlainTextSource, &path);
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["data"]["skills"], serde_json::json!([]));
        assert!(json["acquisition_error"].is_string());
        assert!(json["extracted_at"].is_string());
    }
}
