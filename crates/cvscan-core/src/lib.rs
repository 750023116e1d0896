//! Heuristic extraction of contact details, skills and work history from the
//! plain text of a resume.
//!
//! Each field has its own extractor with deterministic fallbacks; the
//! [`Aggregator`] runs all of them and always returns a complete
//! [`ExtractionResult`].
//!
//! ```rust,ignore
//! use cvscan_core::{Aggregator, CompositeSource};
//!
//! let aggregator = Aggregator::new();
//! let record = aggregator.extract_text(&text);
//! let document = aggregator.extract_from(&CompositeSource::default(), path);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod ingest;
pub mod record;

pub use catalog::{skill_pattern, SkillCatalog, DEFAULT_SKILLS};
pub use config::{EmailPreferences, ExtractorConfig};
pub use error::{Error, Result};
pub use ingest::{
    AcquisitionError, Aggregator, BatchExtraction, CompositeSource, ExtractedDocument,
    FieldExtractor, NoopRecognizer, PersonRecognizer, PlainTextSource, TextSource,
};
pub use record::{ExtractionResult, Field};
