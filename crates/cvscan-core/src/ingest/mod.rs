mod email;
mod experience;
mod extractor;
mod name;
mod normalizer;
mod phone;
mod pipeline;
mod recognizer;
mod skills;
mod source;

pub use email::EmailExtractor;
pub use experience::{is_section_heading, CaptureState, WorkExperienceExtractor};
pub use extractor::{ExtractionError, ExtractionStrategy, FieldExtractor, FieldResult};
pub use name::{is_name_heading, title_case, NameExtractor, RECOGNIZER_SAMPLE_LINES};
pub use normalizer::{Normalization, TextNormalizer};
pub use phone::{clean_phone, PhoneExtractor, PhonePatternTable};
pub use pipeline::{Aggregator, BatchExtraction, ExtractedDocument, ListField, TextField};
pub use recognizer::{NoopRecognizer, PersonRecognizer};
pub use skills::SkillsExtractor;
#[cfg(feature = "pdf")]
pub use source::PdfTextSource;
pub use source::{
    AcquisitionError, AcquisitionResult, CompositeSource, DocumentFormat, PlainTextSource,
    TextSource,
};
