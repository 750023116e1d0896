use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Encoding error: {0}")]
    Encoding(String),
    #[error("PDF extraction failed: {0}")]
    Pdf(String),
    #[error("No text extracted")]
    Empty,
}

pub type AcquisitionResult<T> = Result<T, AcquisitionError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    PlainText,
    Markdown,
    Pdf,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "txt" | "text" => Some(Self::PlainText),
            "md" | "markdown" => Some(Self::Markdown),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> AcquisitionResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| AcquisitionError::UnsupportedFormat("no extension".into()))?;

        Self::from_extension(ext).ok_or_else(|| AcquisitionError::UnsupportedFormat(ext.into()))
    }
}

/// Turns a document into raw text.
///
/// Document conversion lives outside the extractors; this is the boundary.
/// Text that is empty after trimming is reported as [`AcquisitionError::Empty`].
pub trait TextSource: Send + Sync {
    fn supported_formats(&self) -> &[DocumentFormat];

    fn can_read(&self, format: DocumentFormat) -> bool {
        self.supported_formats().contains(&format)
    }

    fn read_bytes(&self, data: &[u8], format: DocumentFormat) -> AcquisitionResult<String>;

    fn acquire(&self, path: &Path) -> AcquisitionResult<String> {
        let format = DocumentFormat::from_path(path)?;

        if !self.can_read(format) {
            return Err(AcquisitionError::UnsupportedFormat(format!("{format:?}")));
        }

        let data = std::fs::read(path)?;
        let text = self.read_bytes(&data, format)?;

        if text.trim().is_empty() {
            return Err(AcquisitionError::Empty);
        }
        Ok(text)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::PlainText, DocumentFormat::Markdown]
    }

    fn read_bytes(&self, data: &[u8], _format: DocumentFormat) -> AcquisitionResult<String> {
        String::from_utf8(data.to_vec()).map_err(|e| AcquisitionError::Encoding(e.to_string()))
    }
}

#[cfg(feature = "pdf")]
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextSource;

#[cfg(feature = "pdf")]
impl TextSource for PdfTextSource {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::Pdf]
    }

    fn read_bytes(&self, data: &[u8], _format: DocumentFormat) -> AcquisitionResult<String> {
        pdf_extract::extract_text_from_mem(data).map_err(|e| AcquisitionError::Pdf(e.to_string()))
    }
}

/// Routes each document to the first source that reads its format.
pub struct CompositeSource {
    sources: Vec<Box<dyn TextSource>>,
}

impl CompositeSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: Box<dyn TextSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn add_source(&mut self, source: Box<dyn TextSource>) {
        self.sources.push(source);
    }

    fn find_source(&self, format: DocumentFormat) -> Option<&dyn TextSource> {
        self.sources
            .iter()
            .find(|s| s.can_read(format))
            .map(|s| s.as_ref())
    }
}

impl Default for CompositeSource {
    fn default() -> Self {
        let composite = Self::new().with_source(Box::new(PlainTextSource));
        #[cfg(feature = "pdf")]
        let composite = composite.with_source(Box::new(PdfTextSource));
        composite
    }
}

impl TextSource for CompositeSource {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[
            DocumentFormat::PlainText,
            DocumentFormat::Markdown,
            DocumentFormat::Pdf,
        ]
    }

    fn can_read(&self, format: DocumentFormat) -> bool {
        self.find_source(format).is_some()
    }

    fn read_bytes(&self, data: &[u8], format: DocumentFormat) -> AcquisitionResult<String> {
        let source = self
            .find_source(format)
            .ok_or_else(|| AcquisitionError::UnsupportedFormat(format!("{format:?}")))?;

        source.read_bytes(data, format)
    }
}
