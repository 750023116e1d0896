use thiserror::Error;

use crate::record::Field;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid {field} pattern `{pattern}`: {source}")]
    InvalidPattern {
        field: Field,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn pattern(field: Field, pattern: &str, source: regex::Error) -> Self {
        Self::InvalidPattern {
            field,
            pattern: pattern.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
