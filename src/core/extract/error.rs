//! Import failure taxonomy
//!
//! Three conditions callers handle differently: a file type the pipeline
//! does not accept, a document that parsed but produced nothing, and a
//! lower-level read/decode failure.

use thiserror::Error;

/// Why a document import produced no semesters.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file extension is not one of the supported input formats
    #[error("unsupported file type: {0} (expected .json or .txt)")]
    InvalidFileType(String),

    /// The document was read and scanned but no course data was recognized
    #[error("no course data found in document")]
    NoData,

    /// The file could not be read or its contents could not be decoded
    #[error("failed to decode document: {0}")]
    Decode(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Decode(Box::new(err))
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(Box::new(err))
    }
}
