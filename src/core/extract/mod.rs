//! Transcript extraction pipeline
//!
//! Raw document pages flow through [`normalizer`] into logical lines, then
//! through [`parser`] into semester/course records. [`ingest`] wires the
//! pipeline to input files and maps failures onto [`error::ImportError`].

pub mod error;
pub mod ingest;
pub mod normalizer;
pub mod parser;

pub use error::ImportError;
pub use normalizer::{normalize_lines, TextFragment};
pub use parser::TranscriptParser;
