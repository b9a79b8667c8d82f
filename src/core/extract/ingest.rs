//! Document ingestion
//!
//! Dispatches an input file to the right front end by extension, runs the
//! extraction pipeline, and maps failures onto [`ImportError`]. Two input
//! formats are accepted:
//!
//! * `.json` - a positioned-fragment dump: an array of pages, each an array
//!   of `{ "text", "y" }` objects, fed through the line normalizer
//! * `.txt` - pre-extracted plain text, one logical line per text line

use std::fs;
use std::path::Path;

use crate::core::models::Semester;

use super::error::ImportError;
use super::normalizer::{normalize_lines, TextFragment};
use super::parser::TranscriptParser;

/// Read an input file and rebuild its logical lines.
///
/// # Arguments
/// * `path` - Input file; the extension selects the front end
///
/// # Errors
/// [`ImportError::InvalidFileType`] for unsupported extensions,
/// [`ImportError::Decode`] when the file cannot be read or parsed
pub fn load_lines(path: &Path) -> Result<Vec<String>, ImportError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "json" => {
            let raw = fs::read_to_string(path)?;
            let pages: Vec<Vec<TextFragment>> = serde_json::from_str(&raw)?;
            crate::debug!(
                "Loaded {} page(s) of fragments from {}",
                pages.len(),
                path.display()
            );
            Ok(normalize_lines(&pages))
        }
        "txt" => {
            let raw = fs::read_to_string(path)?;
            Ok(raw
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(ToString::to_string)
                .collect())
        }
        other => Err(ImportError::InvalidFileType(other.to_string())),
    }
}

/// Import a document end to end: load, normalize, parse.
///
/// # Arguments
/// * `path` - Input file (`.json` fragment dump or `.txt` plain text)
///
/// # Errors
/// Everything [`load_lines`] reports, plus [`ImportError::NoData`] when the
/// document was read but no course data was recognized
pub fn import_document(path: &Path) -> Result<Vec<Semester>, ImportError> {
    let lines = load_lines(path)?;
    crate::debug!("Parsing {} logical line(s)", lines.len());

    let semesters = TranscriptParser::parse_lines(&lines);
    if semesters.is_empty() {
        return Err(ImportError::NoData);
    }

    crate::info!(
        "Imported {} semester(s), {} course(s)",
        semesters.len(),
        semesters.iter().map(|s| s.courses.len()).sum::<usize>()
    );
    Ok(semesters)
}
