//! Logical line reconstruction from positioned text fragments
//!
//! The text layer of a result document arrives as per-page streams of
//! `(text, baseline y)` fragments in extraction order, which is usually but
//! not reliably reading order. This module rebuilds visual rows from
//! vertical position jumps.
//!
//! This is a lossy heuristic: there is no access to true row/column
//! structure, so fragments that share a baseline are joined with single
//! spaces and column boundaries are gone. It is the main source of
//! ambiguity the downstream parser has to tolerate.

use serde::{Deserialize, Serialize};

/// One positioned text fragment from a document page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    /// Fragment text as extracted
    pub text: String,
    /// Baseline vertical coordinate in layout units
    pub y: f32,
}

/// Vertical jump (in layout units) treated as the start of a new visual row.
pub const LINE_BREAK_THRESHOLD: f32 = 5.0;

/// Rebuild trimmed, non-empty logical lines from per-page fragment streams.
///
/// Within a page, a fragment whose baseline differs from the previous one
/// by more than [`LINE_BREAK_THRESHOLD`] starts a new line; otherwise the
/// fragment joins the current line with a separating space. Every page end
/// forces a line break.
///
/// # Arguments
/// * `pages` - Pages in document order, each a fragment stream in
///   extraction order
///
/// # Returns
/// Logical lines in document order, trimmed, with empty lines dropped
#[must_use]
pub fn normalize_lines(pages: &[Vec<TextFragment>]) -> Vec<String> {
    let mut buffer = String::new();

    for page in pages {
        let mut last_y: Option<f32> = None;

        for fragment in page {
            if let Some(prev_y) = last_y {
                if (fragment.y - prev_y).abs() > LINE_BREAK_THRESHOLD {
                    buffer.push('\n');
                }
            }
            buffer.push_str(&fragment.text);
            buffer.push(' ');
            last_y = Some(fragment.y);
        }

        buffer.push('\n');
    }

    buffer
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
