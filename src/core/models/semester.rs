//! Semester model

use serde::{Deserialize, Serialize};

use super::Course;

/// Represents one academic term and its committed courses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// Identifier unique within one parse (monotone counter, not a timestamp,
    /// so re-parsing the same document is deterministic)
    pub id: usize,

    /// Free-text term label (e.g., "FALL 2023")
    pub term: String,

    /// Committed courses in document order
    pub courses: Vec<Course>,
}

impl Semester {
    /// Default term label when a document gives none.
    pub const DEFAULT_TERM: &'static str = "Academic Term";

    /// Create a new, empty semester
    ///
    /// # Arguments
    /// * `id` - Identifier unique within the current parse
    /// * `term` - Term label
    #[must_use]
    pub const fn new(id: usize, term: String) -> Self {
        Self {
            id,
            term,
            courses: Vec::new(),
        }
    }

    /// Append a committed course
    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Whether this semester holds at least one committed course.
    ///
    /// Semesters without courses are discarded from parse output.
    #[must_use]
    pub const fn has_courses(&self) -> bool {
        !self.courses.is_empty()
    }
}
