//! Course model

use serde::{Deserialize, Serialize};

/// Represents one course entry on a transcript
///
/// Credits and marks are stored as the raw token text the parser extracted
/// (e.g., "3.0" vs "3"); numeric interpretation happens in the GPA engine,
/// where unparseable values count as 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course code (e.g., "CS101"); may be empty for manually entered rows
    pub code: String,

    /// Course title (e.g., "Intro to Programming")
    pub title: String,

    /// Credit hours as extracted text (can be fractional)
    pub credits: String,

    /// Percentage marks as extracted text; empty when absent
    pub marks: String,

    /// Letter grade (e.g., "B+"); `None` until the course is complete
    pub grade: Option<String>,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `code` - Course code, possibly empty
    /// * `title` - Course title
    /// * `credits` - Credit hours text
    /// * `marks` - Percentage marks text
    #[must_use]
    pub const fn new(code: String, title: String, credits: String, marks: String) -> Self {
        Self {
            code,
            title,
            credits,
            marks,
            grade: None,
        }
    }

    /// Whether this course carries a letter grade.
    ///
    /// Only complete courses may be committed to a semester.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.grade.as_ref().is_some_and(|g| !g.is_empty())
    }

    /// Credit hours as a number; 0.0 when the text does not parse.
    #[must_use]
    pub fn credit_hours(&self) -> f32 {
        self.credits.trim().parse().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(
            "CS101".to_string(),
            "Intro to Programming".to_string(),
            "3.0".to_string(),
            "78".to_string(),
        );

        assert_eq!(course.code, "CS101");
        assert_eq!(course.title, "Intro to Programming");
        assert_eq!(course.credits, "3.0");
        assert_eq!(course.marks, "78");
        assert!(course.grade.is_none());
        assert!(!course.is_complete());
    }

    #[test]
    fn test_course_complete_with_grade() {
        let mut course = Course::new(
            "CS101".to_string(),
            "Intro to Programming".to_string(),
            "3.0".to_string(),
            "78".to_string(),
        );

        course.grade = Some("B+".to_string());
        assert!(course.is_complete());

        course.grade = Some(String::new());
        assert!(!course.is_complete());
    }

    #[test]
    fn test_credit_hours_parsing() {
        let mut course = Course::new(String::new(), String::new(), "4".to_string(), String::new());
        assert!((course.credit_hours() - 4.0).abs() < f32::EPSILON);

        course.credits = "1.5".to_string();
        assert!((course.credit_hours() - 1.5).abs() < f32::EPSILON);

        course.credits = "n/a".to_string();
        assert!((course.credit_hours() - 0.0).abs() < f32::EPSILON);
    }
}
