//! GPA and CGPA computation
//!
//! All results are rendered as two-decimal fixed strings. That is a numeric
//! contract, not display formatting: callers compare and store the rounded
//! value, so rounding happens here, once, with standard nearest rounding.

use serde::{Deserialize, Serialize};

use super::grades::grade_points;
use super::models::{Course, Semester};

/// Per-semester entry in a [`GpaSummary`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterGpa {
    /// Term label of the semester
    pub term: String,
    /// Semester GPA as a two-decimal string
    pub gpa: String,
    /// Credit hours counted for this semester
    pub credits: f32,
}

/// Cumulative results for a full parse: CGPA, total credits, and the
/// per-semester breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaSummary {
    /// Cumulative GPA across all semesters
    pub cgpa: String,
    /// Total credit hours counted
    pub total_credits: f32,
    /// Per-semester GPA entries in document order
    pub semester_gpas: Vec<SemesterGpa>,
}

/// Render a grade-point value as the two-decimal contract string.
fn format_gpa(total_points: f32, total_credits: f32) -> String {
    if total_credits > 0.0 {
        format!("{:.2}", total_points / total_credits)
    } else {
        "0.00".to_string()
    }
}

/// Sum (grade points x credits, credits) over courses with credits > 0.
///
/// Zero-credit courses are excluded from both numerator and denominator.
fn weighted_totals<'a, I>(courses: I) -> (f32, f32)
where
    I: IntoIterator<Item = &'a Course>,
{
    let mut total_points = 0.0;
    let mut total_credits = 0.0;

    for course in courses {
        let credits = course.credit_hours();
        if credits > 0.0 {
            let points = course.grade.as_deref().map_or(0.0, grade_points);
            total_points += points * credits;
            total_credits += credits;
        }
    }

    (total_points, total_credits)
}

/// Compute the credit-weighted GPA for one semester's courses.
///
/// # Arguments
/// * `courses` - Course records; only those with credits > 0 count
///
/// # Returns
/// The GPA as a two-decimal string, "0.00" when no credits count
#[must_use]
pub fn semester_gpa(courses: &[Course]) -> String {
    let (points, credits) = weighted_totals(courses);
    format_gpa(points, credits)
}

/// Compute the cumulative GPA across all semesters.
///
/// The weighted average is taken over the flattened course list, so a
/// semester's weight is exactly its counted credit hours.
///
/// # Arguments
/// * `semesters` - Semesters in document order
///
/// # Returns
/// The CGPA as a two-decimal string, "0.00" when no credits count
#[must_use]
pub fn cumulative_gpa(semesters: &[Semester]) -> String {
    let (points, credits) = weighted_totals(semesters.iter().flat_map(|s| &s.courses));
    format_gpa(points, credits)
}

/// Build the full results view for a parse: CGPA, total credits, and the
/// per-semester GPA list.
#[must_use]
pub fn summarize(semesters: &[Semester]) -> GpaSummary {
    let semester_gpas = semesters
        .iter()
        .map(|sem| {
            let (points, credits) = weighted_totals(&sem.courses);
            SemesterGpa {
                term: sem.term.clone(),
                gpa: format_gpa(points, credits),
                credits,
            }
        })
        .collect();

    let (points, credits) = weighted_totals(semesters.iter().flat_map(|s| &s.courses));

    GpaSummary {
        cgpa: format_gpa(points, credits),
        total_credits: credits,
        semester_gpas,
    }
}

/// Fold a new semester GPA into previously accumulated totals.
///
/// # Arguments
/// * `current_gpa` - GPA of the semester being added
/// * `current_credits` - Credit hours of that semester
/// * `prev_points` - Accumulated grade points so far (GPA x credits)
/// * `prev_credits` - Accumulated credit hours so far
///
/// # Returns
/// The combined CGPA as a two-decimal string
#[must_use]
pub fn combine_cgpa(
    current_gpa: f32,
    current_credits: f32,
    prev_points: f32,
    prev_credits: f32,
) -> String {
    let total_points = current_gpa.mul_add(current_credits, prev_points);
    format_gpa(total_points, current_credits + prev_credits)
}

/// Compute a CGPA from per-semester (GPA, credits) summaries, without
/// course-level detail.
///
/// Entries with credits <= 0 are skipped.
#[must_use]
pub fn quick_cgpa(entries: &[(f32, f32)]) -> String {
    let mut total_points = 0.0;
    let mut total_credits = 0.0;

    for &(gpa, credits) in entries {
        if credits > 0.0 {
            total_points += gpa * credits;
            total_credits += credits;
        }
    }

    format_gpa(total_points, total_credits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(credits: &str, grade: &str) -> Course {
        let mut c = Course::new(
            String::new(),
            "Test Course".to_string(),
            credits.to_string(),
            String::new(),
        );
        c.grade = Some(grade.to_string());
        c
    }

    #[test]
    fn test_semester_gpa_weighted() {
        // (3 x 3.00 + 4 x 4.00) / 7 = 25/7 = 3.5714...
        let courses = vec![course("3", "B"), course("4.0", "A")];
        assert_eq!(semester_gpa(&courses), "3.57");
    }

    #[test]
    fn test_semester_gpa_empty() {
        assert_eq!(semester_gpa(&[]), "0.00");
    }

    #[test]
    fn test_zero_credit_courses_excluded() {
        // The zero-credit A must not raise the average
        let courses = vec![course("0", "A"), course("3", "B")];
        assert_eq!(semester_gpa(&courses), "3.00");
    }

    #[test]
    fn test_failed_course_weighs_in() {
        // F carries 0 points but its credits stay in the denominator
        let courses = vec![course("3", "A"), course("3", "F")];
        assert_eq!(semester_gpa(&courses), "2.00");
    }

    #[test]
    fn test_cumulative_gpa_flattens_semesters() {
        let mut s1 = Semester::new(1, "FALL 2023".to_string());
        s1.add_course(course("3", "A"));
        let mut s2 = Semester::new(2, "SPRING 2024".to_string());
        s2.add_course(course("3", "B"));

        assert_eq!(cumulative_gpa(&[s1, s2]), "3.50");
    }

    #[test]
    fn test_cumulative_gpa_empty() {
        assert_eq!(cumulative_gpa(&[]), "0.00");
    }

    #[test]
    fn test_summarize() {
        let mut s1 = Semester::new(1, "FALL 2023".to_string());
        s1.add_course(course("3", "B"));
        s1.add_course(course("4.0", "A"));
        let mut s2 = Semester::new(2, "SPRING 2024".to_string());
        s2.add_course(course("3", "A"));

        let summary = summarize(&[s1, s2]);

        assert_eq!(summary.semester_gpas.len(), 2);
        assert_eq!(summary.semester_gpas[0].term, "FALL 2023");
        assert_eq!(summary.semester_gpas[0].gpa, "3.57");
        assert!((summary.semester_gpas[0].credits - 7.0).abs() < f32::EPSILON);
        assert_eq!(summary.semester_gpas[1].gpa, "4.00");
        assert!((summary.total_credits - 10.0).abs() < f32::EPSILON);
        // (25 + 12) / 10
        assert_eq!(summary.cgpa, "3.70");
    }

    #[test]
    fn test_combine_cgpa() {
        // 3.50 x 15 = 52.5, plus 30 previous points over 10 previous credits
        assert_eq!(combine_cgpa(3.5, 15.0, 30.0, 10.0), "3.30");
        assert_eq!(combine_cgpa(3.5, 0.0, 0.0, 0.0), "0.00");
    }

    #[test]
    fn test_quick_cgpa() {
        assert_eq!(quick_cgpa(&[(3.5, 15.0), (3.0, 15.0)]), "3.25");
        assert_eq!(quick_cgpa(&[]), "0.00");
        // Zero-credit entries are skipped
        assert_eq!(quick_cgpa(&[(4.0, 0.0), (3.0, 15.0)]), "3.00");
    }
}
