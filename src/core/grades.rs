//! Letter-grade lookup tables and percentage conversion
//!
//! The grade-point map and the percentage bands are fixed institutional
//! data; they are compiled in as read-only tables and never mutated at
//! runtime.

/// Grade point value for each letter grade, best to worst.
pub const GRADE_POINTS: [(&str, f32); 11] = [
    ("A", 4.00),
    ("A-", 3.67),
    ("B+", 3.33),
    ("B", 3.00),
    ("B-", 2.67),
    ("C+", 2.33),
    ("C", 2.00),
    ("C-", 1.67),
    ("D+", 1.33),
    ("D", 1.00),
    ("F", 0.00),
];

/// Percentage bands mapped to letter grades, descending by inclusive
/// lower bound.
pub const PERCENTAGE_BANDS: [(f32, &str); 10] = [
    (85.0, "A"),
    (80.0, "A-"),
    (75.0, "B+"),
    (71.0, "B"),
    (68.0, "B-"),
    (64.0, "C+"),
    (61.0, "C"),
    (58.0, "C-"),
    (54.0, "D+"),
    (50.0, "D"),
];

/// One row of the grading scale as published by the institution.
#[derive(Debug, Clone, Copy)]
pub struct ScaleRow {
    /// Letter grade
    pub grade: &'static str,
    /// Grade points as a display string
    pub points: &'static str,
    /// Percentage range for this grade
    pub range: &'static str,
    /// Qualitative definition
    pub definition: &'static str,
}

/// The full grading scale table, for display purposes.
pub const GRADING_SCALE: [ScaleRow; 11] = [
    ScaleRow { grade: "A", points: "4.00", range: "85% to 100%", definition: "Excellent" },
    ScaleRow { grade: "A-", points: "3.67", range: "80% to 84%", definition: "Very Good" },
    ScaleRow { grade: "B+", points: "3.33", range: "75% to 79%", definition: "Good" },
    ScaleRow { grade: "B", points: "3.00", range: "71% to 74%", definition: "Average" },
    ScaleRow { grade: "B-", points: "2.67", range: "68% to 70%", definition: "Satisfactory" },
    ScaleRow { grade: "C+", points: "2.33", range: "64% to 67%", definition: "Fair" },
    ScaleRow { grade: "C", points: "2.00", range: "61% to 63%", definition: "Passing" },
    ScaleRow { grade: "C-", points: "1.67", range: "58% to 60%", definition: "Conditional Pass" },
    ScaleRow { grade: "D+", points: "1.33", range: "54% to 57%", definition: "Marginal Pass" },
    ScaleRow { grade: "D", points: "1.00", range: "50% to 53%", definition: "Failing" },
    ScaleRow { grade: "F", points: "0.00", range: "0% to 49%", definition: "Fail" },
];

/// Look up the grade point value for a letter grade.
///
/// # Arguments
/// * `grade` - Letter grade (e.g., "A-", "B+"); matched case-sensitively
///   against the canonical uppercase spellings
///
/// # Returns
/// The grade point value, or 0.0 for unknown or empty grades
#[must_use]
pub fn grade_points(grade: &str) -> f32 {
    GRADE_POINTS
        .iter()
        .find(|(g, _)| *g == grade)
        .map_or(0.0, |(_, p)| *p)
}

/// Convert percentage marks to a letter grade using the institutional bands.
///
/// # Arguments
/// * `percentage` - Marks in the 0-100 range
///
/// # Returns
/// The letter grade whose inclusive lower bound the percentage meets,
/// or "F" below every band
#[must_use]
pub fn grade_from_percentage(percentage: f32) -> &'static str {
    PERCENTAGE_BANDS
        .iter()
        .find(|(bound, _)| percentage >= *bound)
        .map_or("F", |(_, grade)| grade)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_points_known_grades() {
        assert!((grade_points("A") - 4.0).abs() < f32::EPSILON);
        assert!((grade_points("A-") - 3.67).abs() < f32::EPSILON);
        assert!((grade_points("B+") - 3.33).abs() < f32::EPSILON);
        assert!((grade_points("F") - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_grade_points_unknown_grade() {
        assert!((grade_points("") - 0.0).abs() < f32::EPSILON);
        assert!((grade_points("Z") - 0.0).abs() < f32::EPSILON);
        // Lowercase is not canonical
        assert!((grade_points("a") - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_grade_from_percentage_boundaries() {
        assert_eq!(grade_from_percentage(85.0), "A");
        assert_eq!(grade_from_percentage(84.9), "A-");
        assert_eq!(grade_from_percentage(80.0), "A-");
        assert_eq!(grade_from_percentage(75.0), "B+");
        assert_eq!(grade_from_percentage(71.0), "B");
        assert_eq!(grade_from_percentage(68.0), "B-");
        assert_eq!(grade_from_percentage(64.0), "C+");
        assert_eq!(grade_from_percentage(61.0), "C");
        assert_eq!(grade_from_percentage(58.0), "C-");
        assert_eq!(grade_from_percentage(54.0), "D+");
        assert_eq!(grade_from_percentage(50.0), "D");
        assert_eq!(grade_from_percentage(49.0), "F");
        assert_eq!(grade_from_percentage(0.0), "F");
    }

    #[test]
    fn test_grading_scale_matches_point_table() {
        for row in &GRADING_SCALE {
            let points: f32 = row.points.parse().expect("scale points parse");
            assert!(
                (points - grade_points(row.grade)).abs() < f32::EPSILON,
                "scale row {} disagrees with point table",
                row.grade
            );
        }
    }
}
