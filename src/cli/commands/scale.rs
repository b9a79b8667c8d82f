//! Grading scale command handler

use gpa_calc::core::grades::GRADING_SCALE;

/// Print the grading scale table.
pub fn run() {
    println!("\n=== Grading Scale ===\n");
    println!("{:<6} {:<7} {:<14} {}", "Grade", "Points", "Range", "Definition");
    for row in &GRADING_SCALE {
        println!(
            "{:<6} {:<7} {:<14} {}",
            row.grade, row.points, row.range, row.definition
        );
    }
}
