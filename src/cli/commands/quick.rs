//! Quick CGPA command handler

use gpa_calc::core::gpa::quick_cgpa;

/// Run the quick command: compute a CGPA from GPA:CREDITS pairs.
///
/// # Arguments
/// * `entries` - Raw CLI entries, each formatted as `GPA:CREDITS`
pub fn run(entries: &[String]) {
    if entries.is_empty() {
        eprintln!("✗ No entries provided. Expected GPA:CREDITS pairs, e.g. 3.50:15");
        return;
    }

    let mut parsed = Vec::with_capacity(entries.len());
    for entry in entries {
        match parse_entry(entry) {
            Ok(pair) => parsed.push(pair),
            Err(err) => {
                eprintln!("{err}");
                return;
            }
        }
    }

    for (idx, (entry_gpa, credits)) in parsed.iter().enumerate() {
        println!(
            "Semester {}: GPA {entry_gpa:.2} over {credits} credit hours",
            idx + 1
        );
    }
    println!("\nCGPA: {}", quick_cgpa(&parsed));
}

/// Parse one `GPA:CREDITS` entry.
fn parse_entry(entry: &str) -> Result<(f32, f32), String> {
    let (gpa_str, credits_str) = entry
        .split_once(':')
        .ok_or_else(|| format!("✗ Invalid entry '{entry}': expected GPA:CREDITS"))?;

    let entry_gpa: f32 = gpa_str
        .trim()
        .parse()
        .map_err(|_| format!("✗ Invalid GPA in '{entry}'"))?;
    let credits: f32 = credits_str
        .trim()
        .parse()
        .map_err(|_| format!("✗ Invalid credits in '{entry}'"))?;

    if !(0.0..=4.0).contains(&entry_gpa) {
        return Err(format!("✗ GPA in '{entry}' must be between 0.0 and 4.0"));
    }
    if credits < 0.0 {
        return Err(format!("✗ Credits in '{entry}' must not be negative"));
    }

    Ok((entry_gpa, credits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry_valid() {
        assert_eq!(parse_entry("3.50:15"), Ok((3.5, 15.0)));
        assert_eq!(parse_entry(" 4.0 : 16.5 "), Ok((4.0, 16.5)));
    }

    #[test]
    fn test_parse_entry_invalid() {
        assert!(parse_entry("3.50").is_err());
        assert!(parse_entry("abc:15").is_err());
        assert!(parse_entry("3.5:xyz").is_err());
        assert!(parse_entry("4.5:15").is_err());
        assert!(parse_entry("3.5:-2").is_err());
    }
}
