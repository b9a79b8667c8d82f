//! Heuristic transcript parser
//!
//! A line-oriented state machine that classifies each logical line and
//! incrementally builds semester records. Three pieces of state are carried
//! across lines: the committed semesters, the semester currently being
//! filled, and a partially assembled course buffered across multi-line
//! entries.
//!
//! The token heuristics here were tuned against real result-card layouts
//! and are deliberately preserved as-is: the column ordering of transcripts
//! in the wild is unverified, and "improving" a rule silently changes the
//! output for documents that already parse correctly. Malformed lines never
//! raise an error; at worst a line is dropped or a numeric field is
//! misattributed, and an unparseable document yields an empty result.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{Course, Semester};

/// Anchored season + 4-digit year at line start (e.g., "FALL 2023 ...").
static SEASON_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:fall|spring|summer|winter)\s+\d{4}\b").unwrap());

/// "semester <digits>" anywhere in the line.
static SEMESTER_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bsemester\s+\d+\b").unwrap());

/// First `<word> <4-digit-year>` substring, used for term labels.
static WORD_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z]+\s+\d{4}\b").unwrap());

/// A letter-grade token: A-F with optional +/-, the single status codes
/// P/I/W/S/U, or "EX".
static GRADE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:[a-f][+-]?|[piwsu]|ex)$").unwrap());

/// A course-code token: 2-5 uppercase letters followed by 3-8 digits, or a
/// 5-12 character uppercase-alphanumeric run.
static COURSE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Z]{2,5}\d{3,8}|[A-Z0-9]{5,12})$").unwrap());

/// A plain numeric token (integer or decimal).
static NUMERIC_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+(?:\.\d*)?$").unwrap());

/// A bare percentage token (e.g., "87.5 %"), which is summary noise.
static PERCENT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}(?:\.\d{1,2})?\s*%$").unwrap());

/// Credits parsed at or above this value are a misread column, not credit
/// hours; the course stays buffered instead of committing.
const MAX_SANE_CREDITS: f32 = 10.0;

/// A line with this many tokens or more is never absorbed as a title
/// continuation (it is likely a summary or footer row).
const MAX_CONTINUATION_TOKENS: usize = 10;

/// Stateful line-by-line transcript parser.
///
/// Feed logical lines in document order with [`push_line`], then take the
/// committed semesters with [`finish`]. Each parser instance is used for
/// exactly one document; semester identifiers are a counter scoped to the
/// instance, so re-parsing the same lines is deterministic.
///
/// [`push_line`]: TranscriptParser::push_line
/// [`finish`]: TranscriptParser::finish
#[derive(Debug, Default)]
pub struct TranscriptParser {
    semesters: Vec<Semester>,
    current: Option<Semester>,
    pending: Option<Course>,
    next_id: usize,
}

impl TranscriptParser {
    /// Create a parser with fresh state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            semesters: Vec::new(),
            current: None,
            pending: None,
            next_id: 0,
        }
    }

    /// Parse a full line sequence in one call.
    ///
    /// # Arguments
    /// * `lines` - Logical lines in document order
    ///
    /// # Returns
    /// Committed semesters in document order; empty when nothing was
    /// recognized (that is a reportable condition upstream, not an error)
    #[must_use]
    pub fn parse_lines<I, S>(lines: I) -> Vec<Semester>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parser = Self::new();
        for line in lines {
            parser.push_line(line.as_ref());
        }
        parser.finish()
    }

    /// Classify one logical line and update parser state.
    ///
    /// Rules are checked in priority order; a line matches at most one:
    /// term header, noise, then course data. Unrecognized lines are dropped
    /// silently.
    pub fn push_line(&mut self, line: &str) {
        if is_term_header(line) {
            self.start_semester(term_label(line));
            return;
        }

        if is_noise(line) {
            return;
        }

        self.push_course_line(line);
    }

    /// Finish the parse and return the committed semesters.
    ///
    /// A still-buffered course that never received a grade is discarded; a
    /// current semester is kept only if it holds at least one course.
    #[must_use]
    pub fn finish(mut self) -> Vec<Semester> {
        if let Some(current) = self.current.take() {
            if current.has_courses() {
                self.semesters.push(current);
            }
        }
        self.semesters
    }

    /// Close out the current semester (if it earned any courses) and open a
    /// new one. A buffered course never survives a term boundary.
    fn start_semester(&mut self, term: String) {
        if let Some(current) = self.current.take() {
            if current.has_courses() {
                self.semesters.push(current);
            }
        }
        self.next_id += 1;
        self.current = Some(Semester::new(self.next_id, term));
        self.pending = None;
    }

    /// Append a committed course, opening a default semester when the
    /// document never announced one.
    fn commit(&mut self, course: Course) {
        if self.current.is_none() {
            self.next_id += 1;
            self.current = Some(Semester::new(self.next_id, "Semester 1".to_string()));
        }
        if let Some(current) = self.current.as_mut() {
            current.add_course(course);
        }
        self.pending = None;
    }

    fn push_course_line(&mut self, line: &str) {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        // Grade tokens reliably trail near line end, code tokens lead, so
        // the grade search is rightmost-wins and the code search is
        // leftmost-wins. This keeps grade-letter-looking words inside
        // titles and numeric-looking title words from matching.
        let grade_idx = tokens.iter().rposition(|t| GRADE_TOKEN.is_match(t));
        let code_idx = tokens.iter().position(|t| COURSE_CODE.is_match(t));

        if let Some(code_idx) = code_idx {
            self.start_course(&tokens, code_idx, grade_idx);
        } else if let (Some(grade_idx), true) = (grade_idx, self.pending.is_some()) {
            self.complete_pending(&tokens, grade_idx);
        } else if self.pending.is_some()
            && !line.to_lowercase().contains("total")
            && tokens.len() < MAX_CONTINUATION_TOKENS
        {
            // Short grade-less line while a course is buffered: title text
            // that wrapped onto the next visual row. The token cap keeps
            // summary/footer rows from being absorbed.
            if let Some(pending) = self.pending.as_mut() {
                pending.title.push(' ');
                pending.title.push_str(tokens.join(" ").as_str());
            }
        }
        // Anything else is an unrecognized line; drop it silently.
    }

    /// Rule: a code token starts a new course row.
    fn start_course(&mut self, tokens: &[&str], code_idx: usize, grade_idx: Option<usize>) {
        let scan_end = grade_idx.unwrap_or(tokens.len());
        let numbers = trailing_numbers(tokens, scan_end, code_idx + 1);
        let (credits, marks) = assign_credits_marks(tokens, &numbers);

        let title_end = numbers
            .last()
            .copied()
            .or(grade_idx)
            .unwrap_or(tokens.len());
        let title = tokens[(code_idx + 1)..title_end.max(code_idx + 1)]
            .join(" ")
            .trim()
            .to_string();

        let mut course = Course::new(tokens[code_idx].to_string(), title, credits, marks);
        course.grade = grade_idx.map(|idx| tokens[idx].to_uppercase());

        // Commit immediately only when the row is self-contained: it has a
        // grade and its credits pass the sanity bound (a large number in
        // the credits slot means a misread column).
        let sane_credits = course
            .credits
            .parse::<f32>()
            .is_ok_and(|c| c < MAX_SANE_CREDITS);

        if course.grade.is_some() && sane_credits {
            self.commit(course);
        } else {
            self.pending = Some(course);
        }
    }

    /// Rule: a grade token without a code completes the buffered course.
    fn complete_pending(&mut self, tokens: &[&str], grade_idx: usize) {
        let numbers = trailing_numbers(tokens, grade_idx, 0);

        let Some(mut pending) = self.pending.take() else {
            return;
        };

        // Tokens before the numeric run are more wrapped title text.
        let title_end = numbers.last().copied().unwrap_or(grade_idx);
        if title_end > 0 {
            pending.title.push(' ');
            pending.title.push_str(tokens[..title_end].join(" ").as_str());
        }

        pending.grade = Some(tokens[grade_idx].to_uppercase());

        // Only a full credits/marks pair on this line replaces the buffered
        // values; a single number is ambiguous and is ignored here.
        if numbers.len() >= 2 {
            let (credits, marks) = assign_credits_marks(tokens, &numbers);
            pending.credits = credits;
            pending.marks = marks;
        }

        self.commit(pending);
    }
}

/// Does this line announce a new term?
///
/// Matches a "term:" marker anywhere, a season + year at line start, or
/// "semester N" anywhere, all case-insensitive.
fn is_term_header(line: &str) -> bool {
    line.to_lowercase().contains("term:")
        || SEASON_YEAR.is_match(line)
        || SEMESTER_NUMBER.is_match(line)
}

/// Derive a term label from a header line.
///
/// The first `<word> <year>` substring wins (uppercased); otherwise the
/// line minus any leading "term:" marker; otherwise the default label.
fn term_label(line: &str) -> String {
    if let Some(found) = WORD_YEAR.find(line) {
        return found.as_str().to_uppercase();
    }

    let trimmed = line.trim();
    // Header detection is case-insensitive, so the prefix strip must be too
    let stripped = if trimmed
        .get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("term:"))
    {
        trimmed[5..].trim()
    } else {
        trimmed
    };

    if stripped.is_empty() {
        Semester::DEFAULT_TERM.to_string()
    } else {
        stripped.to_string()
    }
}

/// Is this line table chrome or summary noise to be ignored outright?
fn is_noise(line: &str) -> bool {
    let lower = line.to_lowercase();

    // "total marks" is a column header in the one layout this was tuned
    // against, but a finance course can legitimately carry both words with
    // "management" alongside; that narrow exception is format-specific.
    let total_marks_header = lower.contains("total marks") && !lower.contains("management");

    line.contains("Sr#")
        || line.contains("Course Code")
        || total_marks_header
        || lower.starts_with("sgpa")
        || lower.starts_with("cgpa")
        || line == "Total"
        || PERCENT_TOKEN.is_match(line)
}

/// Collect up to three numeric tokens scanning backward from `end`
/// (exclusive) down to `floor`. Non-numeric tokens are skipped, not
/// stopped at, so the scan can reach past words into earlier numbers.
///
/// Indices come back in scan order: first element is the number closest to
/// the grade, last element is the earliest in the line.
fn trailing_numbers(tokens: &[&str], end: usize, floor: usize) -> Vec<usize> {
    let mut found = Vec::new();

    for idx in (floor..end).rev() {
        if !NUMERIC_TOKEN.is_match(tokens[idx]) {
            continue;
        }
        found.push(idx);
        if found.len() == 3 {
            break;
        }
    }

    found
}

/// Assign credits and marks from a backward-collected numeric run.
///
/// Rows are laid out roughly `CODE TITLE... MARKS CREDITS GRADE`, so with
/// two or more numbers the one adjacent to the grade is credits and the one
/// before it is marks (any third number, e.g. a total-marks column, is
/// ignored). A lone number is marks; credits default to "3.0".
fn assign_credits_marks(tokens: &[&str], numbers: &[usize]) -> (String, String) {
    match numbers {
        [] => ("3.0".to_string(), "0".to_string()),
        [only] => ("3.0".to_string(), tokens[*only].to_string()),
        [closest, earlier, ..] => (tokens[*closest].to_string(), tokens[*earlier].to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(lines: &[&str]) -> Vec<Semester> {
        TranscriptParser::parse_lines(lines)
    }

    #[test]
    fn test_single_line_course() {
        let semesters = parse(&["CS101 Intro to Programming 78 3.0 B+"]);

        assert_eq!(semesters.len(), 1);
        assert_eq!(semesters[0].term, "Semester 1");
        let course = &semesters[0].courses[0];
        assert_eq!(course.code, "CS101");
        assert_eq!(course.title, "Intro to Programming");
        assert_eq!(course.marks, "78");
        assert_eq!(course.credits, "3.0");
        assert_eq!(course.grade.as_deref(), Some("B+"));
    }

    #[test]
    fn test_two_line_course_completion() {
        let semesters = parse(&["CS102 Data Structures", "82 3.0 A-"]);

        assert_eq!(semesters.len(), 1);
        let course = &semesters[0].courses[0];
        assert_eq!(course.code, "CS102");
        assert_eq!(course.title, "Data Structures");
        assert_eq!(course.marks, "82");
        assert_eq!(course.credits, "3.0");
        assert_eq!(course.grade.as_deref(), Some("A-"));
    }

    #[test]
    fn test_header_then_course_then_sgpa_noise() {
        let semesters = parse(&["FALL 2023", "CS101 X 90 3 A", "SGPA: 4.00"]);

        assert_eq!(semesters.len(), 1);
        assert_eq!(semesters[0].term, "FALL 2023");
        assert_eq!(semesters[0].courses.len(), 1);
        let course = &semesters[0].courses[0];
        assert_eq!(course.title, "X");
        assert_eq!(course.grade.as_deref(), Some("A"));
        assert_eq!(course.credits, "3");
        assert_eq!(course.marks, "90");
    }

    #[test]
    fn test_header_alone_is_discarded() {
        assert!(parse(&["FALL 2023"]).is_empty());
        assert!(parse(&["Term: Spring 2024", "SUMMER 2022"]).is_empty());
    }

    #[test]
    fn test_header_variants_detected() {
        assert!(is_term_header("Semester 2"));
        assert!(is_term_header("Term: Spring 2024"));
        assert!(is_term_header("SUMMER 2022"));
        assert!(is_term_header("fall 2021 results"));
        assert!(!is_term_header("Advanced semester planning techniques"));
        assert!(!is_term_header("CS101 Intro to Programming 78 3.0 B+"));
    }

    #[test]
    fn test_term_labels() {
        assert_eq!(term_label("Term: Spring 2024"), "SPRING 2024");
        assert_eq!(term_label("FALL 2023"), "FALL 2023");
        assert_eq!(term_label("Semester 2"), "Semester 2");
        assert_eq!(term_label("Term:"), "Academic Term");
        // Prefix strip is as case-insensitive as header detection
        assert_eq!(term_label("TeRm: Midyear"), "Midyear");
        assert_eq!(term_label("TERM: Winter Session"), "Winter Session");
    }

    #[test]
    fn test_noise_lines_ignored() {
        let semesters = parse(&[
            "Sr# Course Code Course Title Total Marks",
            "CS101 Intro to Programming 78 3.0 B+",
            "Total",
            "87.5 %",
            "CGPA: 3.41",
        ]);

        assert_eq!(semesters.len(), 1);
        assert_eq!(semesters[0].courses.len(), 1);
    }

    #[test]
    fn test_total_marks_management_exception() {
        // A course titled with "management" next to "total marks" wording
        // must not be swallowed by the header filter
        assert!(is_noise("Obtained / Total Marks"));
        assert!(!is_noise("MGT301 Total Marks Management 70 3.0 B"));
    }

    #[test]
    fn test_insane_credits_not_committed() {
        // 100 in the credits slot is a misread column; the row stays
        // buffered and dies at end of input without a completing line
        let semesters = parse(&["CS101 Databases 350 100 A"]);
        assert!(semesters.is_empty());
    }

    #[test]
    fn test_title_continuation_line() {
        let semesters = parse(&[
            "CS407 Introduction to",
            "Artificial Intelligence",
            "88 4.0 A",
        ]);

        assert_eq!(semesters.len(), 1);
        let course = &semesters[0].courses[0];
        assert_eq!(course.title, "Introduction to Artificial Intelligence");
        assert_eq!(course.credits, "4.0");
        assert_eq!(course.marks, "88");
    }

    #[test]
    fn test_long_line_not_absorbed_as_title() {
        // A 10+ token grade-less line is a summary row, not wrapped title
        let semesters = parse(&[
            "CS102 Data Structures",
            "one two three four five six seven eight nine ten",
            "82 3.0 A-",
        ]);

        assert_eq!(semesters[0].courses[0].title, "Data Structures");
    }

    #[test]
    fn test_semester_boundary_drops_pending() {
        // The buffered grade-less course must not leak across a header
        let semesters = parse(&[
            "FALL 2023",
            "CS102 Data Structures",
            "SPRING 2024",
            "82 3.0 A-",
            "CS103 Algorithms 75 3.0 B+",
        ]);

        assert_eq!(semesters.len(), 1);
        assert_eq!(semesters[0].term, "SPRING 2024");
        assert_eq!(semesters[0].courses.len(), 1);
        assert_eq!(semesters[0].courses[0].code, "CS103");
    }

    #[test]
    fn test_multiple_semesters_in_order() {
        let semesters = parse(&[
            "FALL 2023",
            "CS101 Intro to Programming 78 3.0 B+",
            "SPRING 2024",
            "CS102 Data Structures 82 3.0 A-",
        ]);

        assert_eq!(semesters.len(), 2);
        assert_eq!(semesters[0].term, "FALL 2023");
        assert_eq!(semesters[1].term, "SPRING 2024");
        assert!(semesters[0].id < semesters[1].id);
    }

    #[test]
    fn test_three_trailing_numbers() {
        // Total-marks column before obtained marks: MARKS CREDITS adjacent
        // to the grade still win; the extra number is ignored
        let semesters = parse(&["CS101 Intro to Programming 100 78 3.0 B+"]);

        let course = &semesters[0].courses[0];
        assert_eq!(course.credits, "3.0");
        assert_eq!(course.marks, "78");
        assert_eq!(course.title, "Intro to Programming");
    }

    #[test]
    fn test_numeric_scan_reaches_past_title_words() {
        // A number embedded in the title is still collected by the backward
        // scan; as the third number it caps the scan and bounds the title
        let semesters = parse(&["MATH301 Algebra 2 Advanced Topics 78 3.0 B+"]);

        let course = &semesters[0].courses[0];
        assert_eq!(course.title, "Algebra");
        assert_eq!(course.credits, "3.0");
        assert_eq!(course.marks, "78");
        assert_eq!(course.grade.as_deref(), Some("B+"));
    }

    #[test]
    fn test_grade_token_is_rightmost() {
        // The roman numeral after the title must not be taken as the grade
        let semesters = parse(&["MATH201 Calculus I 91 3.0 A"]);

        let course = &semesters[0].courses[0];
        assert_eq!(course.title, "Calculus I");
        assert_eq!(course.grade.as_deref(), Some("A"));
    }

    #[test]
    fn test_grade_uppercased() {
        let semesters = parse(&["CS101 Intro 78 3.0 b+"]);
        assert_eq!(semesters[0].courses[0].grade.as_deref(), Some("B+"));
    }

    #[test]
    fn test_unrecognized_lines_dropped_silently() {
        assert!(parse(&["just some prose", "more prose here"]).is_empty());
    }

    #[test]
    fn test_idempotent_reparse() {
        let lines = [
            "FALL 2023",
            "CS101 Intro to Programming 78 3.0 B+",
            "CS102 Data Structures",
            "82 3.0 A-",
            "SGPA: 3.50",
        ];

        assert_eq!(parse(&lines), parse(&lines));
    }
}
