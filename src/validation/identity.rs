//! Identifier and name checks
//!
//! Pure functions over already-read strings. None of them trim their input.

use tracing::debug;

/// Prefix of every student registration number
pub const STUDENT_ID_PREFIX: &str = "ST";

/// Digits following the student prefix
pub const STUDENT_ID_DIGITS: usize = 6;

/// Prefix of every staff employee number
pub const STAFF_ID_PREFIX: &str = "SF";

/// Digits following the staff prefix
pub const STAFF_ID_DIGITS: usize = 5;

/// Longest run of one repeated character a name may contain
pub const MAX_REPEATED_RUN: usize = 3;

fn matches_pattern(id: &str, prefix: &str, digits: usize) -> bool {
    match id.strip_prefix(prefix) {
        Some(rest) => rest.len() == digits && rest.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Check for `ST` followed by exactly 6 digits
pub fn is_valid_student_id(id: &str) -> bool {
    matches_pattern(id, STUDENT_ID_PREFIX, STUDENT_ID_DIGITS)
}

/// Check for `SF` followed by exactly 5 digits
pub fn is_valid_staff_id(id: &str) -> bool {
    matches_pattern(id, STAFF_ID_PREFIX, STAFF_ID_DIGITS)
}

/// Check that a name is usable
///
/// A name fails when it is empty, contains any digit, or contains a run of four or
/// more identical consecutive characters. Characters are compared case-insensitively,
/// so `"Aaaab"` fails while `"Aaab"` passes.
pub fn is_valid_name(name: &str) -> bool {
    if name.is_empty() {
        debug!("Rejecting empty name");
        return false;
    }

    if name.chars().any(|c| c.is_ascii_digit()) {
        debug!(candidate = name, "Rejecting name containing a digit");
        return false;
    }

    let longest = longest_run(name);
    if longest > MAX_REPEATED_RUN {
        debug!(candidate = name, longest, "Rejecting name with repeated characters");
        return false;
    }

    true
}

fn longest_run(name: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<char> = None;

    for c in name.chars().flat_map(char::to_lowercase) {
        current = if previous == Some(c) { current + 1 } else { 1 };
        longest = longest.max(current);
        previous = Some(c);
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_id_pattern() {
        assert!(is_valid_student_id("ST123456"));
        assert!(is_valid_student_id("ST000000"));
        assert!(!is_valid_student_id("ST12345"));
        assert!(!is_valid_student_id("ST1234567"));
        assert!(!is_valid_student_id("st123456"));
        assert!(!is_valid_student_id("SF123456"));
        assert!(!is_valid_student_id("ST12345a"));
        assert!(!is_valid_student_id(" ST123456"));
        assert!(!is_valid_student_id(""));
    }

    #[test]
    fn test_staff_id_pattern() {
        assert!(is_valid_staff_id("SF12345"));
        assert!(!is_valid_staff_id("sf12345"));
        assert!(!is_valid_staff_id("SF1234"));
        assert!(!is_valid_staff_id("SF123456"));
        assert!(!is_valid_staff_id("ST12345"));
        assert!(!is_valid_staff_id("SF"));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits are not accepted as ID digits
        assert!(!is_valid_staff_id("SF١٢٣٤٥"));
    }

    #[test]
    fn test_name_rules() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("John2"));
        assert!(!is_valid_name("Aaaab"));
        assert!(is_valid_name("Aaab"));
        assert!(is_valid_name("John Smith"));
        assert!(is_valid_name("Anne-Marie O'Neil"));
    }

    #[test]
    fn test_name_repeated_run_anywhere() {
        assert!(!is_valid_name("Bobbbby"));
        assert!(!is_valid_name("Zed----"));
        assert!(is_valid_name("Bobbby"));
    }

    #[test]
    fn test_longest_run() {
        assert_eq!(longest_run("abc"), 1);
        assert_eq!(longest_run("aAb"), 2);
        assert_eq!(longest_run("xxYYy"), 3);
    }
}
