//! Tests for identity and curfew validation
//!
//! Boundary checks for the ID patterns, the name rules and the curfew predicates.

use campus_access_register::*;

/// Test student and staff ID patterns
#[test]
fn test_id_patterns() {
    assert!(is_valid_student_id("ST123456"));
    assert!(!is_valid_student_id("ST12345"));
    assert!(!is_valid_student_id("ST1234567"));
    assert!(!is_valid_student_id("st123456"));
    assert!(!is_valid_student_id("SF123456"));

    assert!(is_valid_staff_id("SF12345"));
    assert!(!is_valid_staff_id("sf12345"));
    assert!(!is_valid_staff_id("SF1234"));
    assert!(!is_valid_staff_id("SF12345 "));
}

/// Test name legality rules
#[test]
fn test_name_rules() {
    assert!(!is_valid_name(""));
    assert!(!is_valid_name("John2"));
    assert!(!is_valid_name("Aaaab"));
    assert!(is_valid_name("Aaab"));
    assert!(is_valid_name("Mary Jane"));
    assert!(!is_valid_name("Bob...."));
}

/// Test the default curfew boundaries
#[test]
fn test_curfew_boundaries() {
    assert_eq!(is_student_late("09:30"), Ok(false));
    assert_eq!(is_student_late("09:31"), Ok(true));
    assert_eq!(is_student_late("10:00"), Ok(true));

    assert_eq!(is_staff_late("08:45"), Ok(false));
    assert_eq!(is_staff_late("08:46"), Ok(true));

    assert_eq!(is_visitor_too_early("09:59"), Ok(true));
    assert_eq!(is_visitor_too_early("10:00"), Ok(false));
}

/// Test that malformed times are reported rather than compared
#[test]
fn test_malformed_times() {
    assert_eq!(is_student_late("9:45"), Err(ParseError::MalformedTime("9:45".to_string())));
    assert!(is_staff_late("25:00").is_err());
    assert!(is_visitor_too_early("10.00").is_err());
}

/// Test a custom policy built from configuration
#[test]
fn test_custom_policy() {
    let config = RegisterConfig {
        student_cutoff: "08:00".to_string(),
        visitor_opening: "12:00".to_string(),
        ..Default::default()
    };
    let policy = config.curfew_policy().unwrap();

    let time = EntryTime::parse("08:01").unwrap();
    assert!(policy.is_student_late(time));
    assert!(policy.is_late(Role::Student, time));
    assert!(!policy.is_late(Role::Staff, time));
    assert!(policy.is_visitor_too_early(EntryTime::parse("11:59").unwrap()));
}
