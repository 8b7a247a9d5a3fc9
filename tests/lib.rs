// Integration tests test your crate's public API. They only have access to items
// in your crate that are marked pub. See the Cargo Targets page of the Cargo Book
// for more information.
//
//   https://doc.rust-lang.org/cargo/reference/cargo-targets.html#integration-tests
//

use campus_access_register::*;

mod validation_tests;

mod console_session_tests;

#[test]
fn test_core_id_types() {
    let student = StudentId::parse("ST000042").unwrap();
    let staff = StaffId::parse("SF00042").unwrap();

    assert_eq!(student.to_string(), "ST000042");
    assert_eq!(staff.as_str(), "SF00042");
    assert!(StudentId::parse("SF00042").is_err());
    assert!(StaffId::parse("ST000042").is_err());

    // Entry IDs are unique
    let entry_id = EntryId::new();
    assert_ne!(entry_id, EntryId::new());
    assert!(entry_id.to_string().starts_with("ENTRY_"));
}

#[test]
fn test_roles_parse_case_insensitively() {
    assert_eq!("STUDENT".parse::<Role>().unwrap(), Role::Student);
    assert_eq!("staff".parse::<Role>().unwrap(), Role::Staff);
    assert_eq!("Visitor".parse::<Role>().unwrap(), Role::Visitor);
    assert!("admin".parse::<Role>().is_err());
    assert_eq!(Role::Staff.banner(), "--- STAFF ---");
}
