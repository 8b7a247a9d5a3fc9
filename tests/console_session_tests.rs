//! Tests for scripted console sessions
//!
//! Drives the menu loop with in-memory input and checks what the operator sees.

use campus_access_register::*;
use std::io::Cursor;

fn run(session: CampusSession, script: &str) -> (CampusSession, String) {
    let mut console = RegisterConsole::new(session, Cursor::new(script.to_string()), Vec::new());
    console.run().unwrap();
    let (session, output) = console.into_parts();
    (session, String::from_utf8(output).unwrap())
}

/// Test a full session touching every menu entry
#[test]
fn test_full_session() {
    let script = "\
2\nST000001\nAlice\nCS\n3\n3\n80\n90\n70\n08:00\n\
2\nST000002\nBob\ncs\n5\n4\n95\n90\n92\n94\n08:10\n\
1\nStudent\nST000001\nAlice\n09:45\n\
1\nStaff\nSF12345\nDana\n08:40\n\
1\nVisitor\nV-1\nEve\n10:30\n\
3\n4\n5\n6\n7\nST000002\n8\nCS\n9\n";

    let (session, output) = run(CampusSession::new(), script);

    assert!(output.contains("Student added. CGPA: 3.20 | Grade: B"));
    assert!(output.contains("Student added. CGPA: 3.71 | Grade: A"));
    assert!(output.contains("Student entry logged. (LATE)"));
    assert!(output.contains("Staff logged."));
    assert!(output.contains("Visitor logged."));

    assert!(output.contains("--- STAFF ---\nID: SF12345 | Name: Dana | Role: Staff | Dept: General | Entry: 08:40"));
    assert!(output.contains("--- VISITOR ---\nID: V-1 | Name: Eve | Role: Visitor | Dept: None | Entry: 10:30"));

    assert!(output.contains("Department Summary:\ncs: 2"));
    assert!(output.contains("1. ST000002 | Bob | CGPA: 3.71 | Grade: A"));
    assert!(output.contains("2. ST000001 | Alice | CGPA: 3.20 | Grade: B"));

    assert_eq!(session.log().len(), 3);
    assert_eq!(session.statistics().students_registered, 2);
    assert_eq!(session.statistics().late_entries, 1);
}

/// Test the lockout as seen from the console
#[test]
fn test_console_lockout() {
    let script = "\
1\nGuest\nG1\nZed\n12:00\n\
1\nGuest\nG1\nZed\n12:00\n\
1\nGuest\nG1\nZed\n12:00\n\
1\nStaff\nSF12345\nDana\n08:00\n\
9\n";

    let (session, output) = run(CampusSession::new(), script);
    assert_eq!(output.matches("Entry denied: Unknown role: \"Guest\"").count(), 3);
    assert!(output.contains("Entry denied: Entry temporarily locked after 3 invalid attempts"));
    assert!(session.log().is_empty());
}

/// Test that raw-input mistakes never count as invalid attempts
#[test]
fn test_raw_input_errors_do_not_count() {
    let script = "five\n2\nST000001\nAlice\nCS\n3\n3\n80\nninety\n9\n";
    let (session, output) = run(CampusSession::new(), script);

    assert!(output.contains("Invalid choice: \"five\""));
    assert!(output.contains("Invalid mark: \"ninety\" (expected a number)"));
    assert_eq!(session.invalid_attempts(), 0);
    assert!(session.registry().is_empty());
}

/// Test that a configured session is honoured by the console
#[test]
fn test_configured_session() {
    let config = RegisterConfig { visitor_opening: "09:00".to_string(), ..Default::default() };
    let session = CampusSession::from_config(&config).unwrap();

    let (session, output) = run(session, "1\nVisitor\nV-2\nFay\n09:00\n");
    assert!(output.contains("Visitor logged."));
    assert_eq!(session.log().len(), 1);
}
