//! Campus Access Register
//!
//! An interactive register that tracks enrolled students, records campus entries for
//! students, staff and visitors, flags late arrivals against role-specific curfews and
//! prints simple reports.
//!
//! # Overview
//!
//! Everything lives in memory for the life of one [`CampusSession`]. Entry attempts
//! are validated (role, ID pattern, name, time of day, curfew) before they reach the
//! append-only entry log. Denied attempts are counted, and once the configured limit
//! is reached every further attempt is refused until the program restarts.
//!
//! ## Key Features
//!
//! - **Identity checks**: student (`ST` + 6 digits) and staff (`SF` + 5 digits) ID
//!   patterns, name legality
//! - **Curfews**: student and staff lateness cutoffs, visitor opening time
//! - **Academic record**: CGPA and letter grade derived from subject marks
//! - **Reports**: listings, late-only filter, department counts, top CGPA
//! - **Lockout**: entry refused after too many denied attempts
//!
//! ## Quick Start
//!
//! ```rust
//! use campus_access_register::*;
//!
//! let mut session = CampusSession::new();
//! session.register_student(NewStudent {
//!     id: "ST000001".to_string(),
//!     name: "Alice".to_string(),
//!     department: "CS".to_string(),
//!     semester: 3,
//!     marks: vec![80.0, 90.0, 70.0],
//!     entry_time: "08:00".to_string(),
//! })?;
//!
//! let outcome = session.enter_campus(&EntryRequest::new("Student", "ST000001", "Alice", "09:45"))?;
//! assert!(outcome.is_late);
//! assert_eq!(session.reports().list_late().len(), 1);
//! # Ok::<(), CampusError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, roles, grades, entry times and configuration
//! - [`validation`]: ID, name and curfew checks
//! - [`registry`]: enrolled students and their academic record
//! - [`events`]: entrants and the entry log
//! - [`reporting`]: read-only reports
//! - [`session`]: session controller, errors, statistics and logging
//! - [`console`]: the interactive menu
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │ Validation  │    │  Registry   │
//! │             │    │             │    │             │
//! │ Identifiers │◄───┤ Identity    │◄───┤ Students    │
//! │ EntryTime   │    │ Curfew      │    │ CGPA/Grade  │
//! │ Config      │    │             │    │             │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲                   ▲                   ▲
//!        │                   │                   │
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Events    │    │  Session    │    │  Console    │
//! │             │    │             │    │             │
//! │ Entrant     │◄───┤ Controller  │◄───┤ Menu loop   │
//! │ EntryLog    │    │ Statistics  │    │ Prompts     │
//! │             │    │ Reporting   │    │             │
//! └─────────────┘    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod console;
pub mod events;
pub mod registry;
pub mod reporting;
pub mod session;
pub mod types;
pub mod validation;

// Re-export commonly used types for convenience
pub use console::{ConsoleError, MenuCommand, RegisterConsole};
pub use events::{Entrant, EntryEvent, EntryLog, PersonView};
pub use registry::{NewStudent, Student, StudentRegistry};
pub use reporting::{DepartmentSummary, Reports};
pub use session::{
    CampusError, CampusResult, CampusSession, EntryOutcome, EntryRequest, LoggingConfig,
    SessionStatistics,
};
pub use types::*;
pub use validation::{
    is_staff_late, is_student_late, is_valid_name, is_valid_staff_id, is_valid_student_id,
    is_visitor_too_early, CurfewPolicy, ParseError, ValidationError,
};
