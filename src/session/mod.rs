//! Register session control
//!
//! This module contains the session controller, error handling, statistics
//! collection and logging setup.
//!
//! # Overview
//!
//! - **CampusSession**: owns registry, log and the invalid-attempt counter
//! - **CampusError**: typed denial and validation errors
//! - **SessionStatistics**: counters printed when the session ends
//! - **LoggingConfig**: tracing subscriber setup
//!
//! # Usage Example
//!
//! ```rust
//! use campus_access_register::session::*;
//!
//! let mut session = CampusSession::new();
//! let outcome = session
//!     .enter_campus(&EntryRequest::new("Staff", "SF12345", "Dana", "08:50"))
//!     .unwrap();
//! assert!(outcome.is_late);
//!
//! let denied = session.enter_campus(&EntryRequest::new("Visitor", "V1", "Eve", "09:00"));
//! assert!(matches!(denied, Err(CampusError::CurfewViolation { .. })));
//! assert_eq!(session.invalid_attempts(), 1);
//! ```

pub mod controller;
pub mod error;
pub mod logging;
pub mod statistics;

// Re-export all public types for convenience
pub use controller::*;
pub use error::*;
pub use logging::*;
pub use statistics::*;
