//! Identity and curfew validation
//!
//! Pure, side-effect-free checks used by registration and by the entry workflow.
//!
//! # Overview
//!
//! - **Identity**: student and staff ID patterns, name legality
//! - **Curfew**: role-specific lateness and visitor opening time
//! - **Errors**: typed validation and parse failures
//!
//! # Usage Example
//!
//! ```rust
//! use campus_access_register::validation::*;
//!
//! assert!(is_valid_student_id("ST123456"));
//! assert!(!is_valid_staff_id("sf12345"));
//! assert!(!is_valid_name("Aaaab"));
//!
//! assert_eq!(is_student_late("09:31"), Ok(true));
//! assert_eq!(is_visitor_too_early("10:00"), Ok(false));
//! ```

pub mod curfew;
pub mod error;
pub mod identity;

// Re-export all public types for convenience
pub use curfew::*;
pub use error::*;
pub use identity::*;
