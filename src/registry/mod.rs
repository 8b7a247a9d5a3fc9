//! Student registry
//!
//! Enrolled students, their academic record and the lookups over them.
//!
//! # Usage Example
//!
//! ```rust
//! use campus_access_register::registry::*;
//!
//! let mut registry = StudentRegistry::new();
//! registry.register_student(NewStudent {
//!     id: "ST000001".to_string(),
//!     name: "Alice".to_string(),
//!     department: "CS".to_string(),
//!     semester: 3,
//!     marks: vec![80.0, 90.0, 70.0],
//!     entry_time: "08:30".to_string(),
//! }).unwrap();
//!
//! let alice = registry.find_by_id("ST000001").unwrap();
//! assert_eq!(alice.grade().to_string(), "B");
//! ```

pub mod register;
pub mod student;

// Re-export all public types for convenience
pub use register::{NewStudent, StudentHandle, StudentRegistry};
pub use student::{compute_cgpa, Student, CGPA_DIVISOR};
