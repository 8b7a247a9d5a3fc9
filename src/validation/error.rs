//! Validation and parse errors
//!
//! Raised by the pure checks in this module and by registration.

use thiserror::Error;

/// A value failed one of the identity or registration rules
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// ID does not match the pattern required for the role
    #[error("Invalid ID: {0:?}")]
    InvalidId(String),

    /// Name is empty, contains a digit or repeats a character 4+ times in a row
    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    /// Number of subject marks is outside the accepted range
    #[error("Invalid marks count: {count} (expected {min}-{max})")]
    InvalidMarksCount {
        /// Marks supplied
        count: usize,
        /// Fewest accepted
        min: usize,
        /// Most accepted
        max: usize,
    },

    /// A mark is NaN or infinite
    #[error("Invalid mark: {0} (must be a finite number)")]
    InvalidMark(f64),

    /// Semester must be at least 1
    #[error("Invalid semester: {0} (must be 1 or greater)")]
    InvalidSemester(u32),
}

/// A raw string could not be turned into a typed value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Time is not a zero-padded 24h `HH:mm`
    #[error("Malformed time: {0:?} (expected HH:mm)")]
    MalformedTime(String),
}
