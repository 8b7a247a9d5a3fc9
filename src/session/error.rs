//! Error types and handling
//!
//! This module contains the error type returned by registration and entry attempts.

use thiserror::Error;

use crate::types::EntryTime;
use crate::validation::{ParseError, ValidationError};

/// Errors raised while registering students or admitting entries
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CampusError {
    /// An identity or registration rule failed
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A raw value could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// No registered student has this ID
    #[error("Student not found: {0}")]
    NotFound(String),

    /// Visitor arrived before opening time
    #[error("Visitors allowed from {opening}, arrived at {time}")]
    CurfewViolation {
        /// Requested entry time
        time: EntryTime,
        /// Earliest admission time
        opening: EntryTime,
    },

    /// Role is not one of Student, Staff or Visitor
    #[error("Unknown role: {0:?}")]
    UnknownRole(String),

    /// Too many denied attempts; entry stays locked until restart
    #[error("Entry temporarily locked after {attempts} invalid attempts")]
    Locked {
        /// Denied attempts recorded so far
        attempts: u32,
    },
}

impl CampusError {
    /// Whether this denial adds to the invalid-attempt counter
    pub fn counts_as_invalid_attempt(&self) -> bool {
        !matches!(self, CampusError::Locked { .. })
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            CampusError::Validation(ValidationError::InvalidId(_)) => "Invalid ID",
            CampusError::Validation(ValidationError::InvalidName(_)) => "Invalid Name",
            CampusError::Validation(ValidationError::InvalidMarksCount { .. }) => "Invalid Marks Count",
            CampusError::Validation(ValidationError::InvalidMark(_)) => "Invalid Mark",
            CampusError::Validation(ValidationError::InvalidSemester(_)) => "Invalid Semester",
            CampusError::Parse(_) => "Malformed Time",
            CampusError::NotFound(_) => "Not Found",
            CampusError::CurfewViolation { .. } => "Curfew Violation",
            CampusError::UnknownRole(_) => "Unknown Role",
            CampusError::Locked { .. } => "Locked",
        }
    }
}

/// Result type for register operations
pub type CampusResult<T> = Result<T, CampusError>;
