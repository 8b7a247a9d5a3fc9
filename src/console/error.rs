//! Console input errors
//!
//! Problems with the raw text typed by the operator. None of these touch the
//! invalid-attempt counter.

use std::io;
use thiserror::Error;

/// Errors raised while reading or parsing operator input
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input stream closed
    #[error("End of input")]
    EndOfInput,

    /// Menu choice is not one of the listed numbers
    #[error("Invalid choice: {0:?}")]
    InvalidChoice(String),

    /// A numeric field could not be parsed
    #[error("Invalid {field}: {value:?} (expected a number)")]
    InvalidNumber {
        /// Field being read
        field: String,
        /// The rejected text
        value: String,
    },
}

impl ConsoleError {
    /// Whether the menu loop can report this and carry on
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ConsoleError::InvalidChoice(_) | ConsoleError::InvalidNumber { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable() {
        assert!(ConsoleError::InvalidChoice("x".to_string()).is_recoverable());
        assert!(ConsoleError::InvalidNumber { field: "semester".to_string(), value: "three".to_string() }
            .is_recoverable());
        assert!(!ConsoleError::EndOfInput.is_recoverable());
        assert!(!ConsoleError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed")).is_recoverable());
    }

    #[test]
    fn test_messages() {
        let err = ConsoleError::InvalidNumber { field: "semester".to_string(), value: "three".to_string() };
        assert_eq!(err.to_string(), "Invalid semester: \"three\" (expected a number)");
        assert_eq!(ConsoleError::InvalidChoice("12".to_string()).to_string(), "Invalid choice: \"12\"");
    }
}
