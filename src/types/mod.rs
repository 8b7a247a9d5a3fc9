//! Core types and identifiers for the campus access register
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the register.
//!
//! # Overview
//!
//! - **Identifiers**: pattern-checked student and staff IDs, UUID-based entry IDs
//! - **Enums**: roles and letter grades
//! - **EntryTime**: strict `HH:mm` time of day
//! - **Configuration**: curfew cutoffs and limits with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use campus_access_register::types::*;
//!
//! let student = StudentId::parse("ST123456").unwrap();
//! let time = EntryTime::parse("09:45").unwrap();
//! let role: Role = "visitor".parse().unwrap();
//!
//! let config = RegisterConfig {
//!     max_invalid_attempts: 5,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! # let _ = (student, time, role);
//! ```

pub mod config;
pub mod entry_time;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use entry_time::*;
pub use enums::*;
pub use identifiers::*;
