//! Entry events and the entry log
//!
//! # Overview
//!
//! - **Entrant**: role-tagged subject of an entry (student handle, staff, visitor)
//! - **PersonView**: borrowed identity shared by all roles for display
//! - **EntryLog**: append-only chronological record of admitted entries

pub mod entrant;
pub mod entry_log;

// Re-export all public types for convenience
pub use entrant::*;
pub use entry_log::*;
