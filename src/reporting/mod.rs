//! Reporting over the registry and the entry log
//!
//! Every report is a read-only linear scan: full listings, late-only filter,
//! per-department counts, per-department top CGPA and single-ID lookup.

pub mod department;
pub mod reports;

// Re-export all public types for convenience
pub use department::*;
pub use reports::*;
