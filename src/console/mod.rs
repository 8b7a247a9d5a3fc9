//! Interactive text console
//!
//! Reads operator input line by line, parses raw values and drives a
//! [`CampusSession`](crate::session::CampusSession).
//!
//! # Usage Example
//!
//! ```rust
//! use campus_access_register::console::RegisterConsole;
//! use campus_access_register::session::CampusSession;
//! use std::io::Cursor;
//!
//! let script = "1\nStaff\nSF12345\nDana\n08:30\n9\n";
//! let mut console = RegisterConsole::new(CampusSession::new(), Cursor::new(script), Vec::new());
//! console.run().unwrap();
//! assert_eq!(console.session().log().len(), 1);
//! ```

pub mod app;
pub mod error;
pub mod menu;
pub mod prompt;

// Re-export all public types for convenience
pub use app::*;
pub use error::*;
pub use menu::*;
pub use prompt::*;
