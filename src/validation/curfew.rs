//! Role-specific curfew rules
//!
//! Students and staff are flagged late when they arrive strictly after their
//! cutoff. Visitors are turned away when they arrive strictly before opening time.

use serde::{Deserialize, Serialize};

use crate::types::{config::defaults, EntryTime, Role};
use crate::validation::ParseError;

/// Cutoff times applied to entry attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurfewPolicy {
    /// Students entering after this are late
    pub student_cutoff: EntryTime,
    /// Staff entering after this are late
    pub staff_cutoff: EntryTime,
    /// Visitors entering before this are denied
    pub visitor_opening: EntryTime,
}

impl Default for CurfewPolicy {
    fn default() -> Self {
        Self {
            student_cutoff: EntryTime::parse(defaults::STUDENT_CUTOFF).unwrap_or_default(),
            staff_cutoff: EntryTime::parse(defaults::STAFF_CUTOFF).unwrap_or_default(),
            visitor_opening: EntryTime::parse(defaults::VISITOR_OPENING).unwrap_or_default(),
        }
    }
}

impl CurfewPolicy {
    /// Whether a student arriving at `time` is late
    pub fn is_student_late(&self, time: EntryTime) -> bool {
        time > self.student_cutoff
    }

    /// Whether a staff member arriving at `time` is late
    pub fn is_staff_late(&self, time: EntryTime) -> bool {
        time > self.staff_cutoff
    }

    /// Whether a visitor arriving at `time` must be turned away
    pub fn is_visitor_too_early(&self, time: EntryTime) -> bool {
        time < self.visitor_opening
    }

    /// Lateness for any role; visitors are never late, only early
    pub fn is_late(&self, role: Role, time: EntryTime) -> bool {
        match role {
            Role::Student => self.is_student_late(time),
            Role::Staff => self.is_staff_late(time),
            Role::Visitor => false,
        }
    }
}

/// Student lateness against the default 09:30 cutoff
pub fn is_student_late(time: &str) -> Result<bool, ParseError> {
    Ok(CurfewPolicy::default().is_student_late(EntryTime::parse(time)?))
}

/// Staff lateness against the default 08:45 cutoff
pub fn is_staff_late(time: &str) -> Result<bool, ParseError> {
    Ok(CurfewPolicy::default().is_staff_late(EntryTime::parse(time)?))
}

/// Visitor denial against the default 10:00 opening time
pub fn is_visitor_too_early(time: &str) -> Result<bool, ParseError> {
    Ok(CurfewPolicy::default().is_visitor_too_early(EntryTime::parse(time)?))
}
