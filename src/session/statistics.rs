//! Session statistics
//!
//! Counters collected while the register runs, printed when the session ends.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::session::CampusError;
use crate::types::Role;

/// Counters for one register session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStatistics {
    /// Students enrolled
    pub students_registered: usize,
    /// Registrations refused by validation
    pub registrations_rejected: usize,
    /// Admitted student entries
    pub student_entries: usize,
    /// Admitted staff entries
    pub staff_entries: usize,
    /// Admitted visitor entries
    pub visitor_entries: usize,
    /// Admitted entries flagged late
    pub late_entries: usize,
    /// Denied entry attempts, including those refused while locked
    pub denied_attempts: usize,
    /// Denied entry attempts by error category
    pub denials_by_category: BTreeMap<String, usize>,
}

impl SessionStatistics {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an admitted entry
    pub fn record_entry(&mut self, role: Role, is_late: bool) {
        match role {
            Role::Student => self.student_entries += 1,
            Role::Staff => self.staff_entries += 1,
            Role::Visitor => self.visitor_entries += 1,
        }
        if is_late {
            self.late_entries += 1;
        }
    }

    /// Count a denied entry attempt
    pub fn record_denial(&mut self, error: &CampusError) {
        self.denied_attempts += 1;
        *self.denials_by_category.entry(error.category().to_string()).or_insert(0) += 1;
    }

    /// Count a registration
    pub fn record_registration(&mut self, accepted: bool) {
        if accepted {
            self.students_registered += 1;
        } else {
            self.registrations_rejected += 1;
        }
    }

    /// Admitted entries across all roles
    pub fn total_entries(&self) -> usize {
        self.student_entries + self.staff_entries + self.visitor_entries
    }

    /// Entry attempts, admitted or denied
    pub fn total_attempts(&self) -> usize {
        self.total_entries() + self.denied_attempts
    }

    /// Share of admitted entries flagged late, in percent
    pub fn late_percentage(&self) -> f64 {
        percentage(self.late_entries, self.total_entries())
    }

    /// Share of attempts that were denied, in percent
    pub fn denial_percentage(&self) -> f64 {
        percentage(self.denied_attempts, self.total_attempts())
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

impl fmt::Display for SessionStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Session Summary")?;
        writeln!(f, "===============")?;
        writeln!(
            f,
            "Students Registered: {} ({} rejected)",
            self.students_registered, self.registrations_rejected
        )?;
        writeln!(f, "Entries Logged: {}", self.total_entries())?;
        writeln!(f, "  Students: {}", self.student_entries)?;
        writeln!(f, "  Staff: {}", self.staff_entries)?;
        writeln!(f, "  Visitors: {}", self.visitor_entries)?;
        writeln!(f, "Late Entries: {} ({:.1}%)", self.late_entries, self.late_percentage())?;
        write!(f, "Denied Attempts: {} ({:.1}%)", self.denied_attempts, self.denial_percentage())?;
        for (category, count) in &self.denials_by_category {
            write!(f, "\n  {}: {}", category, count)?;
        }
        Ok(())
    }
}
