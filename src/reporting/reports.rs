//! Read-only reports over the registry and the entry log

use tracing::debug;

use crate::events::{EntryEvent, EntryLog};
use crate::registry::{Student, StudentRegistry};
use crate::reporting::DepartmentSummary;
use crate::session::CampusResult;

/// Students returned by a top-CGPA query
pub const TOP_CGPA_LIMIT: usize = 3;

/// Query view borrowing the registry and the log
#[derive(Debug, Clone, Copy)]
pub struct Reports<'a> {
    registry: &'a StudentRegistry,
    log: &'a EntryLog,
}

impl<'a> Reports<'a> {
    /// Create a report view
    pub fn new(registry: &'a StudentRegistry, log: &'a EntryLog) -> Self {
        Self { registry, log }
    }

    /// All students in registration order
    pub fn list_students(&self) -> &'a [Student] {
        self.registry.list_all()
    }

    /// All entries in chronological order
    pub fn list_log(&self) -> &'a [EntryEvent] {
        self.log.entries()
    }

    /// Entries flagged late, in chronological order
    pub fn list_late(&self) -> Vec<&'a EntryEvent> {
        self.log.late_entries().collect()
    }

    /// Registered students per lowercased department
    pub fn department_summary(&self) -> DepartmentSummary {
        DepartmentSummary::from_students(self.registry.list_all())
    }

    /// Up to three students of `department` with the highest CGPA
    ///
    /// Department match is case-insensitive. Ties keep registration order.
    pub fn top_cgpa(&self, department: &str) -> Vec<&'a Student> {
        let key = department.to_lowercase();
        let mut matching: Vec<&Student> = self
            .registry
            .list_all()
            .iter()
            .filter(|s| s.department().to_lowercase() == key)
            .collect();

        // sort_by is stable
        matching.sort_by(|a, b| b.cgpa().total_cmp(&a.cgpa()));
        matching.truncate(TOP_CGPA_LIMIT);

        debug!(department = %key, found = matching.len(), "Top CGPA query");
        matching
    }

    /// First student registered under `id`
    pub fn find_by_id(&self, id: &str) -> CampusResult<&'a Student> {
        self.registry.find_by_id(id)
    }
}
