//! Per-department student counts

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::registry::Student;

/// Students counted under one lowercased department key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCount {
    /// Lowercased department name
    pub department: String,
    /// Number of registered students
    pub count: usize,
}

/// Department counts ordered by first occurrence in the registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    /// One row per department key
    pub rows: Vec<DepartmentCount>,
}

impl DepartmentSummary {
    /// Group students case-insensitively by department
    pub fn from_students<'a>(students: impl IntoIterator<Item = &'a Student>) -> Self {
        let mut rows: Vec<DepartmentCount> = Vec::new();

        for student in students {
            let key = student.department().to_lowercase();
            match rows.iter_mut().find(|row| row.department == key) {
                Some(row) => row.count += 1,
                None => rows.push(DepartmentCount { department: key, count: 1 }),
            }
        }

        Self { rows }
    }

    /// Count for a department, matched case-insensitively
    pub fn count_for(&self, department: &str) -> usize {
        let key = department.to_lowercase();
        self.rows.iter().find(|row| row.department == key).map_or(0, |row| row.count)
    }

    /// Whether no department was seen
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Students across all departments
    pub fn total(&self) -> usize {
        self.rows.iter().map(|row| row.count).sum()
    }
}

impl fmt::Display for DepartmentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for row in &self.rows {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{}: {}", row.department, row.count)?;
            first = false;
        }
        Ok(())
    }
}
