//! Student records
//!
//! This module contains the Student struct and its derived academic metrics.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{EntryTime, Grade, Role, StudentId};

/// Divisor turning a percentage average into the 0-4 CGPA scale
pub const CGPA_DIVISOR: f64 = 25.0;

/// An enrolled student with an academic record
///
/// CGPA and grade are derived once from the marks supplied at construction and are
/// never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    name: String,
    department: String,
    semester: u32,
    marks: Vec<f64>,
    cgpa: f64,
    grade: Grade,
    entry_time: EntryTime,
    is_late: bool,
    late_count: u32,
}

impl Student {
    /// Create a student and derive CGPA and grade from `marks`
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        department: impl Into<String>,
        semester: u32,
        marks: Vec<f64>,
        entry_time: EntryTime,
    ) -> Self {
        let cgpa = compute_cgpa(&marks);
        Self {
            id,
            name: name.into(),
            department: department.into(),
            semester,
            marks,
            cgpa,
            grade: Grade::from_cgpa(cgpa),
            entry_time,
            is_late: false,
            late_count: 0,
        }
    }

    /// Registration number
    pub fn id(&self) -> &StudentId {
        &self.id
    }

    /// Full name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Department as entered at registration
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Current semester
    pub fn semester(&self) -> u32 {
        self.semester
    }

    /// Subject marks supplied at registration
    pub fn marks(&self) -> &[f64] {
        &self.marks
    }

    /// Mean mark divided by 25; not clamped to 4.0
    pub fn cgpa(&self) -> f64 {
        self.cgpa
    }

    /// Letter grade for the CGPA
    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Entry time recorded at registration
    pub fn entry_time(&self) -> EntryTime {
        self.entry_time
    }

    /// Whether the student has ever entered late
    pub fn is_late(&self) -> bool {
        self.is_late
    }

    /// Number of late entries
    pub fn late_count(&self) -> u32 {
        self.late_count
    }

    /// Always [`Role::Student`]
    pub fn role(&self) -> Role {
        Role::Student
    }

    /// Record one late entry
    pub fn mark_late(&mut self) {
        self.is_late = true;
        self.late_count += 1;
    }
}

/// Average of `marks` on the 0-4 scale
pub fn compute_cgpa(marks: &[f64]) -> f64 {
    if marks.is_empty() {
        return 0.0;
    }
    let sum: f64 = marks.iter().sum();
    (sum / marks.len() as f64) / CGPA_DIVISOR
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", Role::Student.banner())?;
        writeln!(
            f,
            "ID: {} | Name: {} | Role: {} | Dept: {} | Entry: {}{}",
            self.id,
            self.name,
            Role::Student,
            self.department,
            self.entry_time,
            if self.is_late { " (LATE)" } else { "" }
        )?;
        write!(
            f,
            "Semester: {} | CGPA: {:.2} | Grade: {} | Late Entries: {}",
            self.semester, self.cgpa, self.grade, self.late_count
        )
    }
}
