//! Student registry
//!
//! This module contains the StudentRegistry, the ordered list of enrolled students.
//! Duplicate IDs are accepted; lookups return the first match in insertion order.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::registry::Student;
use crate::session::CampusError;
use crate::types::{config::defaults, EntryTime, StudentId};
use crate::validation::{is_valid_name, ValidationError};

/// Position of a student in the registry
///
/// The registry is append-only, so a handle stays valid for the life of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentHandle(usize);

impl StudentHandle {
    /// Index into the registry
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Raw registration details as read from the operator
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    /// Registration number, expected `ST` + 6 digits
    pub id: String,
    /// Full name
    pub name: String,
    /// Department
    pub department: String,
    /// Current semester, 1 or greater
    pub semester: u32,
    /// Subject marks
    pub marks: Vec<f64>,
    /// Entry time as `HH:mm`
    pub entry_time: String,
}

/// Ordered collection of enrolled students
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRegistry {
    students: Vec<Student>,
    min_marks: usize,
    max_marks: usize,
}

impl Default for StudentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentRegistry {
    /// Create an empty registry accepting the default 3-5 marks
    pub fn new() -> Self {
        Self::with_marks_range(defaults::MIN_MARKS, defaults::MAX_MARKS)
    }

    /// Create an empty registry with a custom accepted marks count
    pub fn with_marks_range(min_marks: usize, max_marks: usize) -> Self {
        Self { students: Vec::new(), min_marks, max_marks }
    }

    /// Validate and enroll a student
    ///
    /// Fails on a malformed ID, an invalid name, a marks count outside the accepted
    /// range, a NaN or infinite mark, a semester below 1, or a malformed entry time.
    /// Nothing is stored on failure.
    pub fn register_student(&mut self, new: NewStudent) -> Result<&Student, CampusError> {
        let id = StudentId::parse(&new.id)?;

        if !is_valid_name(&new.name) {
            return Err(ValidationError::InvalidName(new.name).into());
        }

        self.check_marks_count(new.marks.len())?;

        if let Some(&mark) = new.marks.iter().find(|m| !m.is_finite()) {
            return Err(ValidationError::InvalidMark(mark).into());
        }

        if new.semester < 1 {
            return Err(ValidationError::InvalidSemester(new.semester).into());
        }

        let entry_time = EntryTime::parse(&new.entry_time)?;

        if self.students.iter().any(|s| s.id() == &id) {
            debug!(student_id = %id, "Registering a duplicate student ID");
        }

        let student = Student::new(id, new.name, new.department, new.semester, new.marks, entry_time);
        info!(
            student_id = %student.id(),
            department = student.department(),
            cgpa = student.cgpa(),
            grade = %student.grade(),
            "Student registered"
        );

        self.students.push(student);
        Ok(&self.students[self.students.len() - 1])
    }

    /// Check a marks count against the accepted range
    pub fn check_marks_count(&self, count: usize) -> Result<(), ValidationError> {
        if count < self.min_marks || count > self.max_marks {
            return Err(ValidationError::InvalidMarksCount {
                count,
                min: self.min_marks,
                max: self.max_marks,
            });
        }
        Ok(())
    }

    /// Accepted marks count as an inclusive range
    pub fn marks_range(&self) -> (usize, usize) {
        (self.min_marks, self.max_marks)
    }

    /// First student whose ID equals `id` exactly
    pub fn find_by_id(&self, id: &str) -> Result<&Student, CampusError> {
        self.position_of(id)
            .map(|handle| &self.students[handle.0])
            .ok_or_else(|| CampusError::NotFound(id.to_string()))
    }

    /// Handle of the first student whose ID equals `id` exactly
    pub fn position_of(&self, id: &str) -> Option<StudentHandle> {
        self.students.iter().position(|s| s.id().as_str() == id).map(StudentHandle)
    }

    /// Student behind a handle
    pub fn get(&self, handle: StudentHandle) -> Option<&Student> {
        self.students.get(handle.0)
    }

    /// Mutable student behind a handle
    pub fn get_mut(&mut self, handle: StudentHandle) -> Option<&mut Student> {
        self.students.get_mut(handle.0)
    }

    /// All students in registration order
    pub fn list_all(&self) -> &[Student] {
        &self.students
    }

    /// Number of enrolled students
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether no student is enrolled
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
