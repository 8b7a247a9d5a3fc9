//! People who pass through the campus gate
//!
//! Students are referenced by their registry handle. Staff and visitors are not
//! registered; a fresh value is created for every entry.

use serde::{Deserialize, Serialize};

use crate::registry::{Student, StudentHandle};
use crate::types::{Role, StaffId};

/// Department recorded for every staff entry
pub const STAFF_DEPARTMENT: &str = "General";

/// Department recorded for every visitor entry
pub const VISITOR_DEPARTMENT: &str = "None";

/// A staff member admitted through the gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    /// Employee number
    pub id: StaffId,
    /// Full name
    pub name: String,
    /// Always [`STAFF_DEPARTMENT`] in the entry flow
    pub department: String,
}

impl Staff {
    /// Create a staff member in the general department
    pub fn new(id: StaffId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), department: STAFF_DEPARTMENT.to_string() }
    }
}

/// A visitor admitted after opening time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visitor {
    /// Whatever identifier the visitor gave; not format-checked
    pub id: String,
    /// Full name
    pub name: String,
}

impl Visitor {
    /// Create a visitor
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// The subject of an entry event, tagged by role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Entrant {
    /// A registered student
    Student(StudentHandle),
    /// A staff member
    Staff(Staff),
    /// A visitor
    Visitor(Visitor),
}

impl Entrant {
    /// Role tag of this entrant
    pub fn role(&self) -> Role {
        match self {
            Entrant::Student(_) => Role::Student,
            Entrant::Staff(_) => Role::Staff,
            Entrant::Visitor(_) => Role::Visitor,
        }
    }
}

/// Borrowed identity of any person, dispatched on the role tag
#[derive(Debug, Clone, Copy)]
pub enum PersonView<'a> {
    /// Registry record of a student
    Student(&'a Student),
    /// Staff entry
    Staff(&'a Staff),
    /// Visitor entry
    Visitor(&'a Visitor),
}

impl<'a> PersonView<'a> {
    /// Identifier as a string
    pub fn id(&self) -> &'a str {
        match self {
            PersonView::Student(s) => s.id().as_str(),
            PersonView::Staff(s) => s.id.as_str(),
            PersonView::Visitor(v) => &v.id,
        }
    }

    /// Full name
    pub fn name(&self) -> &'a str {
        match self {
            PersonView::Student(s) => s.name(),
            PersonView::Staff(s) => &s.name,
            PersonView::Visitor(v) => &v.name,
        }
    }

    /// Role tag
    pub fn role(&self) -> Role {
        match self {
            PersonView::Student(_) => Role::Student,
            PersonView::Staff(_) => Role::Staff,
            PersonView::Visitor(_) => Role::Visitor,
        }
    }

    /// Department; visitors report [`VISITOR_DEPARTMENT`]
    pub fn department(&self) -> &'a str {
        match self {
            PersonView::Student(s) => s.department(),
            PersonView::Staff(s) => &s.department,
            PersonView::Visitor(_) => VISITOR_DEPARTMENT,
        }
    }
}
