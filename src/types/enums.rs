//! Enumeration types for the campus access register
//!
//! This module contains the role and grade enumerations shared by the registry,
//! the entry log and the reports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role under which a person enters the campus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Enrolled student, must be registered beforehand
    Student,
    /// Member of staff
    Staff,
    /// Visitor, only admitted after opening time
    Visitor,
}

impl Role {
    /// All roles in menu order
    pub const ALL: [Role; 3] = [Role::Student, Role::Staff, Role::Visitor];

    /// Heading used when a person of this role is displayed
    pub fn banner(&self) -> &'static str {
        match self {
            Role::Student => "--- STUDENT ---",
            Role::Staff => "--- STAFF ---",
            Role::Visitor => "--- VISITOR ---",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => write!(f, "Student"),
            Role::Staff => write!(f, "Staff"),
            Role::Visitor => write!(f, "Visitor"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "staff" => Ok(Role::Staff),
            "visitor" => Ok(Role::Visitor),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Letter grade derived from a CGPA on the 0-4 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    /// CGPA of 3.5 or above
    A,
    /// CGPA of 3.0 or above
    B,
    /// CGPA of 2.0 or above
    C,
    /// Anything below 2.0
    D,
}

impl Grade {
    /// Map a CGPA onto the fixed threshold table
    pub fn from_cgpa(cgpa: f64) -> Self {
        if cgpa >= 3.5 {
            Grade::A
        } else if cgpa >= 3.0 {
            Grade::B
        } else if cgpa >= 2.0 {
            Grade::C
        } else {
            Grade::D
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str_is_case_insensitive() {
        assert_eq!("Student".parse::<Role>().unwrap(), Role::Student);
        assert_eq!("STAFF".parse::<Role>().unwrap(), Role::Staff);
        assert!(" visitor ".parse::<Role>().is_err());
        assert!("lecturer".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_display_round_trips() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
            assert!(role.banner().starts_with("---"));
        }
    }

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(Grade::from_cgpa(4.0), Grade::A);
        assert_eq!(Grade::from_cgpa(3.5), Grade::A);
        assert_eq!(Grade::from_cgpa(3.49999), Grade::B);
        assert_eq!(Grade::from_cgpa(3.0), Grade::B);
        assert_eq!(Grade::from_cgpa(2.999), Grade::C);
        assert_eq!(Grade::from_cgpa(2.0), Grade::C);
        assert_eq!(Grade::from_cgpa(1.999), Grade::D);
        assert_eq!(Grade::from_cgpa(0.0), Grade::D);
    }

    #[test]
    fn test_grade_display() {
        assert_eq!(Grade::A.to_string(), "A");
        assert_eq!(Grade::D.to_string(), "D");
    }
}
