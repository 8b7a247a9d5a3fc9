//! Menu commands

use std::fmt;
use std::str::FromStr;

use crate::console::ConsoleError;

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    /// Record a campus entry
    EnterCampus,
    /// Enroll a student
    AddStudent,
    /// List every registered student
    ViewStudents,
    /// List every logged entry
    ViewLog,
    /// List only late entries
    ViewLateEntries,
    /// Student counts per department
    DepartmentSummary,
    /// Look up one student
    SearchById,
    /// Best three students of a department
    TopCgpa,
    /// Leave the register
    Exit,
}

impl MenuCommand {
    /// Every command in menu order
    pub const ALL: [MenuCommand; 9] = [
        MenuCommand::EnterCampus,
        MenuCommand::AddStudent,
        MenuCommand::ViewStudents,
        MenuCommand::ViewLog,
        MenuCommand::ViewLateEntries,
        MenuCommand::DepartmentSummary,
        MenuCommand::SearchById,
        MenuCommand::TopCgpa,
        MenuCommand::Exit,
    ];

    /// Number the operator types to pick this command
    pub fn number(&self) -> u32 {
        match self {
            MenuCommand::EnterCampus => 1,
            MenuCommand::AddStudent => 2,
            MenuCommand::ViewStudents => 3,
            MenuCommand::ViewLog => 4,
            MenuCommand::ViewLateEntries => 5,
            MenuCommand::DepartmentSummary => 6,
            MenuCommand::SearchById => 7,
            MenuCommand::TopCgpa => 8,
            MenuCommand::Exit => 9,
        }
    }

    /// Label shown in the menu
    pub fn label(&self) -> &'static str {
        match self {
            MenuCommand::EnterCampus => "Enter Campus",
            MenuCommand::AddStudent => "Add Student",
            MenuCommand::ViewStudents => "View Students",
            MenuCommand::ViewLog => "View Log",
            MenuCommand::ViewLateEntries => "View Late Entries",
            MenuCommand::DepartmentSummary => "Department Summary",
            MenuCommand::SearchById => "Search by ID",
            MenuCommand::TopCgpa => "Top-3 CGPA by Department",
            MenuCommand::Exit => "Exit",
        }
    }

    /// Command for a menu number
    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.number() == number)
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuCommand {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| ConsoleError::InvalidChoice(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_sequential() {
        for (i, command) in MenuCommand::ALL.iter().enumerate() {
            assert_eq!(command.number() as usize, i + 1);
            assert_eq!(MenuCommand::from_number(command.number()), Some(*command));
        }
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!("1".parse::<MenuCommand>().unwrap(), MenuCommand::EnterCampus);
        assert_eq!(" 8 ".parse::<MenuCommand>().unwrap(), MenuCommand::TopCgpa);
        assert_eq!("9".parse::<MenuCommand>().unwrap(), MenuCommand::Exit);

        for bad in ["0", "10", "", "two", "-1"] {
            assert!(matches!(bad.parse::<MenuCommand>(), Err(ConsoleError::InvalidChoice(_))));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(MenuCommand::SearchById.to_string(), "7. Search by ID");
    }
}
