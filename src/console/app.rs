//! Interactive register console
//!
//! This module contains the RegisterConsole, the menu loop that turns operator input
//! into session calls and prints the results.

use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::console::{ConsoleError, MenuCommand, Prompter};
use crate::registry::NewStudent;
use crate::session::{CampusSession, EntryRequest};
use crate::types::Role;

/// Menu loop bound to one session
///
/// Raw-input problems are reported and the loop returns to the menu. End of input
/// behaves like choosing Exit.
#[derive(Debug)]
pub struct RegisterConsole<R, W> {
    session: CampusSession,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> RegisterConsole<R, W> {
    /// Create a console driving `session`
    pub fn new(session: CampusSession, input: R, output: W) -> Self {
        Self { session, prompter: Prompter::new(input, output) }
    }

    /// Run the menu until Exit or end of input
    ///
    /// Only I/O failures are returned as errors.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        info!("Menu loop started");

        loop {
            self.print_menu()?;

            let choice = match self.prompter.ask("Choice: ") {
                Ok(choice) => choice,
                Err(ConsoleError::EndOfInput) => break,
                Err(e) => return Err(e),
            };

            let command = match choice.parse::<MenuCommand>() {
                Ok(command) => command,
                Err(e) => {
                    debug!(choice = %choice, "Unrecognised menu choice");
                    self.prompter.say(e)?;
                    continue;
                }
            };

            if command == MenuCommand::Exit {
                break;
            }

            match self.dispatch(command) {
                Ok(()) => {}
                Err(ConsoleError::EndOfInput) => break,
                Err(e) if e.is_recoverable() => self.prompter.say(e)?,
                Err(e) => return Err(e),
            }
        }

        info!("Menu loop finished");
        self.prompter.say("Goodbye.")
    }

    /// Session being driven
    pub fn session(&self) -> &CampusSession {
        &self.session
    }

    /// Give back the session and the writer
    pub fn into_parts(self) -> (CampusSession, W) {
        let (_, output) = self.prompter.into_inner();
        (self.session, output)
    }

    fn print_menu(&mut self) -> Result<(), ConsoleError> {
        self.prompter.say("\n--- MENU ---")?;
        for command in MenuCommand::ALL {
            self.prompter.say(command)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, command: MenuCommand) -> Result<(), ConsoleError> {
        debug!(?command, "Menu command selected");
        match command {
            MenuCommand::EnterCampus => self.enter_campus(),
            MenuCommand::AddStudent => self.add_student(),
            MenuCommand::ViewStudents => self.view_students(),
            MenuCommand::ViewLog => self.view_log(),
            MenuCommand::ViewLateEntries => self.view_late_entries(),
            MenuCommand::DepartmentSummary => self.department_summary(),
            MenuCommand::SearchById => self.search_by_id(),
            MenuCommand::TopCgpa => self.top_cgpa(),
            MenuCommand::Exit => Ok(()),
        }
    }

    fn enter_campus(&mut self) -> Result<(), ConsoleError> {
        let role = self.prompter.ask("Enter role (Student/Staff/Visitor): ")?;
        let id = self.prompter.ask("Enter ID: ")?;
        let name = self.prompter.ask("Enter Name: ")?;
        let time = self.prompter.ask("Enter Entry Time (HH:mm): ")?;

        match self.session.enter_campus(&EntryRequest { role, id, name, time }) {
            Ok(outcome) => {
                let message = match outcome.role {
                    Role::Student => "Student entry logged.",
                    Role::Staff => "Staff logged.",
                    Role::Visitor => "Visitor logged.",
                };
                if outcome.is_late {
                    self.prompter.say(format!("{} (LATE)", message))
                } else {
                    self.prompter.say(message)
                }
            }
            Err(e) => self.prompter.say(format!("Entry denied: {}", e)),
        }
    }

    fn add_student(&mut self) -> Result<(), ConsoleError> {
        let id = self.prompter.ask("ID: ")?;
        let name = self.prompter.ask("Name: ")?;
        let department = self.prompter.ask("Department: ")?;
        let semester: u32 = self.prompter.ask_number("Semester: ", "semester")?;

        let (min, max) = self.session.registry().marks_range();
        let count: usize =
            self.prompter.ask_number(&format!("Subjects count ({}-{}): ", min, max), "subjects count")?;
        if let Err(e) = self.session.check_marks_count(count) {
            return self.prompter.say(format!("Registration failed: {}", e));
        }

        let mut marks = Vec::with_capacity(count);
        for i in 1..=count {
            marks.push(self.prompter.ask_number::<f64>(&format!("Marks {}: ", i), "mark")?);
        }

        let entry_time = self.prompter.ask("Entry Time (HH:mm): ")?;

        let new = NewStudent { id, name, department, semester, marks, entry_time };
        let message = match self.session.register_student(new) {
            Ok(student) => format!("Student added. CGPA: {:.2} | Grade: {}", student.cgpa(), student.grade()),
            Err(e) => format!("Registration failed: {}", e),
        };
        self.prompter.say(message)
    }

    fn view_students(&mut self) -> Result<(), ConsoleError> {
        let students = self.session.reports().list_students();
        if students.is_empty() {
            return self.prompter.say("No students registered.");
        }
        for student in students {
            self.prompter.say(format!("\n{}", student))?;
        }
        Ok(())
    }

    fn view_log(&mut self) -> Result<(), ConsoleError> {
        let registry = self.session.registry();
        let events = self.session.reports().list_log();
        if events.is_empty() {
            return self.prompter.say("No entries logged.");
        }
        for event in events {
            self.prompter.say(format!("\n{}", event.display(registry)))?;
        }
        Ok(())
    }

    fn view_late_entries(&mut self) -> Result<(), ConsoleError> {
        let registry = self.session.registry();
        let late = self.session.reports().list_late();
        if late.is_empty() {
            return self.prompter.say("No late entries.");
        }
        for event in late {
            self.prompter.say(format!("\n{}", event.display(registry)))?;
        }
        Ok(())
    }

    fn department_summary(&mut self) -> Result<(), ConsoleError> {
        let summary = self.session.reports().department_summary();
        if summary.is_empty() {
            return self.prompter.say("No students registered.");
        }
        self.prompter.say("Department Summary:")?;
        self.prompter.say(summary)
    }

    fn search_by_id(&mut self) -> Result<(), ConsoleError> {
        let id = self.prompter.ask("Enter ID: ")?;
        match self.session.reports().find_by_id(&id) {
            Ok(student) => self.prompter.say(format!("\n{}", student)),
            Err(e) => self.prompter.say(e),
        }
    }

    fn top_cgpa(&mut self) -> Result<(), ConsoleError> {
        let department = self.prompter.ask("Department: ")?;
        let top = self.session.reports().top_cgpa(&department);
        if top.is_empty() {
            return self.prompter.say(format!("No students in department {}.", department));
        }

        self.prompter.say(format!("Top CGPA in {}:", department))?;
        for (rank, student) in top.iter().enumerate() {
            self.prompter.say(format!(
                "{}. {} | {} | CGPA: {:.2} | Grade: {}",
                rank + 1,
                student.id(),
                student.name(),
                student.cgpa(),
                student.grade()
            ))?;
        }
        Ok(())
    }
}
