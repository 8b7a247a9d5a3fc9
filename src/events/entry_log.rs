//! Entry events and the append-only entry log
//!
//! This module contains entry event structures and the chronological log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::events::{Entrant, PersonView};
use crate::registry::StudentRegistry;
use crate::types::{EntryId, EntryTime, Role};

/// One admitted entry through the campus gate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryEvent {
    /// Unique identifier of this event
    pub id: EntryId,
    /// Position in the log, starting at 1
    pub sequence: u64,
    /// Who entered
    pub entrant: Entrant,
    /// Time of day given by the operator
    pub entry_time: EntryTime,
    /// Whether this entry was after the role's cutoff
    pub is_late: bool,
    /// Wall-clock time the event was recorded
    pub recorded_at: DateTime<Utc>,
}

impl EntryEvent {
    /// Role of the entrant
    pub fn role(&self) -> Role {
        self.entrant.role()
    }

    /// Resolve the entrant against the registry
    ///
    /// Returns `None` only for a student handle the registry does not hold.
    pub fn person<'a>(&'a self, registry: &'a StudentRegistry) -> Option<PersonView<'a>> {
        match &self.entrant {
            Entrant::Student(handle) => registry.get(*handle).map(PersonView::Student),
            Entrant::Staff(staff) => Some(PersonView::Staff(staff)),
            Entrant::Visitor(visitor) => Some(PersonView::Visitor(visitor)),
        }
    }

    /// Pair this event with the registry for display
    pub fn display<'a>(&'a self, registry: &'a StudentRegistry) -> EntryDisplay<'a> {
        EntryDisplay { event: self, registry }
    }
}

/// Display adapter printing an event in the register's block format
#[derive(Debug)]
pub struct EntryDisplay<'a> {
    event: &'a EntryEvent,
    registry: &'a StudentRegistry,
}

impl fmt::Display for EntryDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(person) = self.event.person(self.registry) else {
            return write!(f, "#{} unknown entrant at {}", self.event.sequence, self.event.entry_time);
        };

        writeln!(f, "{}", person.role().banner())?;
        write!(
            f,
            "ID: {} | Name: {} | Role: {} | Dept: {} | Entry: {}{}",
            person.id(),
            person.name(),
            person.role(),
            person.department(),
            self.event.entry_time,
            if self.event.is_late { " (LATE)" } else { "" }
        )?;

        if let PersonView::Student(student) = person {
            write!(
                f,
                "\nSemester: {} | CGPA: {:.2} | Grade: {} | Late Entries: {}",
                student.semester(),
                student.cgpa(),
                student.grade(),
                student.late_count()
            )?;
        }
        Ok(())
    }
}

/// Chronological, append-only record of admitted entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryLog {
    entries: Vec<EntryEvent>,
}

impl EntryLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; insertion order is report order
    pub fn append(&mut self, entrant: Entrant, entry_time: EntryTime, is_late: bool) -> &EntryEvent {
        let event = EntryEvent {
            id: EntryId::new(),
            sequence: self.entries.len() as u64 + 1,
            entrant,
            entry_time,
            is_late,
            recorded_at: Utc::now(),
        };
        debug!(entry_id = %event.id, sequence = event.sequence, role = %event.role(), "Entry appended");

        self.entries.push(event);
        &self.entries[self.entries.len() - 1]
    }

    /// All entries in chronological order
    pub fn entries(&self) -> &[EntryEvent] {
        &self.entries
    }

    /// Late entries in chronological order
    pub fn late_entries(&self) -> impl Iterator<Item = &EntryEvent> {
        self.entries.iter().filter(|e| e.is_late)
    }

    /// Number of logged entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been logged
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
