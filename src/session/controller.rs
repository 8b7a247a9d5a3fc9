//! Register session controller
//!
//! This module contains the CampusSession, which owns the registry, the entry log,
//! the invalid-attempt counter and the session statistics for one run.

use tracing::{info, instrument, warn};

use crate::events::{Entrant, EntryLog, Staff, Visitor};
use crate::registry::{NewStudent, Student, StudentRegistry};
use crate::reporting::Reports;
use crate::session::{CampusError, CampusResult, SessionStatistics};
use crate::types::{ConfigValidationError, EntryTime, RegisterConfig, Role, StaffId, StudentId};
use crate::validation::{is_valid_name, CurfewPolicy, ValidationError};

/// Raw entry details as read from the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRequest {
    /// Role name, matched case-insensitively
    pub role: String,
    /// Identifier; format depends on the role
    pub id: String,
    /// Full name
    pub name: String,
    /// Time of day as `HH:mm`
    pub time: String,
}

impl EntryRequest {
    /// Build a request from borrowed fields
    pub fn new(role: &str, id: &str, name: &str, time: &str) -> Self {
        Self {
            role: role.to_string(),
            id: id.to_string(),
            name: name.to_string(),
            time: time.to_string(),
        }
    }
}

/// Result of an admitted entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryOutcome {
    /// Position of the new event in the log
    pub sequence: u64,
    /// Role the person entered under
    pub role: Role,
    /// Time of the entry
    pub entry_time: EntryTime,
    /// Whether the entry was after the role's cutoff
    pub is_late: bool,
}

/// One run of the campus access register
///
/// Attempts move through role selection, ID check, name check and time evaluation
/// before being logged or denied. Every denial adds to `invalid_attempts`; once it
/// reaches the configured limit all further attempts are refused with
/// [`CampusError::Locked`]. The counter never resets.
#[derive(Debug, Clone)]
pub struct CampusSession {
    policy: CurfewPolicy,
    max_invalid_attempts: u32,
    registry: StudentRegistry,
    log: EntryLog,
    invalid_attempts: u32,
    statistics: SessionStatistics,
}

impl Default for CampusSession {
    fn default() -> Self {
        Self::with_policy(CurfewPolicy::default(), crate::types::config::defaults::MAX_INVALID_ATTEMPTS)
    }
}

impl CampusSession {
    /// Create a session with default curfews and limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from a configuration
    pub fn from_config(config: &RegisterConfig) -> Result<Self, ConfigValidationError> {
        config.validate()?;
        let policy = config.curfew_policy()?;
        let (min_marks, max_marks) = config.marks_range();

        let mut session = Self::with_policy(policy, config.max_invalid_attempts);
        session.registry = StudentRegistry::with_marks_range(min_marks, max_marks);
        Ok(session)
    }

    /// Create a session with an explicit curfew policy and lockout threshold
    pub fn with_policy(policy: CurfewPolicy, max_invalid_attempts: u32) -> Self {
        Self {
            policy,
            max_invalid_attempts,
            registry: StudentRegistry::new(),
            log: EntryLog::new(),
            invalid_attempts: 0,
            statistics: SessionStatistics::new(),
        }
    }

    /// Enroll a student
    ///
    /// Registration failures are reported but never count as invalid entry attempts.
    pub fn register_student(&mut self, new: NewStudent) -> CampusResult<&Student> {
        match self.registry.register_student(new) {
            Ok(student) => {
                self.statistics.record_registration(true);
                Ok(student)
            }
            Err(e) => {
                warn!(error = %e, "Registration rejected");
                self.statistics.record_registration(false);
                Err(e)
            }
        }
    }

    /// Check a subject count before the marks are collected
    ///
    /// A rejected count is recorded as a rejected registration.
    pub fn check_marks_count(&mut self, count: usize) -> CampusResult<()> {
        self.registry.check_marks_count(count).map_err(|e| {
            warn!(error = %e, "Registration rejected");
            self.statistics.record_registration(false);
            CampusError::from(e)
        })
    }

    /// Attempt a campus entry
    #[instrument(skip(self, request), fields(role = %request.role, id = %request.id))]
    pub fn enter_campus(&mut self, request: &EntryRequest) -> CampusResult<EntryOutcome> {
        if self.is_locked() {
            let error = CampusError::Locked { attempts: self.invalid_attempts };
            warn!(attempts = self.invalid_attempts, "Entry attempt refused while locked");
            self.statistics.record_denial(&error);
            return Err(error);
        }

        match self.admit(request) {
            Ok(outcome) => {
                info!(
                    sequence = outcome.sequence,
                    entry_time = %outcome.entry_time,
                    late = outcome.is_late,
                    "Entry logged"
                );
                self.statistics.record_entry(outcome.role, outcome.is_late);
                Ok(outcome)
            }
            Err(error) => {
                if error.counts_as_invalid_attempt() {
                    self.invalid_attempts += 1;
                }
                warn!(
                    error = %error,
                    attempts = self.invalid_attempts,
                    "Entry denied"
                );
                if self.is_locked() {
                    warn!(limit = self.max_invalid_attempts, "Too many invalid attempts, entry locked");
                }
                self.statistics.record_denial(&error);
                Err(error)
            }
        }
    }

    fn admit(&mut self, request: &EntryRequest) -> CampusResult<EntryOutcome> {
        let role: Role =
            request.role.parse().map_err(|_| CampusError::UnknownRole(request.role.clone()))?;

        if !is_valid_name(&request.name) {
            return Err(ValidationError::InvalidName(request.name.clone()).into());
        }

        let time = EntryTime::parse(&request.time)?;

        let (entrant, is_late) = match role {
            Role::Student => {
                let id = StudentId::parse(&request.id)?;
                let handle = self
                    .registry
                    .position_of(id.as_str())
                    .ok_or_else(|| CampusError::NotFound(id.to_string()))?;

                let is_late = self.policy.is_student_late(time);
                if is_late {
                    if let Some(student) = self.registry.get_mut(handle) {
                        student.mark_late();
                    }
                }
                (Entrant::Student(handle), is_late)
            }
            Role::Staff => {
                let id = StaffId::parse(&request.id)?;
                let is_late = self.policy.is_staff_late(time);
                (Entrant::Staff(Staff::new(id, request.name.clone())), is_late)
            }
            Role::Visitor => {
                if self.policy.is_visitor_too_early(time) {
                    return Err(CampusError::CurfewViolation {
                        time,
                        opening: self.policy.visitor_opening,
                    });
                }
                (Entrant::Visitor(Visitor::new(request.id.clone(), request.name.clone())), false)
            }
        };

        let event = self.log.append(entrant, time, is_late);
        Ok(EntryOutcome { sequence: event.sequence, role, entry_time: time, is_late })
    }

    /// Whether entry is locked for the rest of the session
    pub fn is_locked(&self) -> bool {
        self.invalid_attempts >= self.max_invalid_attempts
    }

    /// Denied attempts so far
    pub fn invalid_attempts(&self) -> u32 {
        self.invalid_attempts
    }

    /// Denied attempts that lock entry
    pub fn max_invalid_attempts(&self) -> u32 {
        self.max_invalid_attempts
    }

    /// Curfew cutoffs in force
    pub fn policy(&self) -> &CurfewPolicy {
        &self.policy
    }

    /// Enrolled students
    pub fn registry(&self) -> &StudentRegistry {
        &self.registry
    }

    /// Admitted entries
    pub fn log(&self) -> &EntryLog {
        &self.log
    }

    /// Counters for this session
    pub fn statistics(&self) -> &SessionStatistics {
        &self.statistics
    }

    /// Read-only reports over the registry and the log
    pub fn reports(&self) -> Reports<'_> {
        Reports::new(&self.registry, &self.log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ParseError;

    fn alice() -> NewStudent {
        NewStudent {
            id: "ST000001".to_string(),
            name: "Alice".to_string(),
            department: "CS".to_string(),
            semester: 3,
            marks: vec![80.0, 90.0, 70.0],
            entry_time: "08:00".to_string(),
        }
    }

    #[test]
    fn test_student_entry_late() {
        let mut session = CampusSession::new();
        session.register_student(alice()).unwrap();

        let outcome = session.enter_campus(&EntryRequest::new("student", "ST000001", "Alice", "09:45")).unwrap();
        assert!(outcome.is_late);
        assert_eq!(outcome.sequence, 1);

        let student = session.registry().find_by_id("ST000001").unwrap();
        assert!(student.is_late());
        assert_eq!(student.late_count(), 1);
        assert_eq!(session.invalid_attempts(), 0);
    }

    #[test]
    fn test_student_entry_on_time() {
        let mut session = CampusSession::new();
        session.register_student(alice()).unwrap();

        let outcome = session.enter_campus(&EntryRequest::new("Student", "ST000001", "Alice", "09:30")).unwrap();
        assert!(!outcome.is_late);
        assert_eq!(session.registry().find_by_id("ST000001").unwrap().late_count(), 0);
    }

    #[test]
    fn test_unregistered_student_denied() {
        let mut session = CampusSession::new();
        let err = session.enter_campus(&EntryRequest::new("Student", "ST999999", "Zed", "08:00")).unwrap_err();
        assert_eq!(err, CampusError::NotFound("ST999999".to_string()));
        assert_eq!(session.invalid_attempts(), 1);
        assert!(session.log().is_empty());
    }

    #[test]
    fn test_staff_entry() {
        let mut session = CampusSession::new();
        let outcome = session.enter_campus(&EntryRequest::new("STAFF", "SF12345", "Dana", "08:46")).unwrap();
        assert!(outcome.is_late);
        assert_eq!(outcome.role, Role::Staff);

        let err = session.enter_campus(&EntryRequest::new("staff", "ST123456", "Dana", "08:00")).unwrap_err();
        assert_eq!(err, CampusError::Validation(ValidationError::InvalidId("ST123456".to_string())));
    }

    #[test]
    fn test_visitor_curfew() {
        let mut session = CampusSession::new();
        let err = session.enter_campus(&EntryRequest::new("visitor", "anything", "Eve", "09:59")).unwrap_err();
        assert!(matches!(err, CampusError::CurfewViolation { .. }));

        let outcome = session.enter_campus(&EntryRequest::new("visitor", "anything", "Eve", "10:00")).unwrap();
        assert!(!outcome.is_late);
        assert_eq!(session.invalid_attempts(), 1);
    }

    #[test]
    fn test_check_order() {
        let mut session = CampusSession::new();

        // Unknown role wins over a bad name
        let err = session.enter_campus(&EntryRequest::new("guest", "x", "", "bad")).unwrap_err();
        assert_eq!(err, CampusError::UnknownRole("guest".to_string()));

        // Bad name wins over a bad time
        let err = session.enter_campus(&EntryRequest::new("visitor", "x", "R2D2", "bad")).unwrap_err();
        assert_eq!(err, CampusError::Validation(ValidationError::InvalidName("R2D2".to_string())));
    }

    #[test]
    fn test_malformed_time_counts_as_invalid() {
        let mut session = CampusSession::new();
        let err = session.enter_campus(&EntryRequest::new("staff", "SF12345", "Dana", "8:45")).unwrap_err();
        assert_eq!(err, CampusError::Parse(ParseError::MalformedTime("8:45".to_string())));
        assert_eq!(session.invalid_attempts(), 1);
    }

    #[test]
    fn test_lockout_after_three_denials() {
        let mut session = CampusSession::new();
        session.register_student(alice()).unwrap();

        for _ in 0..3 {
            assert!(session.enter_campus(&EntryRequest::new("alien", "x", "Zed", "12:00")).is_err());
        }
        assert!(session.is_locked());

        let err = session.enter_campus(&EntryRequest::new("student", "ST000001", "Alice", "08:00")).unwrap_err();
        assert_eq!(err, CampusError::Locked { attempts: 3 });

        // Locked denials do not keep counting
        assert_eq!(session.invalid_attempts(), 3);
        assert!(session.log().is_empty());
        assert_eq!(session.statistics().denied_attempts, 4);
    }

    #[test]
    fn test_success_does_not_reset_counter() {
        let mut session = CampusSession::new();
        session.enter_campus(&EntryRequest::new("visitor", "v", "Eve", "09:00")).unwrap_err();
        session.enter_campus(&EntryRequest::new("visitor", "v", "Eve", "11:00")).unwrap();
        session.enter_campus(&EntryRequest::new("visitor", "v", "Eve", "09:00")).unwrap_err();
        assert_eq!(session.invalid_attempts(), 2);
        assert!(!session.is_locked());
    }

    #[test]
    fn test_registration_failure_does_not_count() {
        let mut session = CampusSession::new();
        let mut bad = alice();
        bad.id = "XX".to_string();
        assert!(session.register_student(bad).is_err());
        assert_eq!(session.invalid_attempts(), 0);
        assert_eq!(session.statistics().registrations_rejected, 1);
    }

    #[test]
    fn test_from_config() {
        let config = RegisterConfig {
            student_cutoff: "09:00".to_string(),
            max_invalid_attempts: 1,
            ..Default::default()
        };
        let mut session = CampusSession::from_config(&config).unwrap();
        session.register_student(alice()).unwrap();

        let outcome = session.enter_campus(&EntryRequest::new("student", "ST000001", "Alice", "09:01")).unwrap();
        assert!(outcome.is_late);

        session.enter_campus(&EntryRequest::new("nobody", "x", "Zed", "09:01")).unwrap_err();
        assert!(session.is_locked());

        let bad = RegisterConfig { max_invalid_attempts: 0, ..Default::default() };
        assert!(CampusSession::from_config(&bad).is_err());
    }
}
