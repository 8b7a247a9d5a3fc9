//! Configuration structures for the campus access register
//!
//! This module contains the register configuration structure and validation logic
//! used to control curfew cutoffs, the lockout threshold and registration limits.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::types::EntryTime;
use crate::validation::CurfewPolicy;

/// Default curfew and lockout values
pub mod defaults {
    /// Students arriving strictly after this time are late
    pub const STUDENT_CUTOFF: &str = "09:30";

    /// Staff arriving strictly after this time are late
    pub const STAFF_CUTOFF: &str = "08:45";

    /// Visitors are admitted from this time on
    pub const VISITOR_OPENING: &str = "10:00";

    /// Denied entry attempts before the register locks
    pub const MAX_INVALID_ATTEMPTS: u32 = 3;

    /// Fewest subject marks accepted at registration
    pub const MIN_MARKS: usize = 3;

    /// Most subject marks accepted at registration
    pub const MAX_MARKS: usize = 5;
}

/// Command line flags
#[derive(Parser, Debug, Clone)]
#[command(
    name = "campus-access-register",
    version = "0.1.0",
    about = "Campus Access Register - records campus entries and student records",
    long_about = "Interactive register that tracks enrolled students, records campus entries for students, staff and visitors, flags late arrivals and prints simple reports.

EXAMPLES:
    # Run with default curfews
    campus-access-register

    # Use a configuration file
    campus-access-register --config register.json

    # Later student cutoff, more attempts before lockout
    campus-access-register --student-cutoff 09:00 --max-invalid-attempts 5

    # Write a configuration template
    campus-access-register --print-config > register.json

    # Validate configuration without starting the menu
    campus-access-register --config register.json --dry-run

CONFIGURATION:
    Settings are resolved in this order, later sources winning:
    defaults, then the --config JSON file, then command line flags."
)]
pub struct CliArgs {
    /// JSON configuration file
    #[arg(
        short,
        long,
        value_name = "PATH",
        help = "JSON configuration file",
        long_help = "JSON file with any of: student_cutoff, staff_cutoff, visitor_opening, max_invalid_attempts, min_marks, max_marks. Flags given on the command line win over the file."
    )]
    pub config: Option<String>,

    /// Latest on-time arrival for students
    #[arg(
        long,
        help = "Student lateness cutoff (HH:mm)",
        long_help = "Students entering strictly after this time are flagged late. Default: 09:30"
    )]
    pub student_cutoff: Option<String>,

    /// Latest on-time arrival for staff
    #[arg(
        long,
        help = "Staff lateness cutoff (HH:mm)",
        long_help = "Staff entering strictly after this time are flagged late. Default: 08:45"
    )]
    pub staff_cutoff: Option<String>,

    /// Earliest admission time for visitors
    #[arg(
        long,
        help = "Visitor opening time (HH:mm)",
        long_help = "Visitors arriving before this time are turned away. Default: 10:00"
    )]
    pub visitor_opening: Option<String>,

    /// Denied entry attempts before the register locks
    #[arg(
        long,
        help = "Denied attempts before entry is locked",
        long_help = "Number of denied entry attempts after which every further attempt is refused until restart. Must be greater than 0. Default: 3"
    )]
    pub max_invalid_attempts: Option<u32>,

    /// Log accepted entries and registrations
    #[arg(short, long, help = "Log at INFO level")]
    pub verbose: bool,

    /// Log validation detail and span timings
    #[arg(short, long, help = "Log at DEBUG level")]
    pub debug: bool,

    /// Additionally write JSON logs to this directory
    #[arg(long, help = "Directory for rolling JSON log files")]
    pub log_dir: Option<String>,

    /// Dry run mode - validate configuration without starting the menu
    #[arg(long, help = "Validate configuration without starting the menu")]
    pub dry_run: bool,

    /// Print the default configuration and exit
    #[arg(long, help = "Print the default configuration as JSON and exit")]
    pub print_config: bool,
}

/// Keys accepted in a JSON configuration file; all optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Student lateness cutoff (HH:mm)
    pub student_cutoff: Option<String>,

    /// Staff lateness cutoff (HH:mm)
    pub staff_cutoff: Option<String>,

    /// Visitor opening time (HH:mm)
    pub visitor_opening: Option<String>,

    /// Denied attempts before entry is locked
    pub max_invalid_attempts: Option<u32>,

    /// Fewest subject marks accepted at registration
    pub min_marks: Option<usize>,

    /// Most subject marks accepted at registration
    pub max_marks: Option<usize>,
}

/// Configuration for a register session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterConfig {
    /// Student lateness cutoff (HH:mm)
    pub student_cutoff: String,

    /// Staff lateness cutoff (HH:mm)
    pub staff_cutoff: String,

    /// Visitor opening time (HH:mm)
    pub visitor_opening: String,

    /// Denied attempts before entry is locked
    pub max_invalid_attempts: u32,

    /// Fewest subject marks accepted at registration
    pub min_marks: usize,

    /// Most subject marks accepted at registration
    pub max_marks: usize,
}

/// Errors while reading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No file at the given path
    #[error("Config file not found: {0}")]
    FileNotFound(String),

    /// The file could not be read
    #[error("Cannot read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The file is not valid JSON for this configuration
    #[error("Invalid JSON in config file: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Only `.json` files are read
    #[error("Unsupported config file format: {0} (expected .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for register configuration
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    /// A cutoff is not a valid HH:mm time
    #[error("Invalid time for {field}: {value:?} (expected HH:mm)")]
    InvalidTime {
        /// Name of the field holding the time
        field: String,
        /// The rejected value
        value: String,
    },

    /// Lockout threshold is invalid
    #[error("Max invalid attempts must be greater than 0, got {0}")]
    InvalidAttemptLimit(u32),

    /// Marks range is invalid
    #[error("Invalid marks range: min ({0}) must be >= 1 and <= max ({1})")]
    InvalidMarksRange(usize, usize),
}

impl Default for RegisterConfig {
    fn default() -> Self {
        Self {
            student_cutoff: defaults::STUDENT_CUTOFF.to_string(),
            staff_cutoff: defaults::STAFF_CUTOFF.to_string(),
            visitor_opening: defaults::VISITOR_OPENING.to_string(),
            max_invalid_attempts: defaults::MAX_INVALID_ATTEMPTS,
            min_marks: defaults::MIN_MARKS,
            max_marks: defaults::MAX_MARKS,
        }
    }
}

impl CliArgs {
    /// Copy every flag that was given onto `config`
    fn apply_to(self, config: &mut RegisterConfig) {
        let overrides = [
            (self.student_cutoff, &mut config.student_cutoff),
            (self.staff_cutoff, &mut config.staff_cutoff),
            (self.visitor_opening, &mut config.visitor_opening),
        ];
        for (flag, field) in overrides {
            if let Some(value) = flag {
                *field = value;
            }
        }
        if let Some(limit) = self.max_invalid_attempts {
            config.max_invalid_attempts = limit;
        }
    }
}

impl ConfigFile {
    /// Copy every key present in the file onto `config`
    fn apply_to(self, config: &mut RegisterConfig) {
        if let Some(v) = self.student_cutoff {
            config.student_cutoff = v;
        }
        if let Some(v) = self.staff_cutoff {
            config.staff_cutoff = v;
        }
        if let Some(v) = self.visitor_opening {
            config.visitor_opening = v;
        }
        if let Some(v) = self.max_invalid_attempts {
            config.max_invalid_attempts = v;
        }
        if let Some(v) = self.min_marks {
            config.min_marks = v;
        }
        if let Some(v) = self.max_marks {
            config.max_marks = v;
        }
    }
}

impl RegisterConfig {
    /// Defaults, then the `--config` file, then individual flags
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = match args.config.as_deref() {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        args.apply_to(&mut config);
        Ok(config)
    }

    /// Read a JSON file; keys it leaves out keep their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("no extension");
        if extension != "json" {
            return Err(ConfigError::UnsupportedFormat(extension.to_string()));
        }

        let partial: ConfigFile = serde_json::from_str(&fs::read_to_string(path)?)?;
        let mut config = Self::default();
        partial.apply_to(&mut config);
        Ok(config)
    }

    /// Full configuration as pretty JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check times, the lockout threshold and the marks range
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        Self::parse_time("student_cutoff", &self.student_cutoff)?;
        Self::parse_time("staff_cutoff", &self.staff_cutoff)?;
        Self::parse_time("visitor_opening", &self.visitor_opening)?;

        if self.max_invalid_attempts == 0 {
            return Err(ConfigValidationError::InvalidAttemptLimit(self.max_invalid_attempts));
        }

        if self.min_marks == 0 || self.min_marks > self.max_marks {
            return Err(ConfigValidationError::InvalidMarksRange(self.min_marks, self.max_marks));
        }

        Ok(())
    }

    /// Build the curfew policy described by this configuration
    pub fn curfew_policy(&self) -> Result<CurfewPolicy, ConfigValidationError> {
        Ok(CurfewPolicy {
            student_cutoff: Self::parse_time("student_cutoff", &self.student_cutoff)?,
            staff_cutoff: Self::parse_time("staff_cutoff", &self.staff_cutoff)?,
            visitor_opening: Self::parse_time("visitor_opening", &self.visitor_opening)?,
        })
    }

    /// Accepted marks count as an inclusive range
    pub fn marks_range(&self) -> (usize, usize) {
        (self.min_marks, self.max_marks)
    }

    fn parse_time(field: &str, value: &str) -> Result<EntryTime, ConfigValidationError> {
        EntryTime::parse(value).map_err(|_| ConfigValidationError::InvalidTime {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn empty_args() -> CliArgs {
        CliArgs {
            config: None,
            student_cutoff: None,
            staff_cutoff: None,
            visitor_opening: None,
            max_invalid_attempts: None,
            verbose: false,
            debug: false,
            log_dir: None,
            dry_run: false,
            print_config: false,
        }
    }

    #[test]
    fn test_register_config_default() {
        let config = RegisterConfig::default();

        assert_eq!(config.student_cutoff, "09:30");
        assert_eq!(config.staff_cutoff, "08:45");
        assert_eq!(config.visitor_opening, "10:00");
        assert_eq!(config.max_invalid_attempts, 3);
        assert_eq!(config.marks_range(), (3, 5));
        config.validate().unwrap();
    }

    #[test]
    fn test_cli_parsing() {
        let args = vec!["test", "--student-cutoff", "09:00", "--max-invalid-attempts", "5", "-v"];
        let cli_args = CliArgs::try_parse_from(args).unwrap();

        assert_eq!(cli_args.student_cutoff.as_deref(), Some("09:00"));
        assert_eq!(cli_args.max_invalid_attempts, Some(5));
        assert!(cli_args.verbose);
        assert!(!cli_args.debug);
    }

    #[test]
    fn test_cli_overrides() {
        let mut args = empty_args();
        args.staff_cutoff = Some("08:00".to_string());
        args.max_invalid_attempts = Some(10);

        let config = RegisterConfig::from_cli_args(args).unwrap();
        assert_eq!(config.staff_cutoff, "08:00");
        assert_eq!(config.max_invalid_attempts, 10);
        assert_eq!(config.student_cutoff, "09:30");
    }

    #[test]
    fn test_config_file_loading() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, r#"{{ "visitor_opening": "11:00", "max_marks": 6 }}"#).unwrap();

        let config = RegisterConfig::from_file(file.path()).unwrap();
        assert_eq!(config.visitor_opening, "11:00");
        assert_eq!(config.max_marks, 6);
        assert_eq!(config.min_marks, 3);
        assert_eq!(config.student_cutoff, "09:30");
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, r#"{{ "student_cutoff": "09:15" }}"#).unwrap();

        let mut args = empty_args();
        args.config = Some(file.path().display().to_string());
        args.student_cutoff = Some("09:45".to_string());

        let config = RegisterConfig::from_cli_args(args).unwrap();
        assert_eq!(config.student_cutoff, "09:45");
    }

    #[test]
    fn test_config_file_errors() {
        assert!(matches!(
            RegisterConfig::from_file("/definitely/not/here.json"),
            Err(ConfigError::FileNotFound(_))
        ));

        let file = NamedTempFile::new().unwrap();
        assert!(matches!(
            RegisterConfig::from_file(file.path()),
            Err(ConfigError::UnsupportedFormat(_))
        ));

        let mut bad_json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(bad_json, "{{ not json").unwrap();
        assert!(matches!(
            RegisterConfig::from_file(bad_json.path()),
            Err(ConfigError::JsonError(_))
        ));
    }

    #[test]
    fn test_validation_rejects_bad_times() {
        let config = RegisterConfig { staff_cutoff: "8:45".to_string(), ..Default::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidTime {
                field: "staff_cutoff".to_string(),
                value: "8:45".to_string(),
            })
        );
        assert!(config.curfew_policy().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_limits() {
        let config = RegisterConfig { max_invalid_attempts: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidAttemptLimit(0)));

        let config = RegisterConfig { min_marks: 6, max_marks: 5, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidMarksRange(6, 5)));

        let config = RegisterConfig { min_marks: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_curfew_policy_from_config() {
        let policy = RegisterConfig::default().curfew_policy().unwrap();
        assert_eq!(policy, CurfewPolicy::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = RegisterConfig::default();
        let json = config.print_json().unwrap();
        assert!(json.contains("\"student_cutoff\": \"09:30\""));

        let back: RegisterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_printed_json_loads_back_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let config = RegisterConfig { max_invalid_attempts: 7, ..Default::default() };
        file.write_all(config.print_json().unwrap().as_bytes()).unwrap();

        let loaded = RegisterConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }
}
