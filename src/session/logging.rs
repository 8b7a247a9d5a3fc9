//! Logging setup
//!
//! Diagnostics go to stderr so the menu on stdout stays readable. A daily rolling
//! JSON file can be added with `--log-dir`.

use std::io;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

use crate::types::config::CliArgs;

/// Error returned when the subscriber cannot be installed
pub type LoggingError = Box<dyn std::error::Error + Send + Sync>;

/// Output format for stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One compact line per event
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

/// Rolling log file target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLogging {
    /// Directory holding the daily files
    pub directory: PathBuf,
    /// File name prefix; the date is appended
    pub prefix: String,
}

/// Subscriber configuration for one run of the register
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Most verbose level recorded for this crate
    pub level: Level,
    /// Format of stderr output
    pub format: LogFormat,
    /// Extra JSON output to a rolling file
    pub file: Option<FileLogging>,
    /// Record span close events with timings
    pub span_events: bool,
    /// Colour stderr output
    pub ansi: bool,
    /// Filter directive overriding `level` and `RUST_LOG`
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            format: LogFormat::Compact,
            file: None,
            span_events: false,
            ansi: true,
            filter: None,
        }
    }
}

/// Keeps the background file writer alive; drop it to flush
#[derive(Debug)]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

impl LoggingConfig {
    /// Warnings only, compact, on stderr
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration selected by the command line flags
    ///
    /// `--debug` wins over `--verbose`; both add to `--log-dir`.
    pub fn from_cli_args(args: &CliArgs) -> Self {
        let mut config = if args.debug {
            Self::new().with_level(Level::DEBUG).with_span_events()
        } else if args.verbose {
            Self::new().with_level(Level::INFO)
        } else {
            Self::new()
        };

        if let Some(dir) = &args.log_dir {
            config = config.with_log_dir(dir);
        }
        config
    }

    /// Set the level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Write JSON to stderr
    pub fn with_json(mut self) -> Self {
        self.format = LogFormat::Json;
        self
    }

    /// Also write JSON to daily files under `directory`
    pub fn with_log_dir(mut self, directory: impl Into<PathBuf>) -> Self {
        self.file = Some(FileLogging {
            directory: directory.into(),
            prefix: env!("CARGO_PKG_NAME").to_string(),
        });
        self
    }

    /// Record span close events
    pub fn with_span_events(mut self) -> Self {
        self.span_events = true;
        self
    }

    /// Plain stderr output
    pub fn without_ansi(mut self) -> Self {
        self.ansi = false;
        self
    }

    /// Use a filter directive instead of `level`
    pub fn with_filter(mut self, directive: impl Into<String>) -> Self {
        self.filter = Some(directive.into());
        self
    }

    fn fmt_span(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Directive used when neither `filter` nor `RUST_LOG` is set
    fn default_directive(&self) -> String {
        format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), self.level)
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        if let Some(directive) = &self.filter {
            return Ok(EnvFilter::try_new(directive)?);
        }
        Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_directive())))
    }

    /// Install the global subscriber
    ///
    /// Fails if the filter directive is invalid or a subscriber is already set.
    pub fn init(self) -> Result<LoggingGuard, LoggingError> {
        let registry = Registry::default().with(self.env_filter()?);

        let (file_layer, file_guard) = match &self.file {
            Some(target) => {
                let (writer, guard) =
                    tracing_appender::non_blocking(rolling::daily(&target.directory, &target.prefix));
                let layer = fmt::layer().json().with_writer(writer).with_span_events(self.fmt_span());
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        match self.format {
            LogFormat::Json => {
                let stderr_layer =
                    fmt::layer().json().with_writer(io::stderr).with_span_events(self.fmt_span());
                registry.with(file_layer).with(stderr_layer).try_init()?;
            }
            LogFormat::Compact => {
                let stderr_layer = fmt::layer()
                    .compact()
                    .with_writer(io::stderr)
                    .with_ansi(self.ansi)
                    .with_span_events(self.fmt_span());
                registry.with(file_layer).with(stderr_layer).try_init()?;
            }
        }

        info!(level = %self.level, file = ?self.file, "Logging initialized");
        Ok(LoggingGuard { _file_guard: file_guard })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_are_quiet() {
        let config = LoggingConfig::new();
        assert_eq!(config.level, Level::WARN);
        assert_eq!(config.format, LogFormat::Compact);
        assert!(config.file.is_none());
        assert!(!config.span_events);
        assert!(config.ansi);
        assert_eq!(config.default_directive(), "campus_access_register=WARN");
    }

    #[test]
    fn test_from_cli_args() {
        let args = CliArgs::try_parse_from(["test", "-v"]).unwrap();
        assert_eq!(LoggingConfig::from_cli_args(&args).level, Level::INFO);

        let args = CliArgs::try_parse_from(["test", "-v", "-d", "--log-dir", "logs"]).unwrap();
        let config = LoggingConfig::from_cli_args(&args);
        assert_eq!(config.level, Level::DEBUG);
        assert!(config.span_events);
        assert_eq!(
            config.file,
            Some(FileLogging {
                directory: PathBuf::from("logs"),
                prefix: "campus-access-register".to_string(),
            })
        );
    }

    #[test]
    fn test_builder() {
        let config = LoggingConfig::new().with_json().without_ansi().with_filter("debug");
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.ansi);
        assert_eq!(config.filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_filter_is_reported() {
        let config = LoggingConfig::new().with_filter("campus_access_register=loud");
        assert!(config.env_filter().is_err());
    }
}
