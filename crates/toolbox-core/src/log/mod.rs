//! Logging facility — writer-backed loggers with a minimum severity.
//!
//! A [`Logger`] wraps a private `tracing` [`Dispatch`] built from
//! `tracing-subscriber`'s fmt subscriber. Events are emitted with the logger's
//! dispatcher set as the thread-local default for the duration of the call, so
//! constructing or using a logger never touches the global subscriber.
//!
//! Every logger is bound to two writers:
//!
//! | Severity | Writer |
//! |----------|--------|
//! | `DEBUG`, `INFO` | out |
//! | `WARN`, `ERROR` | err |

mod memory;

pub use memory::MemoryWriter;

use std::fmt;
use std::str::FromStr;

use tracing::dispatcher::{self, Dispatch};
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::fmt::MakeWriter;

use crate::config::LoggingConfig;
use crate::{Error, Result};

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Minimum severity a logger emits. Ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Debug => write!(f, "DEBUG"),
            Severity::Info => write!(f, "INFO"),
            Severity::Warn => write!(f, "WARN"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            _ => Err(Error::InvalidLevel(s.to_string())),
        }
    }
}

impl From<Severity> for Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Debug => Level::DEBUG,
            Severity::Info => Level::INFO,
            Severity::Warn => Level::WARN,
            Severity::Error => Level::ERROR,
        }
    }
}

// ---------------------------------------------------------------------------
// LogFormat
// ---------------------------------------------------------------------------

/// Line format written by a logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogFormat {
    /// Human-readable text, one event per line.
    Standard,
    /// One JSON object per line, message flattened to a top-level `message` key.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Standard => write!(f, "standard"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(LogFormat::Standard),
            "json" => Ok(LogFormat::Json),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger
// ---------------------------------------------------------------------------

/// Anything a [`Logger`] can write to: `std::io::stdout`, a [`MemoryWriter`],
/// or any other `tracing-subscriber` [`MakeWriter`] that can cross threads.
pub trait LogWriter: for<'a> MakeWriter<'a> + Send + Sync + 'static {}

impl<T> LogWriter for T where T: for<'a> MakeWriter<'a> + Send + Sync + 'static {}

/// A cheaply clonable logging handle. Clones share the same writers.
#[derive(Debug, Clone)]
pub struct Logger {
    dispatch: Dispatch,
    severity: Severity,
    format: LogFormat,
}

impl Logger {
    /// Standard-format logger writing `DEBUG`/`INFO` to `out` and
    /// `WARN`/`ERROR` to `err`. Fails if `level` is not a known severity.
    pub fn new<O, E>(out: O, err: E, level: &str) -> Result<Self>
    where
        O: LogWriter,
        E: LogWriter,
    {
        Ok(Self::build(out, err, level.parse()?, LogFormat::Standard))
    }

    /// JSON-format logger with the same writer routing as [`Logger::new`].
    pub fn structured<O, E>(out: O, err: E, level: &str) -> Result<Self>
    where
        O: LogWriter,
        E: LogWriter,
    {
        Ok(Self::build(out, err, level.parse()?, LogFormat::Json))
    }

    /// Build from a `[logging]` config section. Level and format are
    /// validated here.
    pub fn from_config<O, E>(cfg: &LoggingConfig, out: O, err: E) -> Result<Self>
    where
        O: LogWriter,
        E: LogWriter,
    {
        let severity: Severity = cfg.level.parse()?;
        let format: LogFormat = cfg.format.parse()?;
        Ok(Self::build(out, err, severity, format))
    }

    fn build<O, E>(out: O, err: E, severity: Severity, format: LogFormat) -> Self
    where
        O: LogWriter,
        E: LogWriter,
    {
        let writer = err.with_max_level(Level::WARN).or_else(out);
        let builder = tracing_subscriber::fmt()
            .with_writer(writer)
            .with_max_level(Level::from(severity))
            .with_ansi(false)
            .with_target(false);

        let dispatch = match format {
            LogFormat::Standard => Dispatch::new(builder.finish()),
            LogFormat::Json => Dispatch::new(builder.json().flatten_event(true).finish()),
        };

        Self {
            dispatch,
            severity,
            format,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn format(&self) -> LogFormat {
        self.format
    }

    /// Whether an event at `severity` would be written.
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.severity
    }

    pub fn log(&self, severity: Severity, message: impl fmt::Display) {
        dispatcher::with_default(&self.dispatch, || match severity {
            Severity::Debug => tracing::debug!("{message}"),
            Severity::Info => tracing::info!("{message}"),
            Severity::Warn => tracing::warn!("{message}"),
            Severity::Error => tracing::error!("{message}"),
        });
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Severity::Debug, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(Severity::Info, message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Severity::Warn, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(Severity::Error, message);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
