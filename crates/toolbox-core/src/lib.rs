//! toolbox-core — logging, context and configuration types for toolbox.
//!
//! # Architecture
//!
//! ```text
//! Config ──► Logger ──► Context ──► downstream calls
//! ```
//!
//! A [`Logger`] owns its own `tracing` dispatcher and is never installed as a
//! process-wide default. Code that needs to log receives it through a
//! [`Context`] rather than a global.

pub mod config;
pub mod context;
pub mod error;
pub mod log;

pub use config::{Config, LoggingConfig};
pub use context::Context;
pub use error::{Error, Result};
pub use log::{LogFormat, LogWriter, Logger, MemoryWriter, Severity};
