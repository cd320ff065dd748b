//! toolbox — test-support helpers.
//!
//! [`testutils`] holds the helpers integration tests reach for: normalizing
//! tab-indented YAML fixtures and building contexts that carry a logger. The
//! logging, context and config types they are built on live in
//! `toolbox-core` and are re-exported here.
//!
//! ```text
//! Config ──► Logger ──► Context ──► code under test
//! ```

pub mod testutils;

pub use toolbox_core::{
    config, context, log, Config, Context, Error, LogFormat, LogWriter, Logger, LoggingConfig,
    MemoryWriter, Severity,
};
