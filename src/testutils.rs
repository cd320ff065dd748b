//! Test scaffolding — YAML fixture normalization and logger-bearing contexts.
//!
//! Inline YAML fixtures are easiest to write indented with tabs to match the
//! surrounding Rust, but YAML forbids tab indentation. [`format_yaml`] turns
//! such a fixture into bytes a YAML parser accepts.

use anyhow::Context as _;
use toolbox_core::{Config, Context, LogWriter, Logger, LoggingConfig, MemoryWriter};

/// Replace tab indentation in `input` with spaces.
///
/// A tab directly after a newline becomes one space; every other tab becomes
/// two. Tab-free input is returned unchanged, so the function is idempotent.
pub fn format_yaml(input: &str) -> Vec<u8> {
    input.replace("\n\t", "\n ").replace('\t', "  ").into_bytes()
}

/// Background context carrying a fresh `info` logger on stdout/stderr.
pub fn context_with_new_logger() -> anyhow::Result<Context> {
    context_with_logger_config(&Config::defaults().logging, std::io::stdout, std::io::stderr)
}

/// Background context carrying a logger built from `cfg` and the given writers.
pub fn context_with_logger_config<O, E>(
    cfg: &LoggingConfig,
    out: O,
    err: E,
) -> anyhow::Result<Context>
where
    O: LogWriter,
    E: LogWriter,
{
    let logger = Logger::from_config(cfg, out, err).context("unable to create logger")?;
    Ok(Context::background().with_logger(logger))
}

/// Background context carrying a standard logger at `level` whose output is
/// captured. Returns the context with the out and err buffers.
pub fn context_with_captured_logger(
    level: &str,
) -> anyhow::Result<(Context, MemoryWriter, MemoryWriter)> {
    let out = MemoryWriter::new();
    let err = MemoryWriter::new();
    let logger = Logger::new(out.clone(), err.clone(), level).context("unable to create logger")?;
    Ok((Context::background().with_logger(logger), out, err))
}
