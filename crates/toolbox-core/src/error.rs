//! Error type shared by the logging, context and config modules.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Severity string was not one of `DEBUG`, `INFO`, `WARN`, `ERROR`.
    #[error("invalid log level: {0:?}")]
    InvalidLevel(String),

    /// Format string was not one of `standard`, `json`.
    #[error("invalid log format: {0:?}")]
    InvalidFormat(String),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error("unable to retrieve logger")]
    MissingLogger,
}
