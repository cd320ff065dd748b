//! Request-scoped context carrier.
//!
//! A [`Context`] is passed down call chains so that code which never receives
//! a [`Logger`] as a parameter can still log. Contexts are immutable: attaching
//! a logger returns a new context and leaves the original untouched. There is
//! no cancellation or deadline.

use crate::log::Logger;
use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct Context {
    logger: Option<Logger>,
}

impl Context {
    /// Empty top-level context.
    pub fn background() -> Self {
        Self::default()
    }

    /// Derive a context carrying `logger`, replacing any logger already attached.
    pub fn with_logger(&self, logger: Logger) -> Self {
        Self {
            logger: Some(logger),
        }
    }

    /// The attached logger, or [`Error::MissingLogger`].
    pub fn logger(&self) -> Result<&Logger> {
        self.logger.as_ref().ok_or(Error::MissingLogger)
    }
}
