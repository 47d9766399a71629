//! Centralized error handling for axdoc.
//!
//! Only faults that must abort a run are represented here: the metadata root
//! cannot be scanned, configuration is unreadable, or the output document
//! cannot be written. Per-object and per-partition faults raised by a
//! [`MetadataProvider`](crate::catalog::MetadataProvider) are absorbed by the
//! extractors and only ever show up as log lines and tally entries.
//!
//! ```no_run
//! use axdoc::error::{Result, ResultExt as _};
//! use std::fs;
//!
//! fn read_descriptor(path: &str) -> Result<String> {
//!     fs::read_to_string(path).context("Failed to read model descriptor")
//! }
//! ```

use std::path::PathBuf;

/// Main error type for axdoc operations.
#[derive(Debug, thiserror::Error)]
pub enum AxDocError {
    /// I/O errors (catalog scan, output file, config file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a record or configuration file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The metadata provider failed to list or read an object
    #[error("Provider error: {0}")]
    Provider(String),

    /// Partition discovery failed (root missing, unreadable, empty)
    #[error("Discovery error at {}: {message}", path.display())]
    Discovery { path: PathBuf, message: String },

    /// The category selection could not be parsed
    #[error("Invalid selection: {0}")]
    Selection(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl AxDocError {
    /// Shorthand for a provider fault.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Shorthand for a discovery fault rooted at `path`.
    pub fn discovery(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Discovery {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for axdoc operations.
pub type Result<T> = std::result::Result<T, AxDocError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped with `msg`.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped with the message from `f`.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<AxDocError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: AxDocError = e.into();
            AxDocError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: AxDocError = e.into();
            AxDocError::Other(format!("{}: {}", f(), err))
        })
    }
}
