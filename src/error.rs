//! Error types for letterbag
//!
//! Every failure in the library is synchronous and leaves no partial state:
//! a rejected alphabet is never built and a rejected registration leaves the
//! registry unchanged.

use std::io;
use thiserror::Error;

/// Errors produced by the letter model, the locale registry, the matching
/// engine and the file loaders
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed alphabet construction input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unknown locale name or letter hash
    #[error("Not found: {0}")]
    NotFound(String),

    /// Locale name registered twice
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed alphabet file line (1-based)
    #[error("Format error on line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn already_exists<S: Into<String>>(msg: S) -> Self {
        Self::AlreadyExists(msg.into())
    }

    pub fn format<S: Into<String>>(line: usize, reason: S) -> Self {
        Self::Format {
            line,
            reason: reason.into(),
        }
    }
}
