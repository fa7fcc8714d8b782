//! Crate error type.
//!
//! The scheduling algorithms themselves are total over validated input and
//! never fail. Errors only arise at the edges: reading a batch, checking it,
//! and building a configuration.

use std::fmt;
use std::io;

use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading, validating, or configuring a simulation.
#[derive(Debug)]
pub enum Error {
    /// Input could not be read.
    Io(io::Error),
    /// A text record could not be parsed.
    Parse {
        /// 1-based line number in the input.
        line: usize,
        /// Human-readable description.
        message: String,
    },
    /// JSON input or configuration was malformed.
    Json(serde_json::Error),
    /// The batch violates loader preconditions.
    Validation(Vec<ValidationError>),
    /// Round-robin quantum must be at least 1.
    InvalidQuantum(i64),
    /// Invalid configuration (unknown algorithm name, empty selection, ...).
    Config(String),
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Parse { line, message } => write!(f, "line {line}: {message}"),
            Error::Json(e) => write!(f, "invalid JSON: {e}"),
            Error::Validation(errors) => {
                write!(f, "invalid process batch")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{}", e.message)?;
                }
                Ok(())
            }
            Error::InvalidQuantum(q) => write!(f, "quantum must be >= 1, got {q}"),
            Error::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<Vec<ValidationError>> for Error {
    fn from(errors: Vec<ValidationError>) -> Self {
        Error::Validation(errors)
    }
}
