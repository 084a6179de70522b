//! Error types for rusty-fxstats

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rusty-fxstats
///
/// Only the parser produces these. The query, series and statistics layers
/// have a defined answer for every well-typed input and never fail.
#[derive(Error, Debug)]
pub enum FxStatsError {
    #[error("Source unreadable: {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("Invalid date at line {line}: '{value}' ({reason})")]
    InvalidDate {
        line: usize,
        value: String,
        reason: String,
    },

    #[error("Invalid rate at line {line}: '{value}'")]
    InvalidRate { line: usize, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl FxStatsError {
    /// Source line the error refers to, when there is one
    pub fn line(&self) -> Option<usize> {
        match self {
            FxStatsError::MalformedRow { line, .. }
            | FxStatsError::InvalidDate { line, .. }
            | FxStatsError::InvalidRate { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type alias for rusty-fxstats operations
pub type Result<T> = std::result::Result<T, FxStatsError>;
