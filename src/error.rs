//! KS error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while computing a KS summary table
#[derive(Debug, Error)]
pub enum KsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Degenerate input: target needs both classes (bads={bads}, goods={goods})")]
    DegenerateInput { bads: u64, goods: u64 },

    #[error("Failed to write summary table to {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write report: {0}")]
    Console(#[source] std::io::Error),
}

impl KsError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        KsError::InvalidInput(msg.into())
    }

    pub(crate) fn file_write(path: impl Into<PathBuf>, source: impl Into<csv::Error>) -> Self {
        KsError::FileWrite {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Result type for KS operations
pub type Result<T> = std::result::Result<T, KsError>;
