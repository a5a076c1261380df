//! Error types.
//!
//! Only the I/O layer can fail. Rule matching and measure computation are
//! total over well-formed inputs; degenerate measures surface as
//! non-finite `f64` values, never as errors.

use std::path::PathBuf;

/// Errors produced while loading inputs or writing reports.
#[derive(Debug, thiserror::Error)]
pub enum SeqRuleError {
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("i/o error: {0}")]
    Stream(#[from] std::io::Error),

    #[error("malformed sequence database at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SeqRuleError {
    /// Wraps an [`std::io::Error`] with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SeqRuleError>;
