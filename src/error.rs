use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for filter operations
pub type Result<T> = std::result::Result<T, FilterError>;

/// Errors that abort a filter run
#[derive(Debug, Error)]
pub enum FilterError {
    /// Input path missing or unreadable
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Read/write failure, including truncated or corrupt compressed streams
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Mode string other than "r", "rt" or "rb"
    #[error("unsupported read mode '{0}' (expected r, rt or rb)")]
    UnsupportedMode(String),

    /// Data line that cannot be interpreted as a GFF record
    #[error("malformed GFF record at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

impl FilterError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }
}
