//! # Errors
//!
//! One error type for the whole crate, derived with `thiserror`.

use crate::core::Label;

/// Error type for OPTICS operations
#[derive(Debug, thiserror::Error)]
pub enum OpticsError {
    /// A text record could not be turned into a point
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Two input records share a label
    #[error("Duplicate label '{label}' (records {first} and {second})")]
    DuplicateLabel {
        label: Label,
        first: usize,
        second: usize,
    },

    /// A point has a NaN or infinite coordinate
    #[error("Point '{label}' has a non-finite coordinate")]
    NonFiniteCoordinate { label: Label },

    /// minPts / epsilon rejected before any distance is computed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// The caller asked the run to stop between two expansions
    #[error("Run cancelled after {processed} points")]
    Cancelled { processed: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, OpticsError>;

impl OpticsError {
    /// Create a parse error for a 1-based line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = OpticsError::parse(3, "expected 3 fields, got 2");
        assert_eq!(err.to_string(), "Parse error at line 3: expected 3 fields, got 2");
    }

    #[test]
    fn test_duplicate_display() {
        let err = OpticsError::DuplicateLabel {
            label: Label::new("A"),
            first: 0,
            second: 4,
        };
        assert_eq!(err.to_string(), "Duplicate label 'A' (records 0 and 4)");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: OpticsError = io.into();
        assert!(matches!(err, OpticsError::Io(_)));
    }
}
