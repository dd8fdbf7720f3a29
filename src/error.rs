//! Error types for medalign

use thiserror::Error;

/// Result type alias for medalign operations
pub type Result<T> = std::result::Result<T, MedError>;

/// Error types that can occur in medalign
///
/// The dynamic-programming core is total over finite input, so the only
/// failures are configuration problems caught before any matrix is built,
/// inputs to traceback or narration that were not produced together, and
/// I/O from the interactive front end.
#[derive(Debug, Error)]
pub enum MedError {
    /// Rejected configuration value
    #[error("Invalid configuration for '{option}': {reason}")]
    InvalidConfig {
        /// Name of the offending option (e.g. "substitute", "gap_filler")
        option: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Matrix dimensions do not match the sequences it is used with
    #[error("Matrix shape mismatch: expected {expected:?}, got {actual:?}")]
    MatrixShape {
        /// (rows, cols) implied by the sequences
        expected: (usize, usize),
        /// (rows, cols) of the supplied matrix
        actual: (usize, usize),
    },

    /// Aligned rows that cannot form a valid alignment
    #[error("Malformed alignment: {0}")]
    MalformedAlignment(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MedError {
    /// Shorthand for building an [`MedError::InvalidConfig`]
    pub fn invalid_config(option: &'static str, reason: impl Into<String>) -> Self {
        MedError::InvalidConfig {
            option,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = MedError::invalid_config("insert", "cost must be non-negative, got -1");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for 'insert': cost must be non-negative, got -1"
        );
    }

    #[test]
    fn test_matrix_shape_display() {
        let err = MedError::MatrixShape {
            expected: (4, 3),
            actual: (2, 2),
        };
        assert_eq!(
            err.to_string(),
            "Matrix shape mismatch: expected (4, 3), got (2, 2)"
        );
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err = MedError::from(io);
        assert!(err.to_string().starts_with("I/O error"));
        assert!(err.source().is_some());
    }
}
