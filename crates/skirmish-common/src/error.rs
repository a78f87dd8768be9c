//! Error types for Skirmish.
//!
//! Building combatants never fails; these errors only come out of the
//! configuration path.

use thiserror::Error;

/// Top-level error type for Skirmish operations.
#[derive(Debug, Error)]
pub enum SkirmishError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Schema version mismatch
    #[error("Schema version mismatch: expected {expected}, got {actual}")]
    VersionMismatch {
        /// Expected version
        expected: String,
        /// Actual version found
        actual: String,
    },

    /// A value was parsed but is out of range
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Skirmish operations.
pub type SkirmishResult<T> = Result<T, SkirmishError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_mismatch_message() {
        let err = SkirmishError::VersionMismatch {
            expected: "1.0.0".to_string(),
            actual: "2.0.0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Schema version mismatch: expected 1.0.0, got 2.0.0"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SkirmishError = io.into();
        assert!(matches!(err, SkirmishError::Io(_)));
    }
}
