//! Error types for langcheck.
//!
//! Only resolution failures ever reach the process exit path. Config and
//! per-file I/O errors are downgraded by their callers.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for langcheck operations.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// The working file set could not be determined.
    #[error("failed to list files: {0}")]
    ResolutionError(String),

    /// The policy config file could not be read or parsed.
    #[error("{0}")]
    ConfigError(String),

    /// A single target file could not be read.
    #[error("{0}")]
    IoError(String),
}

impl PolicyError {
    /// Returns the process exit code for this error.
    ///
    /// `check::run` only propagates `ResolutionError`. Config errors become
    /// a printed warning and I/O errors a skipped file, so their arms are
    /// reached only by library callers that surface them directly. Those
    /// are operational failures too, never policy violations.
    pub fn exit_code(&self) -> i32 {
        match self {
            PolicyError::ResolutionError(_)
            | PolicyError::ConfigError(_)
            | PolicyError::IoError(_) => exit_codes::RESOLUTION_FAILURE,
        }
    }
}

/// Result type alias for langcheck operations.
pub type Result<T> = std::result::Result<T, PolicyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_error_has_distinct_exit_code() {
        let err = PolicyError::ResolutionError("git not found".to_string());
        assert_eq!(err.exit_code(), exit_codes::RESOLUTION_FAILURE);
        assert_ne!(err.exit_code(), exit_codes::POLICY_VIOLATION);
    }

    #[test]
    fn config_error_is_operational_failure() {
        let err = PolicyError::ConfigError("bad json".to_string());
        assert_eq!(err.exit_code(), exit_codes::RESOLUTION_FAILURE);
    }

    #[test]
    fn io_error_is_operational_failure() {
        let err = PolicyError::IoError("permission denied".to_string());
        assert_eq!(err.exit_code(), exit_codes::RESOLUTION_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = PolicyError::ResolutionError("git ls-files failed (exit code 128)".to_string());
        assert_eq!(
            err.to_string(),
            "failed to list files: git ls-files failed (exit code 128)"
        );

        let err = PolicyError::ConfigError("bad json".to_string());
        assert_eq!(err.to_string(), "bad json");
    }
}
