//! Custom error types and handling
//!
//! Contest rejections stay inside the handler as [`olympus_common::ContestError`]
//! and become protocol lines; the errors here belong to reading and writing the
//! command stream.

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Input errors
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCommand(_) => "INVALID_COMMAND",
            Self::Io(_) => "IO_ERROR",
        }
    }

    /// Whether the session can skip the offending line and keep going
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidCommand(_))
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::InvalidCommand("DANCE".to_string());
        assert_eq!(err.error_code(), "INVALID_COMMAND");
        assert!(err.is_recoverable());

        let err: AppError = std::io::Error::other("closed").into();
        assert_eq!(err.error_code(), "IO_ERROR");
        assert!(!err.is_recoverable());
    }
}
