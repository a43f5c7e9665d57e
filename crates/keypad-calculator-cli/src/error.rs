//! Error types for the CLI

use keypad_calculator::error::KeypadError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// A label or element the calculator does not know
    #[error(transparent)]
    Keypad(#[from] KeypadError),

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_error_from() {
        let err: CliError = KeypadError::UnknownButton("sqrt".into()).into();
        assert_eq!(err.to_string(), "Unknown button: \"sqrt\"");
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let cli_err: CliError = io_err.into();
        assert!(cli_err.to_string().contains("I/O"));
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let cli_err: CliError = json_err.into();
        assert!(cli_err.to_string().starts_with("JSON error"));
    }
}
