use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts distinguish a bad invocation from a failure
/// that happened while fetching or presenting orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Orders were listed successfully (an empty list is still a success)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (repository failure, config error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised by the adapters and the CLI driver.
///
/// The list-orders use case never constructs these; it hands back
/// whatever its repository produced.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Orders file not found: {path}\n\n💡 Hint: {suggestion}")]
    OrderFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse orders file: {path}\nDetails: {details}\n\n💡 Hint: The file must contain a JSON array of orders, e.g. [{{\"id\": \"1\", \"price\": 10.0, \"tax\": 1.0}}]")]
    OrderFileParseError { path: PathBuf, details: String },

    #[error("Order service unavailable: {url}\nDetails: {details}\n\n💡 Hint: Check that the service is running and reachable")]
    RepositoryUnavailable { url: String, details: String },

    #[error("Invalid order source: {source_name}\nReason: {reason}\n\n💡 Hint: Use --source <FILE> for a JSON file or --url <URL> for an order service")]
    InvalidSource { source_name: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_order_file_not_found_display() {
        let error = OrderError::OrderFileNotFound {
            path: PathBuf::from("/data/orders.json"),
            suggestion: "Pass --source".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Orders file not found"));
        assert!(display.contains("/data/orders.json"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Pass --source"));
    }

    #[test]
    fn test_order_file_parse_error_display() {
        let error = OrderError::OrderFileParseError {
            path: PathBuf::from("orders.json"),
            details: "expected value at line 1 column 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse orders file"));
        assert!(display.contains("expected value"));
        assert!(display.contains("JSON array of orders"));
    }

    #[test]
    fn test_repository_unavailable_display() {
        let error = OrderError::RepositoryUnavailable {
            url: "http://localhost:8000/orders".to_string(),
            details: "connection refused".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Order service unavailable"));
        assert!(display.contains("http://localhost:8000/orders"));
        assert!(display.contains("connection refused"));
    }

    #[test]
    fn test_invalid_source_display() {
        let error = OrderError::InvalidSource {
            source_name: "ftp://orders".to_string(),
            reason: "Unsupported URL scheme".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid order source"));
        assert!(display.contains("ftp://orders"));
        assert!(display.contains("--url"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = OrderError::FileWriteError {
            path: PathBuf::from("/test/output.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_security_error_display() {
        let error = OrderError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Symbolic links are not allowed"));
        assert!(display.contains("Use a regular file instead"));
    }
}
