//! System-related error types.
//!
//! Filesystem and OS failures, mostly from preparing the log file.

use std::fmt;
use std::path::PathBuf;

/// System-specific error variants.
#[derive(Debug, Clone)]
pub enum SystemError {
    /// Permission denied for file/directory operation.
    PermissionDenied { path: PathBuf, operation: String },

    /// Failed to create directory.
    DirectoryCreationFailed { path: PathBuf, message: String },

    /// Generic I/O error.
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },

    /// A global tracing subscriber could not be installed.
    LoggingInitFailed { message: String },
}

impl SystemError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SystemError::PermissionDenied { path, operation } => {
                format!(
                    "Permission denied: Cannot {} '{}'.",
                    operation,
                    path.display()
                )
            }
            SystemError::DirectoryCreationFailed { path, .. } => {
                format!("Failed to create directory: '{}'.", path.display())
            }
            SystemError::IoError {
                operation, path, ..
            } => match path {
                Some(p) => format!("Failed to {} '{}'", operation, p.display()),
                None => format!("Failed to {}", operation),
            },
            SystemError::LoggingInitFailed { .. } => {
                "Logging could not be initialized; continuing without a log file.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::PermissionDenied { .. } => "E_SYS_PERM",
            SystemError::DirectoryCreationFailed { .. } => "E_SYS_DIR_CREATE",
            SystemError::IoError { .. } => "E_SYS_IO",
            SystemError::LoggingInitFailed { .. } => "E_SYS_LOG_INIT",
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::PermissionDenied { path, operation } => {
                write!(f, "Permission denied: {} '{}'", operation, path.display())
            }
            SystemError::DirectoryCreationFailed { path, message } => {
                write!(
                    f,
                    "Failed to create directory '{}': {}",
                    path.display(),
                    message
                )
            }
            SystemError::IoError {
                operation,
                path,
                message,
            } => match path {
                Some(p) => write!(
                    f,
                    "I/O error during {} at '{}': {}",
                    operation,
                    p.display(),
                    message
                ),
                None => write!(f, "I/O error during {}: {}", operation, message),
            },
            SystemError::LoggingInitFailed { message } => {
                write!(f, "Failed to install log subscriber: {}", message)
            }
        }
    }
}

impl std::error::Error for SystemError {}

/// Classify an I/O error into a SystemError.
pub fn classify_io_error(
    err: std::io::Error,
    path: Option<PathBuf>,
    operation: &str,
) -> SystemError {
    use std::io::ErrorKind;

    match (err.kind(), path) {
        (ErrorKind::PermissionDenied, Some(path)) => SystemError::PermissionDenied {
            path,
            operation: operation.to_string(),
        },
        (_, path) => SystemError::IoError {
            operation: operation.to_string(),
            path,
            message: err.to_string(),
        },
    }
}
