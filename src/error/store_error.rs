//! Unified error type for the storefront.

use std::fmt;

use crate::config::ConfigError;

use super::category::ErrorCategory;
use super::system::{classify_io_error, SystemError};
use super::ui::UiError;

/// Every failure the application can report, grouped by where it came from.
#[derive(Debug)]
pub enum StoreError {
    /// UI/terminal errors.
    Ui(UiError),

    /// System/filesystem errors.
    System(SystemError),

    /// Rejected environment overrides.
    Config(ConfigError),
}

impl StoreError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            StoreError::Ui(UiError::ChannelClosed { .. }) => ErrorCategory::Client,
            StoreError::Ui(err) => {
                if err.is_recoverable() {
                    ErrorCategory::User
                } else {
                    ErrorCategory::System
                }
            }
            StoreError::System(_) => ErrorCategory::System,
            StoreError::Config(_) => ErrorCategory::Configuration,
        }
    }

    /// Whether the event loop can keep going after this error.
    pub fn is_recoverable(&self) -> bool {
        match self {
            StoreError::Ui(err) => err.is_recoverable(),
            StoreError::System(SystemError::LoggingInitFailed { .. }) => true,
            StoreError::System(_) => false,
            StoreError::Config(_) => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Ui(err) => err.user_message(),
            StoreError::System(err) => err.user_message(),
            StoreError::Config(err) => err.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::Ui(err) => err.error_code(),
            StoreError::System(err) => err.error_code(),
            StoreError::Config(err) => err.error_code(),
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Ui(err) => write!(f, "{}", err),
            StoreError::System(err) => write!(f, "{}", err),
            StoreError::Config(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Ui(err) => Some(err),
            StoreError::System(err) => Some(err),
            StoreError::Config(err) => Some(err),
        }
    }
}

impl From<UiError> for StoreError {
    fn from(err: UiError) -> Self {
        StoreError::Ui(err)
    }
}

impl From<SystemError> for StoreError {
    fn from(err: SystemError) -> Self {
        StoreError::System(err)
    }
}

impl From<ConfigError> for StoreError {
    fn from(err: ConfigError) -> Self {
        StoreError::Config(err)
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::System(classify_io_error(err, None, "perform I/O"))
    }
}
