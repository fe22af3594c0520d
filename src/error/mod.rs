//! Error handling for the storefront.
//!
//! - **Error Categories**: High-level classification for handling decisions
//! - **Domain-specific Errors**: UI and system errors, plus [`ConfigError`]
//!   from the config module
//! - **Unified Error Type**: `StoreError` consolidates all error types
//! - **Result Type Alias**: `StoreResult<T>` for consistent return types
//!
//! Only startup can really fail. Once the event loop runs, loads cannot
//! fail and a stale completion is dropped rather than reported.
//!
//! [`ConfigError`]: crate::config::ConfigError

mod category;
mod store_error;
mod system;
mod ui;

pub use category::ErrorCategory;
pub use store_error::StoreError;
pub use system::{classify_io_error, SystemError};
pub use ui::UiError;

/// Type alias for Results using StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn fails_with_io() -> StoreResult<()> {
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
        Ok(())
    }

    #[test]
    fn test_question_mark_converts_io_errors() {
        let err = fails_with_io().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.error_code(), "E_SYS_IO");
    }

    #[test]
    fn test_user_messages_are_not_empty() {
        let errors: Vec<StoreError> = vec![
            UiError::TerminalInitFailed {
                message: "x".to_string(),
            }
            .into(),
            SystemError::LoggingInitFailed {
                message: "x".to_string(),
            }
            .into(),
        ];
        for err in errors {
            assert!(!err.user_message().is_empty());
            assert!(!err.recovery_hint().is_empty());
        }
    }
}
