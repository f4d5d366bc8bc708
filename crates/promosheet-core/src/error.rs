//! Unified error handling for promosheet core.
//!
//! Wraps domain and application errors with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for promosheet core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PromoError {
    /// Malformed adjustment data or an unsupported country.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Loading inputs or writing the sheet failed.
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl PromoError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file and PROMOSHEET__* variables".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in promosheet".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Structural => ErrorCategory::Input,
                crate::domain::ErrorCategory::Lookup => ErrorCategory::Input,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad adjustment or lookup data.
    Input,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type PromoResult<T> = Result<T, PromoError>;
