//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the adapters
//! behind the ports. Parse and lookup rules fail with `DomainError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading inputs or writing the sheet.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Reading an input failed.
    #[error("I/O error at {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// No file under the input directory matched a pattern.
    #[error("No files matching '{pattern}' under {dir}")]
    NoInputFiles { dir: PathBuf, pattern: String },

    /// A lookup file row had the wrong shape.
    #[error("Malformed row {line} in {path}: expected {expected} columns, found {found}")]
    MalformedLookupRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// No adjustment supplied a bounded schedule, so the sheet has no title.
    #[error("No effective period found in adjustments for event '{event}'")]
    NoEffectivePeriod { event: String },

    /// A configured glob did not compile.
    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Writing the sheet failed.
    #[error("Failed to write sheet to {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Io { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check that the file exists and is readable".into(),
            ],
            Self::NoInputFiles { dir, pattern } => vec![
                format!("Looked for '{}' in {}", pattern, dir.display()),
                "Check [input] dir and the file patterns in your config".into(),
            ],
            Self::MalformedLookupRow { expected, .. } => vec![
                format!("Lookup rows carry {} '|'-separated columns", expected),
                "Re-export the lookup file".into(),
            ],
            Self::NoEffectivePeriod { event } => vec![
                format!("Check that adjustments for '{}' have an 'S' schedule record", event),
                "Both the start and end date must be set".into(),
            ],
            Self::InvalidPattern { .. } => {
                vec!["Patterns use glob syntax, e.g. 'adjustments_*.txt'".into()]
            }
            Self::WriteFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoInputFiles { .. } => ErrorCategory::NotFound,
            Self::MalformedLookupRow { .. } | Self::NoEffectivePeriod { .. } => {
                ErrorCategory::Input
            }
            Self::InvalidPattern { .. } => ErrorCategory::Configuration,
            Self::Io { .. } | Self::WriteFailed { .. } => ErrorCategory::Internal,
        }
    }
}
