// ============================================================================
// domain/error.rs - PARSING AND LOOKUP ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they are carried through the run summary)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Structural parse errors
    // ========================================================================
    #[error("Invalid data type on line: {line}")]
    UnknownRecordType { line: String },

    #[error("record '{code}' expects {expected} fields, found {found}: {line}")]
    FieldArity {
        code: &'static str,
        expected: usize,
        found: usize,
        line: String,
    },

    #[error("record '{code}' appears before the adjustment header: {line}")]
    RecordBeforeHeader { code: &'static str, line: String },

    #[error("invalid {field} '{value}' ({reason}): {line}")]
    InvalidDate {
        field: &'static str,
        value: String,
        reason: String,
        line: String,
    },

    // ========================================================================
    // Constraint violations
    // ========================================================================
    #[error("adjustment has no header record")]
    MissingHeader,

    // ========================================================================
    // Lookup errors
    // ========================================================================
    #[error("no date format registered for country '{country}'")]
    UnsupportedCountry { country: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownRecordType { line } => vec![
                format!("Offending line: {line}"),
                "Known record types: A, D, S, U, C, L, P, V, CB, LB, I".into(),
            ],
            Self::FieldArity {
                code, expected, ..
            } => vec![
                format!("'{code}' records carry exactly {expected} fields after the type code"),
                "Check the export for stray or missing '|' delimiters".into(),
            ],
            Self::RecordBeforeHeader { .. } | Self::MissingHeader => vec![
                "Every adjustment file must start with an 'A' header record".into(),
            ],
            Self::InvalidDate { .. } => {
                vec!["Schedule dates must use the YYYY-MM-DD format".into()]
            }
            Self::UnsupportedCountry { country } => vec![
                format!("Country '{country}' has no export date format"),
                "Supported countries: USA, CAN".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownRecordType { .. }
            | Self::FieldArity { .. }
            | Self::RecordBeforeHeader { .. }
            | Self::InvalidDate { .. }
            | Self::MissingHeader => ErrorCategory::Structural,
            Self::UnsupportedCountry { .. } => ErrorCategory::Lookup,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Structural,
    Lookup,
}
