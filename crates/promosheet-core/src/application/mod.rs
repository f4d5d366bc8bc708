//! Application layer for promosheet.
//!
//! This layer contains:
//! - **Services**: the sheet generation use case (`PromoSheetService`)
//! - **Ports**: traits for the adjustment files, lookup tables and writer
//! - **Errors**: orchestration and I/O failures reported by adapters
//!
//! Parsing and row rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{PromoSheetService, SheetSummary};

// Re-export port traits (for adapter implementation)
pub use ports::{AdjustmentSource, LookupSource, LookupTables, SheetWriter};

pub use error::ApplicationError;
