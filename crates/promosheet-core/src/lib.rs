//! promosheet core - hexagonal architecture implementation
//!
//! Domain and application layers for turning pipe-delimited pricing
//! adjustment exports into a weekly promo sheet.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          promosheet-cli (CLI)           │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          PromoSheetService              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   Ports (AdjustmentSource, LookupSource,│
//! │          SheetWriter)                   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   promosheet-adapters (files, memory)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   Domain (codec, builder, rows, sheet)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use promosheet_core::domain::AdjustmentBuilder;
//!
//! let adjustment = AdjustmentBuilder::build([
//!     "A|100|EXT1|Header Desc|SPRING|RULE1",
//!     "V|Country|USA|",
//! ])
//! .unwrap();
//! assert_eq!(adjustment.country(), Some("USA"));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, PromoSheetService, SheetSummary,
        ports::{AdjustmentSource, LookupSource, LookupTables, SheetWriter},
    };
    pub use crate::domain::{
        Adjustment, AdjustmentBuilder, AuxiliaryTable, ColorTable, ColorVariant, DomainError,
        PromoRow, PromoSheet, RunWarning,
    };
    pub use crate::error::{PromoError, PromoResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
