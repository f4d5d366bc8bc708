//! Application ports (traits) for external dependencies.
//!
//! Adapters in `promosheet-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application
//!   - `AdjustmentSource`: adjustments selected by event
//!   - `LookupSource`: color table and auxiliary tables
//!   - `SheetWriter`: the finished sheet
//!
//! - **Driving (Input) Ports**: the CLI calls `PromoSheetService` directly.

pub mod output;

pub use output::{AdjustmentSource, LookupSource, LookupTables, SheetWriter};
