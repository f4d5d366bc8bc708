//! Infrastructure adapters for promosheet.
//!
//! This crate implements the ports defined in
//! `promosheet-core::application::ports`. All file I/O lives here.

pub mod adjustments;
pub mod discovery;
pub mod lookup;
pub mod sheet;

// Re-export commonly used adapters
pub use adjustments::{FileAdjustmentSource, MemoryAdjustmentSource};
pub use lookup::{AuxiliaryTableLoader, ColorTableLoader, FileLookupSource, MemoryLookups};
pub use sheet::{DelimitedSheetWriter, MemorySheetWriter};
