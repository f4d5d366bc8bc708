//! Adjustment source adapters.

mod file;
mod memory;

pub use file::{FileAdjustmentSource, read_matching};
pub use memory::MemoryAdjustmentSource;
