//! Sheet writer adapters.

mod delimited;
mod memory;

pub use delimited::DelimitedSheetWriter;
pub use memory::MemorySheetWriter;
