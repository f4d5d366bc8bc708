//! Lookup table adapters.

mod auxiliary;
mod color_table;
mod memory;

use std::path::PathBuf;

use promosheet_core::{
    application::ports::{LookupSource, LookupTables},
    error::PromoResult,
};

pub use auxiliary::{AuxiliaryTableLoader, read_auxiliary_table};
pub use color_table::{ColorTableLoader, LoadedColorTable, read_color_table};
pub use memory::MemoryLookups;

/// Loads all three lookup tables from files in the input directory.
#[derive(Debug, Clone)]
pub struct FileLookupSource {
    colors: ColorTableLoader,
    other_info: AuxiliaryTableLoader,
    signage: AuxiliaryTableLoader,
}

impl FileLookupSource {
    /// `item_info` is a glob; `other_info` and `signage` are file names.
    pub fn new(
        dir: impl Into<PathBuf>,
        item_info: impl Into<String>,
        other_info: &str,
        signage: &str,
    ) -> Self {
        let dir = dir.into();
        Self {
            colors: ColorTableLoader::new(dir.clone(), item_info),
            other_info: AuxiliaryTableLoader::new(dir.join(other_info)),
            signage: AuxiliaryTableLoader::new(dir.join(signage)),
        }
    }
}

impl LookupSource for FileLookupSource {
    fn load(&self) -> PromoResult<LookupTables> {
        Ok(LookupTables {
            other_info: self.other_info.load()?,
            signage: self.signage.load()?,
            colors: self.colors.load()?.table,
        })
    }
}
