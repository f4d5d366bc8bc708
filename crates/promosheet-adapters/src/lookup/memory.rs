//! In-memory lookup source for testing.

use promosheet_core::{
    application::ports::{LookupSource, LookupTables},
    domain::{AuxiliaryTable, ColorTable},
    error::PromoResult,
};

/// Serves fixed lookup tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryLookups {
    tables: LookupTables,
}

impl MemoryLookups {
    pub fn new(colors: ColorTable, other_info: AuxiliaryTable, signage: AuxiliaryTable) -> Self {
        Self {
            tables: LookupTables {
                colors,
                other_info,
                signage,
            },
        }
    }
}

impl From<LookupTables> for MemoryLookups {
    fn from(tables: LookupTables) -> Self {
        Self { tables }
    }
}

impl LookupSource for MemoryLookups {
    fn load(&self) -> PromoResult<LookupTables> {
        Ok(self.tables.clone())
    }
}
