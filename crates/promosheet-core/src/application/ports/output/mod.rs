//! Driven (output) ports - implemented by infrastructure.

use crate::domain::{Adjustment, AuxiliaryTable, ColorTable, Lookups, PromoSheet};
use crate::error::PromoResult;

/// Port for loading adjustments.
///
/// Implemented by:
/// - `promosheet_adapters::FileAdjustmentSource` (production)
/// - `promosheet_adapters::MemoryAdjustmentSource` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait AdjustmentSource: Send + Sync {
    /// All adjustments for `event`, in a stable order.
    fn load(&self, event: &str) -> PromoResult<Vec<Adjustment>>;
}

/// The three tables joined into sheet rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTables {
    pub colors: ColorTable,
    /// Keyed by style code.
    pub other_info: AuxiliaryTable,
    /// Keyed by adjustment oid.
    pub signage: AuxiliaryTable,
}

impl LookupTables {
    pub fn as_lookups(&self) -> Lookups<'_> {
        Lookups {
            colors: &self.colors,
            other_info: &self.other_info,
            signage: &self.signage,
        }
    }
}

/// Port for loading the lookup tables.
///
/// Implemented by:
/// - `promosheet_adapters::FileLookupSource` (production)
/// - `promosheet_adapters::MemoryLookups` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait LookupSource: Send + Sync {
    fn load(&self) -> PromoResult<LookupTables>;
}

/// Port for writing the assembled sheet.
///
/// Implemented by:
/// - `promosheet_adapters::DelimitedSheetWriter` (production)
/// - `promosheet_adapters::MemorySheetWriter` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait SheetWriter: Send + Sync {
    fn write(&self, sheet: &PromoSheet) -> PromoResult<()>;
}
