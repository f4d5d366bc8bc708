//! In-memory adjustment source for testing.

use promosheet_core::{
    application::ports::AdjustmentSource, domain::Adjustment, error::PromoResult,
};

/// Serves prebuilt adjustments, filtered by event like the file source.
#[derive(Debug, Clone, Default)]
pub struct MemoryAdjustmentSource {
    adjustments: Vec<Adjustment>,
}

impl MemoryAdjustmentSource {
    pub fn new(adjustments: Vec<Adjustment>) -> Self {
        Self { adjustments }
    }
}

impl AdjustmentSource for MemoryAdjustmentSource {
    fn load(&self, event: &str) -> PromoResult<Vec<Adjustment>> {
        Ok(self
            .adjustments
            .iter()
            .filter(|adjustment| adjustment.event().trim() == event)
            .cloned()
            .collect())
    }
}
