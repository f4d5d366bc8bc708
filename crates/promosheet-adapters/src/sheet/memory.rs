//! In-memory sheet writer for testing.

use std::sync::{Arc, RwLock};

use promosheet_core::{
    application::ports::SheetWriter,
    domain::PromoSheet,
    error::{PromoError, PromoResult},
};

/// Keeps the records of every written sheet. Clones share storage.
#[derive(Debug, Clone, Default)]
pub struct MemorySheetWriter {
    written: Arc<RwLock<Vec<Vec<Vec<String>>>>>,
}

impl MemorySheetWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records of the last written sheet (testing helper).
    pub fn last(&self) -> Option<Vec<Vec<String>>> {
        self.written.read().ok()?.last().cloned()
    }

    /// Number of sheets written.
    pub fn count(&self) -> usize {
        self.written.read().map(|w| w.len()).unwrap_or(0)
    }
}

impl SheetWriter for MemorySheetWriter {
    fn write(&self, sheet: &PromoSheet) -> PromoResult<()> {
        let mut written = self.written.write().map_err(|_| PromoError::Internal {
            message: "sheet writer lock poisoned".into(),
        })?;
        written.push(sheet.records());
        Ok(())
    }
}
