//! Application services (use case orchestrators).

mod sheet_service;

pub use sheet_service::{PromoSheetService, SheetSummary};
