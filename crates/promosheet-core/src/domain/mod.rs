// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for promosheet.
//!
//! Pure parsing and row-building logic. Files, lookups on disk and the sheet
//! writer are reached through ports defined in the application layer.
//!
//! ## Layout
//!
//! - **codec / builder**: record lines to one [`Adjustment`]
//! - **color / rows**: adjustments plus lookup tables to [`PromoRow`]s
//! - **run_context**: first-seen country and period, plus warnings
//! - **sheet**: rows framed into the final [`PromoSheet`]

// Public API
pub mod builder;
pub mod codec;
pub mod color;
pub mod entities;
pub mod error;
pub mod rows;
pub mod run_context;
pub mod sheet;
pub mod value_objects;

// Re-exports for convenience
pub use builder::AdjustmentBuilder;
pub use codec::{FIELD_DELIMITER, RecordLine};
pub use color::{ALL_COLORS, ResolvedColor};
pub use entities::{
    adjustment::{Adjustment, CATEGORY_PARAMETER, COUNTRY_PARAMETER},
    hierarchy::{HierarchyNode, NodeBase},
    lookup::{AuxiliaryTable, ColorTable, ColorVariant},
    promo_row::PromoRow,
    records::{
        AdjustmentDescription, AdjustmentHeader, CustomerBusiness, ItemPrice, LocationBusiness,
        Parameter,
    },
    schedule::{Schedule, Weekdays},
};
pub use error::{DomainError, ErrorCategory};
pub use rows::{Lookups, OTHER_INFO_WIDTH, build_rows};
pub use run_context::{EffectivePeriod, RunContext, RunWarning};
pub use sheet::{DEFAULT_PROGRAM_NAME, PromoSheet};
pub use value_objects::{DEFAULT_COUNTRY, NodeKind, RecordType, export_date_format};
