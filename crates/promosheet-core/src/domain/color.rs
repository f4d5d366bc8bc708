//! Picks the color shown for a style on the promo sheet.
//!
//! The sheet does not list colors one row per SKU. A style with a single
//! variant shows that variant's color; a style with several collapses to one
//! `ALL` row carrying the description of its first variant. "First" is the
//! load order of the color table.

use crate::domain::entities::lookup::ColorTable;

/// Label used when a style has several colors.
pub const ALL_COLORS: &str = "ALL";

/// Variant count from which a style collapses to [`ALL_COLORS`].
const ALL_COLORS_QUANTITY: usize = 2;

/// Color label and description for a sheet row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColor {
    pub label: String,
    pub description: String,
}

/// Resolve the display color of a style.
///
/// Returns `None` when the style is not in the table; such styles are left
/// off the sheet.
pub fn resolve(style_code: &str, table: &ColorTable) -> Option<ResolvedColor> {
    let variants = table.variants(style_code)?;
    let (_, first) = variants.first()?;

    let label = if variants.len() >= ALL_COLORS_QUANTITY {
        ALL_COLORS.to_string()
    } else {
        first.color.clone()
    };

    Some(ResolvedColor {
        label,
        description: first.description.clone(),
    })
}
