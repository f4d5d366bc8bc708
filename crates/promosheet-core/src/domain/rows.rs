//! Merges adjustments with the lookup tables into promo sheet rows.

use tracing::debug;

use crate::domain::{
    color,
    entities::{adjustment::Adjustment, lookup::AuxiliaryTable, lookup::ColorTable, promo_row::PromoRow},
    error::DomainError,
    run_context::{RunContext, RunWarning},
};

/// Cells the other-info payload contributes when a style has no entry.
pub const OTHER_INFO_WIDTH: usize = 8;

/// Read-only lookups joined into every row.
#[derive(Debug, Clone, Copy)]
pub struct Lookups<'a> {
    pub colors: &'a ColorTable,
    /// Keyed by style code.
    pub other_info: &'a AuxiliaryTable,
    /// Keyed by adjustment oid.
    pub signage: &'a AuxiliaryTable,
}

/// Build the rows of every adjustment, in adjustment-then-style order.
///
/// Country and period are adopted into `ctx` as adjustments are visited.
/// Styles missing from the color table produce no row.
pub fn build_rows(
    adjustments: &[Adjustment],
    lookups: Lookups<'_>,
    ctx: &mut RunContext,
) -> Result<Vec<PromoRow>, DomainError> {
    let mut rows = Vec::new();
    for adjustment in adjustments {
        ctx.observe_country(adjustment);
        ctx.observe_period(adjustment)?;
        rows.extend(adjustment_rows(adjustment, lookups, ctx));
    }
    ctx.settle_country();
    Ok(rows)
}

fn adjustment_rows(
    adjustment: &Adjustment,
    lookups: Lookups<'_>,
    ctx: &mut RunContext,
) -> Vec<PromoRow> {
    let category = match adjustment.category() {
        Some(category) => category.to_string(),
        None => {
            ctx.record(RunWarning::MissingCategory {
                oid: adjustment.oid().to_string(),
            });
            String::new()
        }
    };

    let signage = lookups
        .signage
        .get(adjustment.oid())
        .map(<[String]>::to_vec)
        .unwrap_or_else(|| vec![String::new()]);

    let rows: Vec<PromoRow> = adjustment
        .distinct_styles()
        .into_iter()
        .filter_map(|style| {
            let resolved = color::resolve(style, lookups.colors)?;
            Some(PromoRow {
                category: category.clone(),
                promotion: adjustment.header_description().to_string(),
                style_code: style.to_string(),
                color: resolved.label,
                color_description: resolved.description,
                signage: signage.clone(),
                other_info: other_info(lookups.other_info, style),
            })
        })
        .collect();

    debug!(oid = %adjustment.oid(), rows = rows.len(), "Built adjustment rows");
    rows
}

fn other_info(table: &AuxiliaryTable, style: &str) -> Vec<String> {
    match table.get(style) {
        // The first payload field is the item category, which the sheet
        // takes from the adjustment's PromoCategory instead.
        Some(payload) => payload.iter().skip(1).cloned().collect(),
        None => vec![String::new(); OTHER_INFO_WIDTH],
    }
}
