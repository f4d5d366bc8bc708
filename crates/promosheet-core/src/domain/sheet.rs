//! The promo sheet document: banner, column headers, rows, footer.

use chrono::Datelike;
use serde::Serialize;

use crate::domain::{entities::promo_row::PromoRow, run_context::EffectivePeriod};

/// Program name used in the title when none is configured.
pub const DEFAULT_PROGRAM_NAME: &str = "USA MARCIANO STORES";

pub const SECTION_HEADERS: [&str; 3] = ["INCLUSIONS", "EXCLUSIONS", "NOTES"];

pub const COLUMNS: [&str; 15] = [
    "Category",
    "Promotion",
    "Style #",
    "COLOR",
    "STYLE DESCRIPTION",
    "MERCHANDISING/SIGNAGE",
    "DEPT",
    "SUBDEPT",
    "CLASS",
    "POS?",
    "DEPT",
    "SUBDEPT",
    "CLASS",
    "NOTES",
    "",
];

pub const FOOTER: &str = "*NEW PROMOTIONS AND ANY    CHANGES ARE BOLDED AND HIGHLIGHTED IN GREY";

/// A fully assembled sheet, ready to be written record by record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromoSheet {
    title: String,
    start: String,
    end: String,
    rows: Vec<PromoRow>,
}

impl PromoSheet {
    pub fn new(
        country: &str,
        program_name: &str,
        period: &EffectivePeriod,
        rows: Vec<PromoRow>,
    ) -> Self {
        let week = period.start.iso_week();
        let title = format!(
            "{country} {program_name} (INCLUDES {year}) - {month} WEEK {week}",
            year = week.year(),
            month = period.start.format("%B"),
            week = week.week(),
        );

        Self {
            title,
            start: period.start_label.clone(),
            end: period.end_label.clone(),
            rows,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rows(&self) -> &[PromoRow] {
        &self.rows
    }

    /// Every output record in order: title block, banner, column header,
    /// data rows, footer. Records have varying lengths.
    pub fn records(&self) -> Vec<Vec<String>> {
        let mut records = Vec::with_capacity(self.rows.len() + 4);
        records.push(vec![
            self.title.clone(),
            format!("Effective: {}   {}", self.start, self.end),
        ]);

        let mut banner = vec![format!("PROMO SHEET EFFECTIVE {} {}", self.start, self.end)];
        banner.extend(SECTION_HEADERS.iter().map(|h| h.to_string()));
        records.push(banner);

        records.push(COLUMNS.iter().map(|c| c.to_string()).collect());
        records.extend(self.rows.iter().map(PromoRow::cells));
        records.push(vec![FOOTER.to_string()]);
        records
    }
}
