//! One generated promo sheet row.

use serde::Serialize;

/// Flat output tuple for one style of one adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromoRow {
    pub category: String,
    pub promotion: String,
    pub style_code: String,
    pub color: String,
    pub color_description: String,
    pub signage: Vec<String>,
    pub other_info: Vec<String>,
}

impl PromoRow {
    /// Cells in sheet column order.
    pub fn cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(5 + self.signage.len() + self.other_info.len());
        cells.extend([
            self.category.clone(),
            self.promotion.clone(),
            self.style_code.clone(),
            self.color.clone(),
            self.color_description.clone(),
        ]);
        cells.extend(self.signage.iter().cloned());
        cells.extend(self.other_info.iter().cloned());
        cells
    }
}
