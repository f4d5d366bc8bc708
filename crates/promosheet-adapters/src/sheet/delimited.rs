//! Tab-delimited sheet output.

use std::path::{Path, PathBuf};

use tracing::info;

use promosheet_core::{
    application::{ApplicationError, ports::SheetWriter},
    domain::PromoSheet,
    error::{PromoError, PromoResult},
};

const OUTPUT_DELIMITER: u8 = b'\t';

/// Writes every sheet record as one tab-separated line.
#[derive(Debug, Clone)]
pub struct DelimitedSheetWriter {
    path: PathBuf,
}

impl DelimitedSheetWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn failed(&self, reason: impl ToString) -> PromoError {
        ApplicationError::WriteFailed {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
        .into()
    }
}

impl SheetWriter for DelimitedSheetWriter {
    fn write(&self, sheet: &PromoSheet) -> PromoResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.failed(e))?;
        }

        info!(file = %self.path.display(), "Writing promo sheet");
        let mut writer = csv::WriterBuilder::new()
            .delimiter(OUTPUT_DELIMITER)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| self.failed(e))?;

        for record in sheet.records() {
            writer.write_record(&record).map_err(|e| self.failed(e))?;
        }
        writer.flush().map_err(|e| self.failed(e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use promosheet_core::domain::{EffectivePeriod, PromoRow};
    use tempfile::TempDir;

    fn sheet() -> PromoSheet {
        let period = EffectivePeriod {
            start: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            start_label: "03/04/2024".into(),
            end_label: "03/10/2024".into(),
        };
        let row = PromoRow {
            category: "Dresses".into(),
            promotion: "Header Desc".into(),
            style_code: "STYLE1".into(),
            color: "Red".into(),
            color_description: "Red Dress".into(),
            signage: vec![String::new()],
            other_info: vec![String::new(); 8],
        };
        PromoSheet::new("USA", "USA MARCIANO STORES", &period, vec![row])
    }

    #[test]
    fn writes_tab_separated_records_creating_parent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out/promo_sheet.tsv");
        DelimitedSheetWriter::new(&path).write(&sheet()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "USA USA MARCIANO STORES (INCLUDES 2024) - March WEEK 10\tEffective: 03/04/2024   03/10/2024"
        );
        assert!(lines[3].starts_with("Dresses\tHeader Desc\tSTYLE1\tRed\tRed Dress\t"));
        assert_eq!(lines[3].split('\t').count(), 14);
        assert!(lines[4].starts_with("*NEW PROMOTIONS"));
    }
}
