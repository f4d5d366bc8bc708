//! Item-info export to [`ColorTable`].
//!
//! Rows are 13 `|`-separated columns:
//!
//! ```text
//! variant_code|description|_|style_code|_|_|_|_|color|size|_|filter_code|_
//! ```
//!
//! Only rows whose filter code is `0` describe sellable colors; the rest are
//! counted and dropped.

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::info;

use promosheet_core::{
    application::ApplicationError,
    domain::{ColorTable, ColorVariant, FIELD_DELIMITER},
    error::PromoResult,
};

use crate::discovery;

const COLUMNS: usize = 13;
const VARIANT_CODE: usize = 0;
const DESCRIPTION: usize = 1;
const STYLE_CODE: usize = 3;
const COLOR: usize = 8;
const FILTER_CODE: usize = 11;

const INCLUDED_FILTER_CODE: &str = "0";

/// A loaded color table and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedColorTable {
    pub table: ColorTable,
    pub source: PathBuf,
    /// Rows dropped by the filter code.
    pub filtered: usize,
}

/// Loads the newest item-info file matching a pattern.
#[derive(Debug, Clone)]
pub struct ColorTableLoader {
    dir: PathBuf,
    pattern: String,
}

impl ColorTableLoader {
    pub fn new(dir: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            pattern: pattern.into(),
        }
    }

    pub fn load(&self) -> PromoResult<LoadedColorTable> {
        let source = discovery::newest(&self.dir, &self.pattern)?;
        let file = std::fs::File::open(&source).map_err(|e| ApplicationError::Io {
            path: source.clone(),
            reason: e.to_string(),
        })?;
        let (table, filtered) = read_color_table(file, &source)?;

        info!(
            file = %source.display(),
            styles = table.len(),
            filtered,
            "Color map loaded"
        );
        Ok(LoadedColorTable {
            table,
            source,
            filtered,
        })
    }
}

/// Parse item-info rows. Returns the table and the number of filtered rows.
pub fn read_color_table<R: Read>(input: R, path: &Path) -> PromoResult<(ColorTable, usize)> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER as u8)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(input);

    let mut table = ColorTable::new();
    let mut filtered = 0;
    for result in reader.records() {
        let record = result.map_err(|e| ApplicationError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if record.len() != COLUMNS {
            return Err(ApplicationError::MalformedLookupRow {
                path: path.to_path_buf(),
                line: record.position().map_or(0, |p| p.line()),
                expected: COLUMNS,
                found: record.len(),
            }
            .into());
        }

        if &record[FILTER_CODE] != INCLUDED_FILTER_CODE {
            filtered += 1;
            continue;
        }
        table.insert(
            &record[STYLE_CODE],
            &record[VARIANT_CODE],
            ColorVariant {
                color: record[COLOR].to_string(),
                description: record[DESCRIPTION].to_string(),
            },
        );
    }
    Ok((table, filtered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use promosheet_core::error::PromoError;

    fn row(variant: &str, style: &str, color: &str, filter: &str) -> String {
        format!("{variant}|{color} Dress|x|{style}|x|x|x|x|{color}|M|x|{filter}|x\n")
    }

    fn parse(content: &str) -> PromoResult<(ColorTable, usize)> {
        read_color_table(content.as_bytes(), Path::new("items.txt"))
    }

    #[test]
    fn included_rows_are_grouped_by_style() {
        let content = [
            row("V1", "S1", "Red", "0"),
            row("V2", "S1", "Blue", "0"),
            row("V3", "S2", "Green", "0"),
        ]
        .concat();
        let (table, filtered) = parse(&content).unwrap();

        assert_eq!(filtered, 0);
        assert_eq!(table.len(), 2);
        let s1: Vec<_> = table.variants("S1").unwrap().keys().cloned().collect();
        assert_eq!(s1, vec!["V1", "V2"]);
        assert_eq!(table.variants("S2").unwrap()["V3"].description, "Green Dress");
    }

    #[test]
    fn non_zero_filter_codes_are_counted_and_dropped() {
        let content = [row("V1", "S1", "Red", "0"), row("V2", "S1", "Blue", "1")].concat();
        let (table, filtered) = parse(&content).unwrap();
        assert_eq!(filtered, 1);
        assert_eq!(table.variants("S1").unwrap().len(), 1);
    }

    #[test]
    fn quotes_are_plain_data() {
        let content = "V1|12\" Skirt|x|S1|x|x|x|x|Red|M|x|0|x\n";
        let (table, _) = parse(content).unwrap();
        assert_eq!(table.variants("S1").unwrap()["V1"].description, "12\" Skirt");
    }

    #[test]
    fn short_row_is_malformed() {
        let content = [row("V1", "S1", "Red", "0"), "V2|only|three\n".to_string()].concat();
        let err = parse(&content).unwrap_err();
        assert!(matches!(
            err,
            PromoError::Application(ApplicationError::MalformedLookupRow {
                line: 2,
                expected: 13,
                found: 3,
                ..
            })
        ));
    }
}
