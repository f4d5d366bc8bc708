//! Keyed `|`-separated tables: other item info (by style) and signage (by
//! adjustment oid).

use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::info;

use promosheet_core::{
    application::ApplicationError,
    domain::{AuxiliaryTable, FIELD_DELIMITER},
    error::PromoResult,
};

/// Loads one auxiliary table from a file.
#[derive(Debug, Clone)]
pub struct AuxiliaryTableLoader {
    path: PathBuf,
}

impl AuxiliaryTableLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> PromoResult<AuxiliaryTable> {
        let file = std::fs::File::open(&self.path).map_err(|e| ApplicationError::Io {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        let table = read_auxiliary_table(file, &self.path)?;
        info!(file = %self.path.display(), rows = table.len(), "Additional data loaded");
        Ok(table)
    }
}

/// Parse rows of any width. Trailing whitespace on a row is dropped.
pub fn read_auxiliary_table<R: Read>(input: R, path: &Path) -> PromoResult<AuxiliaryTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER as u8)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(input);

    let mut table = AuxiliaryTable::new();
    for result in reader.records() {
        let record = result.map_err(|e| ApplicationError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let last = record.len().saturating_sub(1);
        table.insert_row(
            record
                .iter()
                .enumerate()
                .map(|(i, field)| if i == last { field.trim_end() } else { field }),
        );
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn rows_are_keyed_by_first_field() {
        let content = "STYLE1|Dresses|D1|SD1|C1|Y|D2|SD2|C2|note  \nSTYLE2|Tops\n";
        let table = read_auxiliary_table(content.as_bytes(), Path::new("other.txt")).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("STYLE1").unwrap().last().unwrap(), "note");
        assert_eq!(table.get("STYLE2").unwrap(), &["Tops".to_string()]);
    }

    #[test]
    fn later_row_replaces_earlier_key() {
        let content = "100|OLD SIGN\n100|NEW SIGN\n";
        let table = read_auxiliary_table(content.as_bytes(), Path::new("signage.txt")).unwrap();
        assert_eq!(table.get("100").unwrap(), &["NEW SIGN".to_string()]);
    }

    #[test]
    fn loader_reads_file() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "100|40% OFF\r\n").unwrap();
        let table = AuxiliaryTableLoader::new(file.path()).load().unwrap();
        assert_eq!(table.get("100").unwrap(), &["40% OFF".to_string()]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AuxiliaryTableLoader::new("/nonexistent/signage.txt")
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("signage.txt"));
    }
}
