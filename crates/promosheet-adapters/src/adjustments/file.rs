//! Adjustment files on disk.
//!
//! Each file is scanned for a header naming the target event. On the first
//! hit the reader is rewound and the whole file is built as one adjustment,
//! so a file contributes at most one adjustment.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use promosheet_core::{
    application::{ApplicationError, ports::AdjustmentSource},
    domain::{Adjustment, AdjustmentBuilder, FIELD_DELIMITER, RecordType},
    error::PromoResult,
};

use crate::discovery;

/// Position of the event code among a header line's fields, type code
/// included.
const HEADER_EVENT_FIELD: usize = 4;

/// Loads adjustments from files under a directory.
#[derive(Debug, Clone)]
pub struct FileAdjustmentSource {
    dir: PathBuf,
    pattern: String,
}

impl FileAdjustmentSource {
    pub fn new(dir: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            pattern: pattern.into(),
        }
    }
}

impl AdjustmentSource for FileAdjustmentSource {
    #[instrument(skip(self), fields(dir = %self.dir.display(), pattern = %self.pattern))]
    fn load(&self, event: &str) -> PromoResult<Vec<Adjustment>> {
        let files = discovery::discover(&self.dir, &self.pattern)?;
        if files.is_empty() {
            warn!("No adjustment files found");
        }

        let mut adjustments = Vec::new();
        for path in files {
            let file = File::open(&path).map_err(|e| io_error(&path, e))?;
            let mut reader = BufReader::new(file);
            if let Some(adjustment) = read_matching(&mut reader, event, &path)? {
                info!(oid = %adjustment.oid(), file = %path.display(), "Loaded adjustment");
                adjustments.push(adjustment);
            }
        }
        Ok(adjustments)
    }
}

/// Scan `reader` for a header of `event`; on a match rewind and build the
/// whole stream. `path` only labels errors.
pub fn read_matching<R>(reader: &mut R, event: &str, path: &Path) -> PromoResult<Option<Adjustment>>
where
    R: BufRead + Seek,
{
    let mut line = String::new();
    let mut found = false;
    loop {
        line.clear();
        if reader.read_line(&mut line).map_err(|e| io_error(path, e))? == 0 {
            break;
        }
        if is_event_header(&line, event) {
            found = true;
            break;
        }
    }
    if !found {
        return Ok(None);
    }

    reader
        .seek(SeekFrom::Start(0))
        .map_err(|e| io_error(path, e))?;

    let mut builder = AdjustmentBuilder::new();
    loop {
        line.clear();
        if reader.read_line(&mut line).map_err(|e| io_error(path, e))? == 0 {
            break;
        }
        builder.push_line(&line)?;
    }
    Ok(Some(builder.finish()?))
}

fn is_event_header(line: &str, event: &str) -> bool {
    let mut fields = line.split(FIELD_DELIMITER);
    let is_header = fields
        .next()
        .is_some_and(|code| code.trim() == RecordType::Header.code());
    is_header
        && fields
            .nth(HEADER_EVENT_FIELD - 1)
            .is_some_and(|field| field.trim() == event)
}

fn io_error(path: &Path, e: std::io::Error) -> promosheet_core::error::PromoError {
    ApplicationError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use promosheet_core::{domain::DomainError, error::PromoError};
    use std::io::Cursor;
    use tempfile::TempDir;

    const SPRING: &str = "A|100|EXT1|Header Desc|SPRING|RULE1\nV|Country|USA|\nV|PromoCategory|Dresses|\n";

    fn read(content: &str, event: &str) -> PromoResult<Option<Adjustment>> {
        read_matching(&mut Cursor::new(content.as_bytes()), event, Path::new("mem"))
    }

    #[test]
    fn matching_event_builds_whole_file() {
        let adjustment = read(SPRING, "SPRING").unwrap().unwrap();
        assert_eq!(adjustment.oid(), "100");
        assert_eq!(adjustment.country(), Some("USA"));
        assert_eq!(adjustment.category(), Some("Dresses"));
    }

    #[test]
    fn later_matching_header_supplies_the_header_fields() {
        let content = "A|1|E1|Summer Desc|SUMMER|R1\nV|Country|CAN|\nA|2|E2|Spring Desc|SPRING|R2\n";
        let adjustment = read(content, "SPRING").unwrap().unwrap();
        assert_eq!(adjustment.oid(), "2");
        assert_eq!(adjustment.event(), "SPRING");
        assert_eq!(adjustment.header_description(), "Spring Desc");
        // The body before the matching header is still part of the file.
        assert_eq!(adjustment.country(), Some("CAN"));
    }

    #[test]
    fn event_field_is_trimmed() {
        let content = "A|100|EXT1|Header Desc| SPRING \r\n";
        assert!(read(content, "SPRING").unwrap().is_some());
    }

    #[test]
    fn other_event_yields_nothing() {
        assert_eq!(read(SPRING, "FALL").unwrap(), None);
    }

    #[test]
    fn bad_record_in_matching_file_fails() {
        let content = format!("{SPRING}Z|bad\n");
        assert_eq!(
            read(&content, "SPRING").unwrap_err(),
            PromoError::Domain(DomainError::UnknownRecordType {
                line: "Z|bad".into()
            })
        );
    }

    #[test]
    fn bad_record_in_other_file_is_not_parsed() {
        let content = format!("{SPRING}Z|bad\n");
        assert_eq!(read(&content, "FALL").unwrap(), None);
    }

    #[test]
    fn source_loads_one_adjustment_per_matching_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("adj_1.txt"), SPRING).unwrap();
        std::fs::write(
            tmp.path().join("adj_2.txt"),
            "A|200|EXT2|Other|SPRING|RULE2\n",
        )
        .unwrap();
        std::fs::write(tmp.path().join("adj_3.txt"), "A|300|EXT3|Fall|FALL|RULE3\n").unwrap();

        let source = FileAdjustmentSource::new(tmp.path(), "adj_*.txt");
        let oids: Vec<_> = source
            .load("SPRING")
            .unwrap()
            .iter()
            .map(|a| a.oid().to_string())
            .collect();
        assert_eq!(oids, vec!["100", "200"]);
    }
}
