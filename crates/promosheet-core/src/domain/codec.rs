//! Line codec for the adjustment record format.
//!
//! A line is a `|`-separated field list whose first field is the record type
//! code. The codec only classifies and splits; arity and content checks
//! belong to the per-record constructors in `entities`.

use crate::domain::{error::DomainError, value_objects::RecordType};

/// Field delimiter of the adjustment record format.
pub const FIELD_DELIMITER: char = '|';

/// One classified line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLine {
    pub record_type: RecordType,
    /// Payload fields after the type code, in declared order.
    pub fields: Vec<String>,
    /// The line as read, without its terminator.
    pub raw: String,
}

impl RecordLine {
    /// Classify a line. Trailing whitespace, terminator included, is
    /// stripped.
    pub fn classify(line: &str) -> Result<Self, DomainError> {
        let raw = line.trim_end();
        let mut parts = raw.split(FIELD_DELIMITER);
        // `split` always yields at least one item.
        let code = parts.next().unwrap_or_default();

        let record_type = code
            .parse::<RecordType>()
            .map_err(|()| DomainError::UnknownRecordType {
                line: raw.to_string(),
            })?;

        Ok(Self {
            record_type,
            fields: parts.map(str::to_string).collect(),
            raw: raw.to_string(),
        })
    }

    /// The payload as a fixed-size array, or an arity error naming the type
    /// code when the line carries a different number of fields.
    pub fn payload<const N: usize>(&self) -> Result<&[String; N], DomainError> {
        debug_assert_eq!(N, self.record_type.arity(), "payload size for {}", self.record_type);
        <&[String; N]>::try_from(self.fields.as_slice()).map_err(|_| DomainError::FieldArity {
            code: self.record_type.code(),
            expected: N,
            found: self.fields.len(),
            line: self.raw.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_line_is_split_in_order() {
        let line = RecordLine::classify("A|100|EXT1|Header Desc|SPRING|RULE1\n").unwrap();
        assert_eq!(line.record_type, RecordType::Header);
        assert_eq!(
            line.fields,
            vec!["100", "EXT1", "Header Desc", "SPRING", "RULE1"]
        );
        assert_eq!(line.raw, "A|100|EXT1|Header Desc|SPRING|RULE1");
    }

    #[test]
    fn trailing_delimiter_keeps_empty_field() {
        let line = RecordLine::classify("V|Country|USA|\r\n").unwrap();
        assert_eq!(line.fields, vec!["Country", "USA", ""]);
    }

    #[test]
    fn trailing_whitespace_leaves_last_field() {
        let line = RecordLine::classify("A|100|EXT1|Header Desc|SPRING \t \r\n").unwrap();
        assert_eq!(line.fields[3], "SPRING");
        assert_eq!(line.raw, "A|100|EXT1|Header Desc|SPRING");
    }

    #[test]
    fn two_letter_codes_are_recognised() {
        assert_eq!(
            RecordLine::classify("CB|C1").unwrap().record_type,
            RecordType::CustomerBusiness
        );
        assert_eq!(
            RecordLine::classify("LB|S1|Z1|BU1").unwrap().record_type,
            RecordType::LocationBusiness
        );
    }

    #[test]
    fn unknown_code_names_the_line() {
        let err = RecordLine::classify("Z|foo|bar\n").unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownRecordType {
                line: "Z|foo|bar".into()
            }
        );
    }

    #[test]
    fn blank_line_is_unknown() {
        assert!(matches!(
            RecordLine::classify("\n"),
            Err(DomainError::UnknownRecordType { .. })
        ));
    }

    #[test]
    fn codec_does_not_check_arity() {
        let line = RecordLine::classify("V|Country").unwrap();
        assert_eq!(line.fields.len(), 1);
        let err = line.payload::<3>().unwrap_err();
        assert!(matches!(
            err,
            DomainError::FieldArity {
                code: "V",
                expected: 3,
                found: 1,
                ..
            }
        ));
    }
}
