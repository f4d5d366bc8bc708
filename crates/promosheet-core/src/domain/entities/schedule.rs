//! `S` record: when an adjustment is in effect.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{
    codec::RecordLine,
    error::DomainError,
    value_objects::{INPUT_DATE_FORMAT, export_date_format},
};

/// Day-of-week flags of a schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Weekdays {
    pub mon: bool,
    pub tue: bool,
    pub wed: bool,
    pub thu: bool,
    pub fri: bool,
    pub sat: bool,
    pub sun: bool,
}

/// Effective period of an adjustment.
///
/// Dates are parsed once when the record is read. An empty date field means
/// the bound is undefined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    pub start_time: String,
    pub duration: String,
    pub days: Weekdays,
}

impl Schedule {
    pub fn from_line(line: &RecordLine) -> Result<Self, DomainError> {
        let [start, end, start_time, duration, mon, tue, wed, thu, fri, sat, sun] =
            line.payload::<11>()?;

        Ok(Self {
            start_date: parse_date("start date", start, line)?,
            end_date: parse_date("end date", end, line)?,
            start_time: start_time.clone(),
            duration: duration.clone(),
            days: Weekdays {
                mon: parse_flag(mon),
                tue: parse_flag(tue),
                wed: parse_flag(wed),
                thu: parse_flag(thu),
                fri: parse_flag(fri),
                sat: parse_flag(sat),
                sun: parse_flag(sun),
            },
        })
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Both bounds are defined.
    pub fn is_bounded(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_some()
    }

    /// Start date in the country's export format, empty when undefined.
    pub fn start_date_for(&self, country: &str) -> Result<String, DomainError> {
        render_date(self.start_date, country)
    }

    /// End date in the country's export format, empty when undefined.
    pub fn end_date_for(&self, country: &str) -> Result<String, DomainError> {
        render_date(self.end_date, country)
    }
}

/// Render a date for a country. An undefined date renders empty without
/// consulting the format table.
pub fn render_date(date: Option<NaiveDate>, country: &str) -> Result<String, DomainError> {
    match date {
        None => Ok(String::new()),
        Some(date) => Ok(date.format(export_date_format(country)?).to_string()),
    }
}

fn parse_date(
    field: &'static str,
    raw: &str,
    line: &RecordLine,
) -> Result<Option<NaiveDate>, DomainError> {
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, INPUT_DATE_FORMAT)
        .map(Some)
        .map_err(|e| DomainError::InvalidDate {
            field,
            value: raw.to_string(),
            reason: e.to_string(),
            line: line.raw.clone(),
        })
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_uppercase().as_str(),
        "1" | "Y" | "YES" | "T" | "TRUE"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(raw: &str) -> Result<Schedule, DomainError> {
        Schedule::from_line(&RecordLine::classify(raw).unwrap())
    }

    #[test]
    fn dates_render_per_country() {
        let s = schedule("S|2024-03-01|2024-03-31|00:00|24|Y|Y|Y|Y|Y|N|N").unwrap();
        assert!(s.is_bounded());
        assert_eq!(s.start_date_for("USA").unwrap(), "03/01/2024");
        assert_eq!(s.end_date_for("CAN").unwrap(), "03/31/2024");
    }

    #[test]
    fn unknown_country_fails_rendering() {
        let s = schedule("S|2024-03-01|2024-03-31|00:00|24|1|1|1|1|1|1|1").unwrap();
        assert_eq!(
            s.start_date_for("FRA"),
            Err(DomainError::UnsupportedCountry {
                country: "FRA".into()
            })
        );
    }

    #[test]
    fn empty_dates_render_empty() {
        let s = schedule("S|||00:00|24|0|0|0|0|0|0|0").unwrap();
        assert!(!s.is_bounded());
        assert_eq!(s.start_date(), None);
        // No lookup happens for an undefined date.
        assert_eq!(s.end_date_for("FRA").unwrap(), "");
    }

    #[test]
    fn malformed_date_is_fatal() {
        let raw = "S|03/01/2024|2024-03-31|00:00|24|0|0|0|0|0|0|0";
        let err = schedule(raw).unwrap_err();
        assert!(matches!(
            &err,
            DomainError::InvalidDate {
                field: "start date",
                line,
                ..
            } if line == raw
        ));
    }

    #[test]
    fn day_flags() {
        let s = schedule("S|2024-03-01|2024-03-31|08:00|12|Y|n|true|0|1|T|no").unwrap();
        assert_eq!(
            s.days,
            Weekdays {
                mon: true,
                tue: false,
                wed: true,
                thu: false,
                fri: true,
                sat: true,
                sun: false,
            }
        );
        assert_eq!(s.start_time, "08:00");
        assert_eq!(s.duration, "12");
    }
}
