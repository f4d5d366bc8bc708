//! Per-run accumulator for the country and effective period.
//!
//! The first value seen wins. Later disagreements and missing data are
//! recorded as [`RunWarning`]s and logged; they never abort the run.

use std::fmt;

use chrono::NaiveDate;
use tracing::warn;

use crate::domain::{
    entities::adjustment::Adjustment,
    error::DomainError,
    value_objects::DEFAULT_COUNTRY,
};

/// Effective period adopted for the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectivePeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// `start` rendered for the run country.
    pub start_label: String,
    /// `end` rendered for the run country.
    pub end_label: String,
}

/// A recoverable condition met while building rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunWarning {
    MissingCountry { oid: String },
    CountryMismatch {
        oid: String,
        adopted: String,
        found: String,
    },
    DefaultCountry { country: String },
    MissingSchedule { oid: String },
    UndefinedPeriod { oid: String },
    PeriodMismatch {
        oid: String,
        adopted: (String, String),
        found: (String, String),
    },
    MissingCategory { oid: String },
}

impl fmt::Display for RunWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCountry { oid } => {
                write!(f, "There is no country parameter in adjustment OID={oid}")
            }
            Self::CountryMismatch {
                oid,
                adopted,
                found,
            } => write!(
                f,
                "Country value in adjustment OID={oid} is different ({found}, run uses {adopted})"
            ),
            Self::DefaultCountry { country } => {
                write!(f, "No adjustment names a country; used default {country}")
            }
            Self::MissingSchedule { oid } => {
                write!(f, "There is no schedule in adjustment OID={oid}")
            }
            Self::UndefinedPeriod { oid } => write!(
                f,
                "The period in the adjustment schedule is not defined in adjustment OID={oid}"
            ),
            Self::PeriodMismatch {
                oid,
                adopted,
                found,
            } => write!(
                f,
                "The dates in schedule of adjustment OID={oid} are different ({} - {}, run uses {} - {})",
                found.0, found.1, adopted.0, adopted.1
            ),
            Self::MissingCategory { oid } => {
                write!(f, "There is no PromoCategory parameter in adjustment OID={oid}")
            }
        }
    }
}

/// Explicit accumulator threaded through row building.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    country: Option<String>,
    defaulted: bool,
    period: Option<EffectivePeriod>,
    warnings: Vec<RunWarning>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Country dates are rendered with: the adopted one, or the fallback
    /// while none has been seen.
    pub fn country(&self) -> &str {
        self.country.as_deref().unwrap_or(DEFAULT_COUNTRY)
    }

    /// Whether the run country came from the fallback rather than an
    /// adjustment.
    pub fn is_default_country(&self) -> bool {
        self.defaulted
    }

    pub fn period(&self) -> Option<&EffectivePeriod> {
        self.period.as_ref()
    }

    pub fn warnings(&self) -> &[RunWarning] {
        &self.warnings
    }

    /// Adopt the adjustment's `Country` parameter on first sight; warn on a
    /// later mismatch or when the parameter is missing.
    pub fn observe_country(&mut self, adjustment: &Adjustment) {
        let Some(found) = adjustment.country() else {
            self.record(RunWarning::MissingCountry {
                oid: adjustment.oid().to_string(),
            });
            return;
        };

        match &self.country {
            None => self.country = Some(found.to_string()),
            Some(adopted) if adopted != found => {
                let warning = RunWarning::CountryMismatch {
                    oid: adjustment.oid().to_string(),
                    adopted: adopted.clone(),
                    found: found.to_string(),
                };
                self.record(warning);
            }
            Some(_) => {}
        }
    }

    /// Adopt the adjustment's schedule period on first sight; warn when it is
    /// missing, unbounded, or differs from the adopted period.
    ///
    /// Fails only when the current country has no date format.
    pub fn observe_period(&mut self, adjustment: &Adjustment) -> Result<(), DomainError> {
        let oid = adjustment.oid();
        let Some(schedule) = adjustment.schedule() else {
            self.record(RunWarning::MissingSchedule {
                oid: oid.to_string(),
            });
            return Ok(());
        };

        let (Some(start), Some(end)) = (schedule.start_date(), schedule.end_date()) else {
            self.record(RunWarning::UndefinedPeriod {
                oid: oid.to_string(),
            });
            return Ok(());
        };

        let country = self.country().to_string();
        let found = (
            schedule.start_date_for(&country)?,
            schedule.end_date_for(&country)?,
        );

        match &self.period {
            None => {
                self.period = Some(EffectivePeriod {
                    start,
                    end,
                    start_label: found.0,
                    end_label: found.1,
                });
            }
            Some(adopted) if (&adopted.start_label, &adopted.end_label) != (&found.0, &found.1) => {
                let warning = RunWarning::PeriodMismatch {
                    oid: oid.to_string(),
                    adopted: (adopted.start_label.clone(), adopted.end_label.clone()),
                    found,
                };
                self.record(warning);
            }
            Some(_) => {}
        }
        Ok(())
    }

    /// Fall back to the default country if no adjustment supplied one.
    /// Warns once per run.
    pub fn settle_country(&mut self) {
        if self.country.is_none() {
            self.country = Some(DEFAULT_COUNTRY.to_string());
            self.defaulted = true;
            self.record(RunWarning::DefaultCountry {
                country: DEFAULT_COUNTRY.to_string(),
            });
        }
    }

    pub(crate) fn record(&mut self, warning: RunWarning) {
        warn!("{warning}");
        self.warnings.push(warning);
    }
}
