//! Promo sheet service - main application orchestrator.
//!
//! 1. Load adjustments for the event
//! 2. Load the lookup tables
//! 3. Build rows and frame them into a sheet
//! 4. Hand the sheet to the writer

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{AdjustmentSource, LookupSource, SheetWriter},
    },
    domain::{DEFAULT_PROGRAM_NAME, EffectivePeriod, PromoSheet, RunContext, RunWarning, build_rows},
    error::{PromoError, PromoResult},
};

/// Outcome of one run, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    pub event: String,
    pub adjustments: usize,
    pub rows: usize,
    pub country: String,
    /// The country came from the fallback, not from an adjustment.
    pub default_country: bool,
    pub period: EffectivePeriod,
    pub title: String,
    pub warnings: Vec<RunWarning>,
}

/// Generates one promo sheet per call.
pub struct PromoSheetService {
    adjustments: Box<dyn AdjustmentSource>,
    lookups: Box<dyn LookupSource>,
    writer: Box<dyn SheetWriter>,
    program_name: String,
}

impl PromoSheetService {
    pub fn new(
        adjustments: Box<dyn AdjustmentSource>,
        lookups: Box<dyn LookupSource>,
        writer: Box<dyn SheetWriter>,
    ) -> Self {
        Self {
            adjustments,
            lookups,
            writer,
            program_name: DEFAULT_PROGRAM_NAME.to_string(),
        }
    }

    /// Program name shown in the sheet title.
    pub fn with_program_name(mut self, program_name: impl Into<String>) -> Self {
        self.program_name = program_name.into();
        self
    }

    /// Generate and write the sheet for `event`.
    #[instrument(skip(self))]
    pub fn generate(&self, event: &str) -> PromoResult<SheetSummary> {
        if self.program_name.trim().is_empty() {
            return Err(PromoError::Configuration {
                message: "sheet program name is empty".into(),
            });
        }

        let adjustments = self.adjustments.load(event)?;
        if adjustments.is_empty() {
            warn!("No adjustments found for event");
        }
        info!(count = adjustments.len(), "Adjustments loaded");

        let tables = self.lookups.load()?;
        info!(
            styles = tables.colors.len(),
            other_info = tables.other_info.len(),
            signage = tables.signage.len(),
            "Lookup tables loaded"
        );

        let mut ctx = RunContext::new();
        let rows = build_rows(&adjustments, tables.as_lookups(), &mut ctx)?;

        let period = ctx
            .period()
            .cloned()
            .ok_or_else(|| ApplicationError::NoEffectivePeriod {
                event: event.to_string(),
            })?;

        let sheet = PromoSheet::new(ctx.country(), &self.program_name, &period, rows);
        self.writer.write(&sheet)?;
        info!(rows = sheet.rows().len(), title = %sheet.title(), "Promo sheet written");

        Ok(SheetSummary {
            event: event.to_string(),
            adjustments: adjustments.len(),
            rows: sheet.rows().len(),
            country: ctx.country().to_string(),
            default_country: ctx.is_default_country(),
            period,
            title: sheet.title().to_string(),
            warnings: ctx.warnings().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::ports::{
            LookupTables,
            output::{MockAdjustmentSource, MockLookupSource, MockSheetWriter},
        },
        domain::{Adjustment, AdjustmentBuilder, ColorVariant, DomainError},
    };

    fn adjustment(oid: &str, country: &str) -> Adjustment {
        AdjustmentBuilder::build([
            format!("A|{oid}|EXT|Header Desc|SPRING|RULE1"),
            format!("V|Country|{country}|"),
            "V|PromoCategory|Dresses|".into(),
            "S|2024-03-04|2024-03-10|00:00|24|Y|Y|Y|Y|Y|Y|Y".into(),
            "I|U1|Users|C1|Cust|CX|L1|Stores|LX|2024-03-04|2024-03-10|PG1|STYLE1|RED|Dress|49.99|USD".into(),
        ])
        .unwrap()
    }

    fn tables() -> LookupTables {
        let mut tables = LookupTables::default();
        tables.colors.insert(
            "STYLE1",
            "V1",
            ColorVariant {
                color: "Red".into(),
                description: "Red Dress".into(),
            },
        );
        tables
    }

    fn lookups() -> MockLookupSource {
        let mut lookups = MockLookupSource::new();
        lookups.expect_load().returning(|| Ok(tables()));
        lookups
    }

    #[test]
    fn generate_writes_sheet_and_summarizes() {
        let mut source = MockAdjustmentSource::new();
        source
            .expect_load()
            .withf(|event| event == "SPRING")
            .times(1)
            .returning(|_| Ok(vec![adjustment("1", "USA"), adjustment("2", "CAN")]));

        let mut writer = MockSheetWriter::new();
        writer
            .expect_write()
            .withf(|sheet| sheet.rows().len() == 2 && sheet.title().starts_with("USA OUTLET"))
            .times(1)
            .returning(|_| Ok(()));

        let service = PromoSheetService::new(Box::new(source), Box::new(lookups()), Box::new(writer))
            .with_program_name("OUTLET");
        let summary = service.generate("SPRING").unwrap();

        assert_eq!(summary.adjustments, 2);
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.country, "USA");
        assert!(!summary.default_country);
        assert_eq!(summary.period.start_label, "03/04/2024");
        assert_eq!(summary.title, "USA OUTLET (INCLUDES 2024) - March WEEK 10");
        assert!(matches!(
            summary.warnings.as_slice(),
            [RunWarning::CountryMismatch { .. }]
        ));
    }

    #[test]
    fn no_adjustments_means_no_period() {
        let mut source = MockAdjustmentSource::new();
        source.expect_load().returning(|_| Ok(vec![]));
        let mut writer = MockSheetWriter::new();
        writer.expect_write().never();

        let service = PromoSheetService::new(Box::new(source), Box::new(lookups()), Box::new(writer));
        let err = service.generate("SPRING").unwrap_err();

        assert!(matches!(
            err,
            PromoError::Application(ApplicationError::NoEffectivePeriod { .. })
        ));
    }

    #[test]
    fn source_errors_propagate_before_lookups_load() {
        let mut source = MockAdjustmentSource::new();
        source.expect_load().returning(|_| {
            Err(DomainError::UnknownRecordType {
                line: "Z|oops".into(),
            }
            .into())
        });
        let mut lookups = MockLookupSource::new();
        lookups.expect_load().never();
        let mut writer = MockSheetWriter::new();
        writer.expect_write().never();

        let service = PromoSheetService::new(Box::new(source), Box::new(lookups), Box::new(writer));
        let err = service.generate("SPRING").unwrap_err();

        assert_eq!(
            err,
            PromoError::Domain(DomainError::UnknownRecordType {
                line: "Z|oops".into()
            })
        );
    }

    #[test]
    fn blank_program_name_is_a_configuration_error() {
        let mut source = MockAdjustmentSource::new();
        source.expect_load().never();
        let mut writer = MockSheetWriter::new();
        writer.expect_write().never();

        let service = PromoSheetService::new(Box::new(source), Box::new(lookups()), Box::new(writer))
            .with_program_name("  ");
        let err = service.generate("SPRING").unwrap_err();

        assert!(matches!(err, PromoError::Configuration { .. }));
        assert_eq!(err.category(), crate::error::ErrorCategory::Configuration);
    }
}
