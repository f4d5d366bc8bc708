//! Generate the promo sheet for the configured event.

use std::path::Path;

use tracing::{info, instrument};

use promosheet_adapters::{DelimitedSheetWriter, FileAdjustmentSource, FileLookupSource};
use promosheet_core::application::{PromoSheetService, SheetSummary};

use crate::{
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Build the file-backed service, run it, and print the summary.
#[instrument(skip_all, fields(event = %config.input.event))]
pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let input = &config.input;
    let sheet_path = config.sheet_path();

    let service = PromoSheetService::new(
        Box::new(FileAdjustmentSource::new(&input.dir, &input.adjustments)),
        Box::new(FileLookupSource::new(
            &input.dir,
            &input.item_info,
            &input.other_info,
            &input.signage,
        )),
        Box::new(DelimitedSheetWriter::new(&sheet_path)),
    )
    .with_program_name(&config.sheet.program_name);

    info!(input = %input.dir.display(), output = %sheet_path.display(), "Starting generation");
    let summary = service.generate(&input.event)?;

    report(&summary, &sheet_path, output).with_cli_context(|| "printing run summary")
}

fn report(summary: &SheetSummary, sheet_path: &Path, output: &OutputManager) -> std::io::Result<()> {
    if output.is_quiet() {
        return Ok(());
    }

    output.header(&summary.title)?;
    output.info(&format!(
        "Effective {} to {}",
        summary.period.start_label, summary.period.end_label
    ))?;

    let country = if summary.default_country {
        format!("Country: {} (default)", summary.country)
    } else {
        format!("Country: {}", summary.country)
    };
    output.info(&country)?;

    for warning in &summary.warnings {
        output.warning(&warning.to_string())?;
    }

    output.success(&format!(
        "Wrote {} rows from {} adjustments for {} to {}",
        summary.rows,
        summary.adjustments,
        summary.event,
        sheet_path.display()
    ))
}
