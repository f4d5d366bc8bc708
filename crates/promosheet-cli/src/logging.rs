//! Tracing subscriber initialisation.
//!
//! Only the CLI crate calls [`init_logging`]; `promosheet-core` and the
//! adapters only emit events.
//!
//! # Level selection
//!
//! | Source              | Filter level        |
//! |---------------------|---------------------|
//! | `RUST_LOG`          | as given            |
//! | `--quiet`           | ERROR               |
//! | `-v` / `-vv` / `-vvv` | INFO / DEBUG / TRACE |
//! | (none)              | config `log_level`  |
//!
//! When `output.log_file` is configured, events are also written without ANSI
//! codes to that file inside the output directory.

use std::io::IsTerminal as _;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{cli::GlobalArgs, config::AppConfig};

const CRATES: [&str; 3] = ["promosheet", "promosheet_core", "promosheet_adapters"];

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once. The returned guard flushes the file writer
/// on drop and must be held until the process exits.
pub fn init_logging(args: &GlobalArgs, config: &AppConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let level = derive_level(args, &config.log_level);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(
            CRATES
                .iter()
                .map(|krate| format!("{krate}={level}"))
                .collect::<Vec<_>>()
                .join(","),
        )
    });

    let use_ansi = !args.no_color && !config.output.no_color && std::io::stderr().is_terminal();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match &config.output.log_file {
        Some(name) => {
            std::fs::create_dir_all(&config.output.dir)?;
            let appender = tracing_appender::rolling::never(&config.output.dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(guard)
}

/// Pick the level from flags, falling back to the configured one.
fn derive_level(args: &GlobalArgs, configured: &str) -> String {
    if args.quiet {
        return "error".into();
    }
    match args.verbose {
        0 => configured.to_ascii_lowercase(),
        1 => "info".into(),
        2 => "debug".into(),
        _ => "trace".into(),
    }
}
