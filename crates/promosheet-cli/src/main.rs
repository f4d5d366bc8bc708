//! # promosheet
//!
//! Generates the weekly promo sheet from pricing adjustment exports.
//!
//! ## Startup sequence
//!
//! 1. Load `.env`, then parse CLI arguments (clap handles `--help` /
//!    `--version` early-exit).
//! 2. Load configuration (defaults, TOML file, environment).
//! 3. Initialise the tracing subscriber, which needs the configured level and
//!    log file.
//! 4. Build the [`OutputManager`] and run the generator.
//! 5. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | Usage or input error    |
//! |  3   | Input files not found   |
//! |  4   | Configuration error     |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use crate::{cli::Cli, config::AppConfig, error::CliError, logging::init_logging, output::OutputManager};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here too and exit 0.
            let code = if e.use_stderr() { 2 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };
    let verbose = cli.global.verbose > 0;

    // No subscriber exists yet, so config failures are printed directly.
    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => return report_error(&e, verbose),
    };

    let _guard = match init_logging(&cli.global, &config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e}");
            return ExitCode::from(1);
        }
    };

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        config = ?cli.config,
        "CLI started"
    );

    let output = OutputManager::new(&cli.global, &config);

    match commands::generate::execute(&config, &output) {
        Ok(()) => {
            info!("Promo sheet generation completed");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Log the error, then print it and map it to an exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();
    report_error(&err, verbose)
}

fn report_error(err: &CliError, verbose: bool) -> ExitCode {
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
