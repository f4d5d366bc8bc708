//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names and help
//! text. No business logic lives here.

use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "promosheet",
    bin_name = "promosheet",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate a weekly promo sheet from pricing adjustment exports",
    long_about = "promosheet reads pipe-delimited adjustment files for one event, \
                  joins them with the item color and auxiliary tables, and writes \
                  a tab-delimited promo sheet.",
    after_help = "EXAMPLES:\n\
        \x20 promosheet                       # platform config location\n\
        \x20 promosheet ./promosheet.toml\n\
        \x20 PROMOSHEET__INPUT__EVENT=SPRING24 promosheet -v ./promosheet.toml",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Configuration file. Defaults to the platform config directory.
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_is_optional() {
        let cli = Cli::parse_from(["promosheet"]);
        assert!(cli.config.is_none());

        let cli = Cli::parse_from(["promosheet", "sheet.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("sheet.toml")));
    }

    #[test]
    fn second_positional_is_rejected() {
        let result = Cli::try_parse_from(["promosheet", "a.toml", "b.toml"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["promosheet", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::parse_from(["promosheet", "-vv", "sheet.toml"]);
        assert_eq!(cli.global.verbose, 2);
    }
}
