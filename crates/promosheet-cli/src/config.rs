//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables (`PROMOSHEET__INPUT__EVENT=FALL24`)
//! 2. Config file (TOML; positional argument or the platform config path)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use promosheet_core::domain::DEFAULT_PROGRAM_NAME;

use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "PROMOSHEET";
const ENV_SEPARATOR: &str = "__";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub sheet: SheetConfig,
    /// Default tracing level when neither `RUST_LOG` nor `-v`/`-q` is given.
    pub log_level: String,
}

/// Where the adjustment exports and lookup tables live.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub dir: PathBuf,
    /// Glob for adjustment files, relative to `dir`.
    pub adjustments: String,
    /// Glob for item info files; the newest match is used.
    pub item_info: String,
    pub other_info: String,
    pub signage: String,
    /// Event code selected from the adjustment headers.
    pub event: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub sheet_file: String,
    /// Log file name inside `dir`. No file logging when absent.
    pub log_file: Option<String>,
    pub no_color: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetConfig {
    pub program_name: String,
}

impl AppConfig {
    /// Load configuration from defaults, a TOML file, and the environment.
    ///
    /// An explicit `config_file` must exist. Without one the platform config
    /// path is tried and skipped silently if absent.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let file = match config_file {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::from(Self::config_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        let config = Config::builder()
            .set_default("log_level", "info")
            .and_then(|b| b.set_default("input.dir", "."))
            .and_then(|b| b.set_default("output.dir", "."))
            .and_then(|b| b.set_default("output.sheet_file", "promo_sheet.tsv"))
            .and_then(|b| b.set_default("output.no_color", false))
            .and_then(|b| b.set_default("sheet.program_name", DEFAULT_PROGRAM_NAME))
            .map_err(config_error("invalid default value"))?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .map_err(config_error("could not read configuration"))?;

        let app: Self = config
            .try_deserialize()
            .map_err(config_error("configuration is incomplete or malformed"))?;
        app.validate()?;
        Ok(app)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `promosheet.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "promosheet", "promosheet")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("promosheet.toml"))
    }

    /// Full path of the generated sheet.
    pub fn sheet_path(&self) -> PathBuf {
        self.output.dir.join(&self.output.sheet_file)
    }

    fn validate(&self) -> CliResult<()> {
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(CliError::ConfigError {
                message: format!(
                    "log_level '{}' is not one of {}",
                    self.log_level,
                    LOG_LEVELS.join(", ")
                ),
                source: None,
            });
        }
        if self.input.event.trim().is_empty() {
            return Err(CliError::ConfigError {
                message: "input.event must name the event to generate".into(),
                source: None,
            });
        }
        Ok(())
    }
}

fn config_error(message: &'static str) -> impl FnOnce(config::ConfigError) -> CliError {
    move |e| CliError::ConfigError {
        message: format!("{message}: {e}"),
        source: Some(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = r#"
[input]
adjustments = "adjustments_*.txt"
item_info = "item_info_*.txt"
other_info = "other_info.txt"
signage = "signage.txt"
event = "SPRING24"
"#;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_fill_optional_keys() {
        let file = write_config(MINIMAL);
        let cfg = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(cfg.input.event, "SPRING24");
        assert_eq!(cfg.input.dir, PathBuf::from("."));
        assert_eq!(cfg.output.sheet_file, "promo_sheet.tsv");
        assert_eq!(cfg.output.log_file, None);
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.sheet.program_name, DEFAULT_PROGRAM_NAME);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn file_values_override_defaults() {
        let content = format!(
            "log_level = \"debug\"\n{MINIMAL}\n[output]\ndir = \"out\"\nsheet_file = \"week.tsv\"\nlog_file = \"run.log\"\n\n[sheet]\nprogram_name = \"CANADA OUTLETS\"\n"
        );
        let file = write_config(&content);
        let cfg = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.sheet_path(), PathBuf::from("out").join("week.tsv"));
        assert_eq!(cfg.output.log_file.as_deref(), Some("run.log"));
        assert_eq!(cfg.sheet.program_name, "CANADA OUTLETS");
    }

    #[test]
    fn missing_explicit_file_is_a_config_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/promosheet.toml"))).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn missing_required_key_is_a_config_error() {
        let file = write_config("[input]\nadjustments = \"*.txt\"\n");
        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let file = write_config(&format!("log_level = \"loud\"\n{MINIMAL}"));
        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
