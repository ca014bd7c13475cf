use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// The largest number of decimal places a report may be rounded to.
pub const MAX_DECIMAL_PLACES: u32 = 10;

/// The root configuration structure for the entire application.
///
/// Every section is optional in `config.toml`; missing values fall back to
/// their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
    pub report: ReportSettings,
}

/// Where and whether calculator inputs are persisted between runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory holding one JSON file per calculator.
    pub data_dir: PathBuf,
    /// Persist inputs after every successful calculation.
    pub autosave: bool,
}

/// Contains parameters for the tracing subscriber.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive, used when `RUST_LOG` is not set.
    pub filter: String,
}

/// Contains parameters for rendering results.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Amounts and percentages are rounded to this many places for display.
    pub decimal_places: u32,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".cornerstone"),
            autosave: true,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self { decimal_places: 2 }
    }
}

impl Config {
    /// Checks the values that deserialization alone cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "storage.data_dir must not be empty".to_string(),
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.filter must not be empty".to_string(),
            ));
        }
        if self.report.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::ValidationError(format!(
                "report.decimal_places must be at most {MAX_DECIMAL_PLACES}"
            )));
        }
        Ok(())
    }
}
