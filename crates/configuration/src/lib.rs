use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, LoggingSettings, ReportSettings, StorageSettings};

/// The prefix of environment variables that override file settings,
/// e.g. `CORNERSTONE__STORAGE__DATA_DIR`.
pub const ENV_PREFIX: &str = "CORNERSTONE";

/// Loads the application configuration from `config.toml` in the working directory.
///
/// The file is optional. Values from the environment take precedence over the
/// file, and anything left unset takes its default.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new("config.toml"))
}

/// Loads the application configuration from the given file plus the environment.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}
