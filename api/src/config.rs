//! Configuration loading for the API server
//!
//! Sources are layered, later ones overriding earlier ones:
//! 1. Defaults declared on the config types
//! 2. `config/default.toml` (optional)
//! 3. `config/<environment>.toml` (optional)
//! 4. Environment variables prefixed `APP__`, e.g. `APP__AUTH__SECRET`

use acct_shared::config::{AppConfig, Environment};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File};
use thiserror::Error;

/// Errors raised while assembling the application configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Load the configuration for the environment named by `APP_ENV`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let environment = Environment::from_env();

    let builder = Config::builder()
        .set_default("environment", environment.to_string())?
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(environment.config_file()).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

    from_builder(builder)
}

/// Build, deserialize and validate a prepared set of sources
pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ConfigError> {
    let app_config: AppConfig = builder.build()?.try_deserialize()?;
    app_config.validate().map_err(ConfigError::Invalid)?;
    Ok(app_config)
}
