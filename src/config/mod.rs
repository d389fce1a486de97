//! Service configuration.
//!
//! All settings come from the environment, read with the `config` crate
//! under the `GATHERLY` prefix; nested fields are addressed with a double
//! underscore, so `GATHERLY__SERVER__PORT=8080` sets `server.port`. A
//! `.env` file is honored in development via `dotenvy`.
//!
//! ```no_run
//! use gatherly::config::AppConfig;
//!
//! let config = AppConfig::load().expect("configuration");
//! config.validate().expect("configuration rejected");
//! ```

mod database;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::ServerConfig;

use serde::Deserialize;

/// Everything the binary needs to start: listener and database settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Requires at least `GATHERLY__DATABASE__URL`.
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Reads the configuration from the environment.
    ///
    /// Fails when a required variable is absent or a value does not parse
    /// into its typed field. Range checks live in [`AppConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GATHERLY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Rejects values the service cannot run with.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        Ok(())
    }
}
