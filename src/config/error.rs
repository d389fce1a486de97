//! Configuration errors.

use thiserror::Error;

/// Failure while assembling the service configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration from the environment: {0}")]
    Source(#[from] config::ConfigError),

    #[error("configuration rejected: {0}")]
    Rejected(#[from] ValidationError),
}

/// A loaded value the service cannot run with.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("server port must be non-zero")]
    PortZero,

    #[error("request timeout of {0}s is outside the accepted 1..=300s range")]
    TimeoutOutOfRange(u64),

    #[error("'{0}' is not a bindable address")]
    BindAddr(String),

    #[error("database.url is not set (GATHERLY__DATABASE__URL)")]
    DatabaseUrlMissing,

    #[error("database.url must use the postgres:// or postgresql:// scheme")]
    DatabaseUrlScheme,

    #[error("database pool bounds are inverted: min {min} > max {max}")]
    PoolBounds { min: u32, max: u32 },

    #[error("database pool of {0} connections exceeds the cap of 100")]
    PoolTooLarge(u32),
}
