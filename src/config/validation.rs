//! Range and format checks the types alone cannot express

use crate::config::error::ConfigError;
use crate::config::settings::{DatabaseConfig, ServerConfig, Settings};

const DATABASE_SCHEMES: &[&str] = &["postgres://", "postgresql://"];

fn ensure(ok: bool, field: &str, message: impl Into<String>) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::validation(field, message))
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure(!self.host.trim().is_empty(), "server.host", "Host must not be empty.")?;
        ensure(
            self.port != 0,
            "server.port",
            "Port must be between 1 and 65535.",
        )?;
        ensure(
            self.request_timeout > 0,
            "server.request_timeout",
            "Request timeout must be at least 1 second.",
        )
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure(
            DATABASE_SCHEMES.iter().any(|scheme| self.url.starts_with(scheme)),
            "database.url",
            "Expected postgres://[user:password@]host[:port]/database",
        )?;
        ensure(
            self.max_connections > 0,
            "database.max_connections",
            "Max connections must be greater than 0.",
        )?;
        ensure(
            (1..=self.max_connections).contains(&self.min_connections),
            "database.min_connections",
            format!(
                "Min connections must be between 1 and max connections ({}).",
                self.max_connections
            ),
        )?;
        ensure(
            self.connection_timeout > 0,
            "database.connection_timeout",
            "Connection timeout must be at least 1 second.",
        )
    }
}

impl Settings {
    /// Returns the first failing check, server before database before logger.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        self.logger
            .validate()
            .map_err(|e| ConfigError::validation("logger", e.to_string()))
    }
}
