//! Server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Two ways to point at the database:
//!
//! - `DATABASE_URL` - a full connection string, used verbatim
//! - part-wise variables (`DATABASE_HOST`, `DATABASE_PORT`, `DATABASE_NAME`,
//!   `DATABASE_USER`, `DATABASE_PASSWORD`, `DB_SSLMODE`) - composed into
//!   typed connect options, so passwords never need URL escaping
//!
//! Required values that are absent produce a typed [`ConfigError`] at
//! startup, not a panic mid-request.

use std::env;

use scanpoint_db::DbConfig;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,

    /// Full database URL, overriding the part-wise settings when set
    pub database_url: Option<String>,

    /// Database server host
    pub database_host: String,

    /// Database server port
    pub database_port: u16,

    /// Database name
    pub database_name: String,

    /// Database user
    pub database_user: String,

    /// Database password
    pub database_password: String,

    /// SSL mode (disable, allow, prefer, require, verify-ca, verify-full)
    pub db_sslmode: String,

    /// Pool size bound
    pub db_max_connections: u32,

    /// How many recent scans the dashboard shows
    pub dashboard_scan_limit: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL").ok();

        // The part-wise credentials are only required when no full URL is
        // provided.
        let (database_name, database_user, database_password) = if database_url.is_some() {
            (
                env::var("DATABASE_NAME").unwrap_or_default(),
                env::var("DATABASE_USER").unwrap_or_default(),
                env::var("DATABASE_PASSWORD").unwrap_or_default(),
            )
        } else {
            (
                require("DATABASE_NAME")?,
                require("DATABASE_USER")?,
                require("DATABASE_PASSWORD")?,
            )
        };

        let config = ServerConfig {
            http_port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,

            database_url,

            database_host: env::var("DATABASE_HOST").unwrap_or_else(|_| "localhost".to_string()),

            database_port: env::var("DATABASE_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_PORT".to_string()))?,

            database_name,
            database_user,
            database_password,

            db_sslmode: env::var("DB_SSLMODE").unwrap_or_else(|_| "prefer".to_string()),

            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))?,

            dashboard_scan_limit: env::var("DASHBOARD_SCAN_LIMIT")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DASHBOARD_SCAN_LIMIT".to_string()))?,
        };

        Ok(config)
    }

    /// Builds the database-layer configuration from the loaded settings.
    pub fn db_config(&self) -> DbConfig {
        let base = match &self.database_url {
            Some(url) => DbConfig::from_url(url.clone()),
            None => DbConfig::new(
                self.database_host.clone(),
                self.database_port,
                self.database_name.clone(),
                self.database_user.clone(),
                self.database_password.clone(),
            )
            .ssl_mode(self.db_sslmode.clone()),
        };

        base.max_connections(self.db_max_connections)
    }

    /// Returns the HTTP bind address.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.http_port)
    }
}

fn require(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingRequired(key.to_string()))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            http_port: 5000,
            database_url: None,
            database_host: "localhost".to_string(),
            database_port: 5432,
            database_name: "scanpoint".to_string(),
            database_user: "svc".to_string(),
            database_password: "pw".to_string(),
            db_sslmode: "prefer".to_string(),
            db_max_connections: 5,
            dashboard_scan_limit: 20,
        };
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
    }

    #[test]
    fn test_db_config_uses_parts_when_no_url() {
        let config = ServerConfig {
            http_port: 5000,
            database_url: None,
            database_host: "db.internal".to_string(),
            database_port: 5433,
            database_name: "scanpoint".to_string(),
            database_user: "svc".to_string(),
            database_password: "pw".to_string(),
            db_sslmode: "require".to_string(),
            db_max_connections: 8,
            dashboard_scan_limit: 20,
        };

        let db = config.db_config();
        assert!(db.url.is_none());
        assert_eq!(db.host, "db.internal");
        assert_eq!(db.port, 5433);
        assert_eq!(db.ssl_mode, "require");
        assert_eq!(db.max_connections, 8);
    }

    #[test]
    fn test_db_config_prefers_full_url() {
        let config = ServerConfig {
            http_port: 5000,
            database_url: Some("postgres://svc:pw@localhost/scanpoint".to_string()),
            database_host: "ignored".to_string(),
            database_port: 5432,
            database_name: String::new(),
            database_user: String::new(),
            database_password: String::new(),
            db_sslmode: "prefer".to_string(),
            db_max_connections: 5,
            dashboard_scan_limit: 20,
        };

        let db = config.db_config();
        assert_eq!(db.url.as_deref(), Some("postgres://svc:pw@localhost/scanpoint"));
    }
}
