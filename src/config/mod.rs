use serde::{Deserialize, Serialize};
use sqlx::postgres::PgSslMode;
use std::env;
use thiserror::Error;

/// Errors raised while reading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    /// libpq style sslmode: disable, allow, prefer, require, verify-ca, verify-full
    pub ssl_mode: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source. Unset and empty
    /// variables are treated the same.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::defaults();

        if let Some(v) = get("DB_HOST") {
            config.database.host = v;
        }
        if let Some(v) = get("DB_PORT") {
            config.database.port = parse_var("DB_PORT", v)?;
        }
        config.database.user = get("DB_USER").ok_or(ConfigError::Missing("DB_USER"))?;
        config.database.password = lookup("DB_PASSWORD").unwrap_or_default();
        config.database.name = get("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?;
        if let Some(v) = get("DB_SSLMODE") {
            v.parse::<PgSslMode>().map_err(|e| ConfigError::Invalid {
                var: "DB_SSLMODE",
                value: v.clone(),
                reason: e.to_string(),
            })?;
            config.database.ssl_mode = v;
        }
        if let Some(v) = get("DB_MAX_CONNECTIONS") {
            config.database.max_connections = parse_var("DB_MAX_CONNECTIONS", v)?;
        }
        if let Some(v) = get("DB_CONNECT_TIMEOUT_SECS") {
            config.database.connect_timeout_secs = parse_var("DB_CONNECT_TIMEOUT_SECS", v)?;
        }

        if let Some(v) = get("PORT") {
            config.server.port = parse_var("PORT", v)?;
        }

        Ok(config)
    }

    fn defaults() -> Self {
        Self {
            database: DatabaseConfig {
                host: "localhost".to_string(),
                port: 5432,
                user: String::new(),
                password: String::new(),
                name: String::new(),
                ssl_mode: "disable".to_string(),
                max_connections: 10,
                connect_timeout_secs: 30,
            },
            server: ServerConfig { port: 8000 },
        }
    }
}

fn parse_var<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        var,
        reason: e.to_string(),
        value,
    })
}
