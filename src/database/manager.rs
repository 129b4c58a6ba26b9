use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::database::schema;

/// Errors from DatabaseManager and the repositories built on it
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl DatabaseError {
    /// SQLSTATE reported by PostgreSQL, if the failure came from the server.
    pub fn sqlstate(&self) -> Option<String> {
        match self {
            DatabaseError::Sqlx(sqlx::Error::Database(e)) => e.code().map(|c| c.into_owned()),
            _ => None,
        }
    }

    /// True when the store rejected the written values rather than failing.
    pub fn is_constraint_violation(&self) -> bool {
        self.sqlstate()
            .map(|code| is_constraint_sqlstate(&code))
            .unwrap_or(false)
    }
}

/// Class 23 is integrity constraint violation (check, not null, unique);
/// class 22 is data exception (value too long for `CHAR(1)`, out of range).
pub fn is_constraint_sqlstate(code: &str) -> bool {
    code.starts_with("23") || code.starts_with("22")
}

/// Owns the connection pool. Cheap to clone; clones share the pool.
#[derive(Clone)]
pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    /// Connect eagerly so that a bad host or credentials fail at startup.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let pool = Self::pool_options(config)
            .connect_with(Self::connect_options(config)?)
            .await?;

        info!(
            "Connected to database {} at {}:{}",
            config.name, config.host, config.port
        );
        Ok(Self { pool })
    }

    /// Build a pool that opens its first connection on first use.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let pool = Self::pool_options(config).connect_lazy_with(Self::connect_options(config)?);
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
    }

    pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, DatabaseError> {
        let ssl_mode = config.ssl_mode.parse::<PgSslMode>()?;

        let mut options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .database(&config.name)
            .ssl_mode(ssl_mode);
        if !config.password.is_empty() {
            options = options.password(&config.password);
        }
        Ok(options)
    }

    /// Create or extend every resource table.
    pub async fn synchronize_schema(&self) -> Result<(), DatabaseError> {
        schema::synchronize(&self.pool).await
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed database pool");
    }
}
