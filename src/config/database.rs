use crate::core::{AppError, Result};
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    pub connect_timeout_secs: u64,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(DatabaseConfig {
            url: env::var("DATABASE_URL")
                .map_err(|_| AppError::Configuration("DATABASE_URL not set".to_string()))?,
            pool_size: env::var("DATABASE_POOL_SIZE")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid DATABASE_POOL_SIZE".to_string()))?,
            connect_timeout_secs: env::var("DATABASE_CONNECT_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid DATABASE_CONNECT_TIMEOUT_SECS".to_string())
                })?,
        })
    }

    /// Create a MySQL connection pool from this configuration
    pub async fn create_pool(&self) -> Result<MySqlPool> {
        MySqlPoolOptions::new()
            .max_connections(self.pool_size)
            .acquire_timeout(Duration::from_secs(self.connect_timeout_secs))
            .connect(&self.url)
            .await
            .map_err(AppError::Database)
    }
}
