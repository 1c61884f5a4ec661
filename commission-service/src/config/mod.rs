use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct CommissionConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// MongoDB connection string. When unset the service runs without
    /// persistence and reports the store as unavailable.
    pub url: Option<String>,
    pub name: String,
}

impl CommissionConfig {
    pub fn load() -> Result<Self, AppError> {
        // Common config handles .env and the PORT variable.
        let common = core_config::Config::load()?;

        Ok(CommissionConfig {
            common,
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").ok(),
                name: env::var("DATABASE_NAME").unwrap_or_else(|_| "soulpainter".to_string()),
            },
        })
    }
}
