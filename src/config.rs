//! Application configuration loaded from environment variables.

use std::env;

/// Which storage backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// In-process map, suitable for demos and tests. Data is lost on restart.
    Memory,
    /// DynamoDB single-table backend.
    DynamoDb,
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Storage backend selector
    pub storage_backend: StorageBackend,
    /// DynamoDB table name
    pub table_name: String,
    /// Optional DynamoDB endpoint override (dynamodb-local)
    pub dynamodb_endpoint: Option<String>,
    /// Seed example athletes/sessions at startup
    pub seed_demo_data: bool,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            storage_backend: StorageBackend::Memory,
            table_name: "training-tracker".to_string(),
            dynamodb_endpoint: None,
            seed_demo_data: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let storage_backend = match env::var("STORAGE_BACKEND").as_deref() {
            Ok("dynamodb") => StorageBackend::DynamoDb,
            Ok("memory") | Err(_) => StorageBackend::Memory,
            Ok(other) => return Err(ConfigError::InvalidBackend(other.to_string())),
        };

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            storage_backend,
            table_name: env::var("DYNAMODB_TABLE_NAME")
                .unwrap_or_else(|_| "training-tracker".to_string()),
            dynamodb_endpoint: env::var("DYNAMODB_ENDPOINT").ok(),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown STORAGE_BACKEND value: {0} (expected 'memory' or 'dynamodb')")]
    InvalidBackend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.table_name, "training-tracker");
        assert!(!config.seed_demo_data);
    }
}
