//! Runtime configuration from environment variables.

use std::env;

/// Deployment environment name, driving the log format.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON dataset file.
    pub dataset_path: String,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            dataset_path: env::var("DATASET_PATH")
                .unwrap_or_else(|_| "data/data.json".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
