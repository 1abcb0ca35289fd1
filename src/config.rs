//! Configuration Module
//!
//! Handles loading and managing application configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted JSON blobs
    pub data_dir: PathBuf,
    /// Artificial delay before a result is shown, in milliseconds
    pub result_delay_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DOG_AGE_DATA_DIR` - Storage directory (default: "data")
    /// - `RESULT_DELAY_MS` - Delay before showing a result, 0 disables (default: 1500)
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("DOG_AGE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            result_delay_ms: env::var("RESULT_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1500),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            result_delay_ms: 1500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.result_delay_ms, 1500);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("DOG_AGE_DATA_DIR");
        env::remove_var("RESULT_DELAY_MS");

        let config = Config::from_env();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.result_delay_ms, 1500);
    }
}
