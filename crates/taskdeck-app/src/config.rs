/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed application configuration
[POS]:    Configuration layer - API endpoint and polling cadence
[UPDATE]: When adding new configuration options
*/

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration for the taskdeck client
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Backing API endpoint
    #[serde(default)]
    pub api: ApiConfig,
    /// Background polling cadence
    #[serde(default)]
    pub polling: PollingConfig,
}

/// API endpoint configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the task API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Polling cadence configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollingConfig {
    /// Seconds between health checks
    #[serde(default = "default_health_interval_secs")]
    pub health_interval_secs: u64,
    /// Seconds between full task reloads
    #[serde(default = "default_reload_interval_secs")]
    pub reload_interval_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            health_interval_secs: default_health_interval_secs(),
            reload_interval_secs: default_reload_interval_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_health_interval_secs() -> u64 {
    30
}

fn default_reload_interval_secs() -> u64 {
    60
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn health_interval(&self) -> Duration {
        Duration::from_secs(self.polling.health_interval_secs)
    }

    pub fn reload_interval(&self) -> Duration {
        Duration::from_secs(self.polling.reload_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.health_interval(), Duration::from_secs(30));
        assert_eq!(config.reload_interval(), Duration::from_secs(60));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str(
            "api:\n  base_url: \"http://tasks.internal:9000\"\n",
        )
        .expect("parse");
        assert_eq!(config.api.base_url, "http://tasks.internal:9000");
        assert_eq!(config.polling.health_interval_secs, 30);
        assert_eq!(config.polling.reload_interval_secs, 60);
    }

    #[test]
    fn test_full_yaml() {
        let config: AppConfig = serde_yaml::from_str(
            "api:\n  base_url: \"http://localhost:8000\"\npolling:\n  health_interval_secs: 5\n  reload_interval_secs: 10\n",
        )
        .expect("parse");
        assert_eq!(config.health_interval(), Duration::from_secs(5));
        assert_eq!(config.reload_interval(), Duration::from_secs(10));
    }
}
