// src/config.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::info;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: ApiConfig,
    production: ApiConfig,
}

impl ApiConfig {
    /// Load configuration: `SCHOLARFLOW_API_URL` overrides everything,
    /// otherwise the environment-matching section of `config.yaml` is used.
    pub fn load() -> Result<Self> {
        if let Ok(base_url) = std::env::var("SCHOLARFLOW_API_URL") {
            let timeout_seconds = std::env::var("SCHOLARFLOW_API_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS);
            return Ok(Self {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout_seconds,
            });
        }

        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);
        Self::load_from_file(&environment)
    }

    fn get_environment() -> String {
        std::env::var("SCHOLARFLOW_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(environment: &str) -> Result<Self> {
        let config_path = PathBuf::from("config.yaml");
        if !config_path.exists() {
            anyhow::bail!(
                "config.yaml not found and SCHOLARFLOW_API_URL not set. Cannot reach the profile API without a base URL."
            );
        }

        let config_content =
            std::fs::read_to_string(&config_path).context("Failed to read config.yaml")?;

        let config_file: ConfigFile =
            serde_yaml::from_str(&config_content).context("Failed to parse config.yaml")?;

        let config = match environment {
            "production" => config_file.production,
            _ => config_file.local,
        };

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_seconds: config.timeout_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_file() {
        let yaml = r#"
local:
  base_url: "http://localhost:8000"
production:
  base_url: "https://api.scholarflow.io/"
  timeout_seconds: 60
"#;
        let config: ConfigFile = serde_yaml::from_str(yaml).expect("valid yaml");
        assert_eq!(config.local.base_url, "http://localhost:8000");
        assert_eq!(config.local.timeout_seconds, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.production.timeout_seconds, 60);
    }
}
