use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, without the `/api` suffix.
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    30_000
}

impl ClientConfig {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (if ENV is set)
    /// 3. Environment variables (PERSONA_API_BASE_URL, PERSONA_LOG_LEVEL, ...)
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = ConfigLoader::builder()
            .set_default("api.base_url", "")?
            .set_default("api.timeout_ms", 30_000)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::default()
                    .prefix("PERSONA")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        let mut cfg: ClientConfig = config.try_deserialize()?;

        // The base URL may always be supplied from the environment alone.
        if let Ok(url) = std::env::var("PERSONA_API_BASE_URL") {
            cfg.api.base_url = url;
        }
        if cfg.api.base_url.is_empty() {
            return Err(ConfigError::Message(
                "api.base_url (or PERSONA_API_BASE_URL) is required".to_string(),
            ));
        }

        Ok(cfg)
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Root of the versioned API, i.e. `{base_url}/api`.
    pub fn api_root(&self) -> String {
        format!("{}/api", self.api.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_structure() {
        let toml = r#"
            [api]
            base_url = "https://persona.example.com"
            timeout_ms = 5000

            [logging]
            level = "debug"
            format = "json"
        "#;

        let config: ClientConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.api.base_url, "https://persona.example.com");
        assert_eq!(config.api.timeout_ms, 5000);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_api_root_strips_trailing_slash() {
        let toml = r#"
            [api]
            base_url = "https://persona.example.com/"
        "#;

        let config: ClientConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.api_root(), "https://persona.example.com/api");
        assert_eq!(config.api.timeout_ms, 30_000);
    }
}
