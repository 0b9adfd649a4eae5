use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::client::BOKO_API_URL;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// GraphQL endpoint; defaults to the public Bokoblin API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_endpoint() -> String {
    BOKO_API_URL.to_string()
}

fn default_level() -> String {
    "info".to_string()
}

pub fn load_config(path: &str) -> Result<Config> {
    let config_text = fs::read_to_string(Path::new(path))
        .with_context(|| format!("Failed to read config file {}", path))?;
    let config: Config =
        toml::from_str(&config_text).with_context(|| format!("Failed to parse {}", path))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = write_config("");
        let config = load_config(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.api.endpoint, BOKO_API_URL);
        assert!(config.logging.is_none());
    }

    #[test]
    fn endpoint_and_level_are_read() {
        let file = write_config(
            r#"
            [api]
            endpoint = "http://localhost:4000/graphql"

            [logging]
            level = "debug"
            "#,
        );
        let config = load_config(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.api.endpoint, "http://localhost:4000/graphql");
        assert_eq!(config.logging.unwrap().level, "debug");
    }

    #[test]
    fn logging_section_without_level_defaults_to_info() {
        let file = write_config("[logging]\n");
        let config = load_config(file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.logging.unwrap().level, "info");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = load_config(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let file = write_config("[api\nendpoint = ");
        assert!(load_config(file.path().to_str().unwrap()).is_err());
    }
}
