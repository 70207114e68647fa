use std::path::PathBuf;
use std::sync::Arc;

use easy_config_store::ConfigStore;
use eyre::{Result, eyre};
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub type Config = Arc<ConfigInner>;

const API_KEY_ENV: &str = "OPENAI_API_KEY";

pub fn config(path: PathBuf) -> Result<Config> {
    let config_store = ConfigStore::<ConfigInner>::read(path, "config".to_string())?;
    let inner = (*config_store).clone();

    info!("config parsing successful");
    debug!("loaded configuration:\n{}", toml::to_string_pretty(&inner.redacted())?);

    Ok(Arc::new(inner))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ConfigInner {
    pub llm: LLMConfig,
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl ConfigInner {
    /// Copy of the configuration that is safe to print.
    fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.llm.api_key.is_some() {
            copy.llm.api_key = Some("<redacted>".to_string());
        }
        copy
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LLMConfig {
    pub api_key: Option<String>,
    #[serde(default = "default_llm_model")]
    pub model: String,
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,
}

impl LLMConfig {
    /// The configured key, or the `OPENAI_API_KEY` environment variable.
    pub fn resolve_api_key(&self) -> Result<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .ok_or_else(|| {
                eyre!("LLM API key not configured in config.toml (or {API_KEY_ENV})")
            })
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GeocodingConfig {
    #[serde(default = "default_geocoding_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            endpoint: default_geocoding_endpoint(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SessionConfig {
    #[serde(default = "default_session_path")]
    pub path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: default_session_path(),
        }
    }
}

fn default_llm_model() -> String {
    "gpt-4".to_string()
}

fn default_llm_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_geocoding_endpoint() -> String {
    "https://nominatim.openstreetmap.org/search".to_string()
}

fn default_user_agent() -> String {
    format!("career-coach/{}", env!("CARGO_PKG_VERSION"))
}

fn default_session_path() -> PathBuf {
    PathBuf::from(".career-coach/session.json")
}

impl Default for ConfigInner {
    fn default() -> Self {
        let cfg = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.default.toml",));

        toml::from_str(cfg).unwrap() // should be okay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = ConfigInner::default();

        assert_eq!(config.llm.model, "gpt-4");
        assert_eq!(config.llm.endpoint, "https://api.openai.com/v1");
        assert!(config.geocoding.endpoint.contains("nominatim"));
        assert_eq!(config.session.path, PathBuf::from(".career-coach/session.json"));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: ConfigInner = toml::from_str("[llm]\napi_key = \"abc\"\n").unwrap();

        assert_eq!(config.llm.model, "gpt-4");
        assert_eq!(config.geocoding, GeocodingConfig::default());
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn configured_key_wins_over_environment() {
        let llm = LLMConfig {
            api_key: Some("from-file".to_string()),
            model: default_llm_model(),
            endpoint: default_llm_endpoint(),
        };

        assert_eq!(llm.resolve_api_key().unwrap(), "from-file");
    }

    #[test]
    fn redacted_hides_the_key() {
        let mut config = ConfigInner::default();
        config.llm.api_key = Some("secret".to_string());

        let printed = toml::to_string_pretty(&config.redacted()).unwrap();
        assert!(!printed.contains("secret"));
    }
}
