//! Application Configuration
//!
//! Everything is read from environment variables at startup. Parsing goes
//! through a lookup function so it can be exercised without touching the
//! process environment.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "x-ai/grok-4-fast:free";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a number, got '{value}'")]
    InvalidNumber { key: String, value: String },

    #[error("{key} must be true or false, got '{value}'")]
    InvalidBool { key: String, value: String },
}

/// Settings for the hosted chat-completion service
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// Sent as HTTP-Referer
    pub site_url: String,
    /// Sent as X-Title
    pub site_name: String,
    pub timeout: Duration,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            site_url: "http://localhost:5173".to_string(),
            site_name: "Skill Gap Analysis App".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub ai: AiConfig,
    pub link_probe_timeout: Duration,
    /// Build a roadmap from the missing skills when the AI call fails
    pub roadmap_static_fallback: bool,
    /// JSON catalog replacing the built-in roles and skills
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ai: AiConfig::default(),
            link_probe_timeout: Duration::from_secs(5),
            roadmap_static_fallback: false,
            catalog_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = AppConfig::default();

        let ai = AiConfig {
            api_key: get("OPENROUTER_API_KEY"),
            base_url: get("OPENROUTER_BASE_URL").unwrap_or(defaults.ai.base_url),
            model: get("OPENROUTER_MODEL").unwrap_or(defaults.ai.model),
            site_url: get("SITE_URL").unwrap_or(defaults.ai.site_url),
            site_name: get("SITE_NAME").unwrap_or(defaults.ai.site_name),
            timeout: match get("AI_TIMEOUT_SECS") {
                Some(v) => Duration::from_secs(parse_number("AI_TIMEOUT_SECS", &v)?),
                None => defaults.ai.timeout,
            },
        };

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port: match get("PORT") {
                Some(v) => parse_number("PORT", &v)?,
                None => defaults.port,
            },
            ai,
            link_probe_timeout: match get("LINK_PROBE_TIMEOUT_SECS") {
                Some(v) => Duration::from_secs(parse_number("LINK_PROBE_TIMEOUT_SECS", &v)?),
                None => defaults.link_probe_timeout,
            },
            roadmap_static_fallback: match get("ROADMAP_STATIC_FALLBACK") {
                Some(v) => parse_bool("ROADMAP_STATIC_FALLBACK", &v)?,
                None => defaults.roadmap_static_fallback,
            },
            catalog_path: get("SKILL_CATALOG_PATH").map(PathBuf::from),
        })
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.ai.api_key.is_none());
        assert_eq!(config.ai.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.ai.model, DEFAULT_MODEL);
        assert_eq!(config.ai.timeout, Duration::from_secs(30));
        assert_eq!(config.link_probe_timeout, Duration::from_secs(5));
        assert!(!config.roadmap_static_fallback);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("OPENROUTER_API_KEY", " sk-or-test "),
            ("OPENROUTER_MODEL", "openai/gpt-4o-mini"),
            ("AI_TIMEOUT_SECS", "12"),
            ("LINK_PROBE_TIMEOUT_SECS", "2"),
            ("ROADMAP_STATIC_FALLBACK", "yes"),
            ("SKILL_CATALOG_PATH", "catalog.json"),
        ])
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.ai.api_key.as_deref(), Some("sk-or-test"));
        assert_eq!(config.ai.model, "openai/gpt-4o-mini");
        assert_eq!(config.ai.timeout, Duration::from_secs(12));
        assert_eq!(config.link_probe_timeout, Duration::from_secs(2));
        assert!(config.roadmap_static_fallback);
        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.json")));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = config_from(&[("OPENROUTER_API_KEY", "   "), ("PORT", "")]).unwrap();
        assert!(config.ai.api_key.is_none());
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            config_from(&[("PORT", "eighty")]).unwrap_err(),
            ConfigError::InvalidNumber {
                key: "PORT".to_string(),
                value: "eighty".to_string()
            }
        );
        assert!(matches!(
            config_from(&[("PORT", "70000")]),
            Err(ConfigError::InvalidNumber { .. })
        ));
        assert!(matches!(
            config_from(&[("ROADMAP_STATIC_FALLBACK", "maybe")]),
            Err(ConfigError::InvalidBool { .. })
        ));
    }
}
