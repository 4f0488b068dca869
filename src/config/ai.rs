//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;
use crate::adapters::ai::{OpenAIConfig, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL};

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI-compatible API key. Without one the mock provider is used.
    pub openai_api_key: Option<Secret<String>>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries on failure
    #[serde(default = "default_retries")]
    pub max_retries: u32,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        self.openai_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Client settings for the chat-completions adapter, if a key is set.
    pub fn openai_config(&self) -> Option<OpenAIConfig> {
        if !self.has_openai() {
            return None;
        }
        self.openai_api_key.clone().map(|key| {
            OpenAIConfig::from_secret(key)
                .with_model(self.model.clone())
                .with_base_url(self.base_url.clone())
                .with_timeout(self.timeout())
                .with_max_retries(self.max_retries)
        })
    }

    /// Validate AI configuration
    ///
    /// Production requires a real provider; elsewhere a missing key falls
    /// back to the mock provider.
    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        if environment == Environment::Production && !self.has_openai() {
            return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            max_retries: default_retries(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_OPENAI_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_OPENAI_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_retries() -> u32 {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key(key: &str) -> AiConfig {
        AiConfig {
            openai_api_key: Some(Secret::new(key.to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.max_retries, 3);
        assert!(!config.has_openai());
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        assert!(!with_key("  ").has_openai());
        assert!(with_key("  ").openai_config().is_none());
    }

    #[test]
    fn test_openai_config_carries_settings() {
        let config = AiConfig {
            model: "gpt-4o".to_string(),
            timeout_secs: 15,
            ..with_key("sk-test")
        };
        let client = config.openai_config().unwrap();
        assert_eq!(client.model, "gpt-4o");
        assert_eq!(client.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_missing_key_allowed_outside_production() {
        assert!(AiConfig::default().validate(Environment::Development).is_ok());
        assert!(AiConfig::default().validate(Environment::Production).is_err());
        assert!(with_key("sk-test").validate(Environment::Production).is_ok());
    }

    #[test]
    fn test_base_url_must_be_http() {
        let config = AiConfig {
            base_url: "ftp://models".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(Environment::Development),
            Err(ValidationError::InvalidBaseUrl(_))
        ));
    }
}
