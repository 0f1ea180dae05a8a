//! Settings structures for Research-RS configuration

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Main settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchSettings,
    pub model: ModelSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    ///
    /// Credentials always come from the environment when present, so a
    /// checked-in settings file never needs to carry keys.
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("TAVILY_API_KEY") {
            self.search.api_key = val;
        }
        if let Ok(val) = std::env::var("GROQ_API_KEY") {
            self.model.api_key = val;
        }
        if let Ok(val) = std::env::var("RESEARCH_MODEL") {
            self.model.model = val;
        }
        if let Ok(val) = std::env::var("RESEARCH_MAX_RESULTS") {
            if let Ok(n) = val.parse() {
                self.search.max_results = n;
            }
        }
    }

    /// Validate resolved settings
    ///
    /// Missing credentials are a fatal startup condition, never a per-call
    /// error.
    pub fn validate(&self) -> Result<()> {
        if self.search.api_key.is_empty() {
            bail!("TAVILY_API_KEY is not set; the search provider requires credentials");
        }
        if self.model.api_key.is_empty() {
            bail!("GROQ_API_KEY is not set; the model provider requires credentials");
        }
        Url::parse(&self.search.base_url)
            .with_context(|| format!("invalid search base_url: {}", self.search.base_url))?;
        Url::parse(&self.model.base_url)
            .with_context(|| format!("invalid model base_url: {}", self.model.base_url))?;
        Ok(())
    }
}

/// Search collaborator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// API key for the search provider (env: TAVILY_API_KEY)
    pub api_key: String,
    /// Base URL of the search API
    pub base_url: String,
    /// Maximum number of results to request per search
    pub max_results: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.tavily.com".to_string(),
            max_results: 5,
        }
    }
}

/// Language-model collaborator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// API key for the model provider (env: GROQ_API_KEY)
    pub api_key: String,
    /// Base URL of the OpenAI-compatible chat API
    pub base_url: String,
    /// Model name
    pub model: String,
    /// Sampling temperature used for both generation stages
    pub temperature: f32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "mixtral-8x7b-32768".to_string(),
            temperature: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.search.base_url, "https://api.tavily.com");
        assert_eq!(settings.search.max_results, 5);
        assert_eq!(settings.model.model, "mixtral-8x7b-32768");
        assert_eq!(settings.model.temperature, 0.7);
        assert!(settings.search.api_key.is_empty());
    }

    #[test]
    fn test_validate_requires_credentials() {
        let settings = Settings::default();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.search.api_key = "tvly-test".to_string();
        settings.model.api_key = "gsk-test".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut settings = Settings::default();
        settings.search.api_key = "tvly-test".to_string();
        settings.model.api_key = "gsk-test".to_string();
        settings.model.base_url = "not a url".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
search:
  max_results: 3
model:
  model: "llama-3.1-70b-versatile"
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.search.max_results, 3);
        assert_eq!(settings.search.base_url, "https://api.tavily.com");
        assert_eq!(settings.model.model, "llama-3.1-70b-versatile");
        assert_eq!(settings.model.temperature, 0.7);
    }

    #[test]
    fn test_merge_env_overrides_credentials() {
        std::env::set_var("TAVILY_API_KEY", "tvly-env");
        std::env::set_var("GROQ_API_KEY", "gsk-env");

        let mut settings = Settings::default();
        settings.merge_env();
        assert_eq!(settings.search.api_key, "tvly-env");
        assert_eq!(settings.model.api_key, "gsk-env");

        std::env::remove_var("TAVILY_API_KEY");
        std::env::remove_var("GROQ_API_KEY");
    }
}
