use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "gemma2-9b-it";
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Connection settings for an OpenAI-compatible chat completions endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct LlmConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_retries: u32,
    pub timeout: Option<Duration>,
}

impl LlmConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.into(),
            temperature: 0.0,
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: None,
        }
    }

    /// Reads `GROQ_API_KEY` and the optional `ESG_LLM_*` overrides.
    ///
    /// Returns `None` when no API key is set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let api_key = lookup("GROQ_API_KEY")?;
        if api_key.trim().is_empty() {
            return None;
        }
        let mut config = Self::new(api_key.trim());
        if let Some(base_url) = lookup("ESG_LLM_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url;
        }
        if let Some(model) = lookup("ESG_LLM_MODEL").filter(|v| !v.trim().is_empty()) {
            config.model = model;
        }
        if let Some(retries) = lookup("ESG_LLM_MAX_RETRIES").and_then(|v| v.trim().parse().ok()) {
            config.max_retries = retries;
        }
        config.timeout = lookup("ESG_LLM_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        Some(config)
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_key_disables_model() {
        assert!(LlmConfig::from_lookup(lookup_from(&[])).is_none());
        assert!(LlmConfig::from_lookup(lookup_from(&[("GROQ_API_KEY", "  ")])).is_none());
    }

    #[test]
    fn defaults_match_groq() {
        let config = LlmConfig::from_lookup(lookup_from(&[("GROQ_API_KEY", "k")])).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_retries, 2);
        assert!(config.timeout.is_none());
        assert_eq!(
            config.completions_url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn overrides_are_applied() {
        let config = LlmConfig::from_lookup(lookup_from(&[
            ("GROQ_API_KEY", "k"),
            ("ESG_LLM_BASE_URL", "http://localhost:8080/v1/"),
            ("ESG_LLM_MODEL", "llama3"),
            ("ESG_LLM_MAX_RETRIES", "0"),
            ("ESG_LLM_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();
        assert_eq!(config.completions_url(), "http://localhost:8080/v1/chat/completions");
        assert_eq!(config.model, "llama3");
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }
}
