use std::fmt;
use std::time::Duration;

pub mod gateway;
pub mod models;
pub mod prompts;

pub use gateway::Gateway;
pub use models::{create_provider, GenerateRequest, GenerateResponse, Provider};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub base_url: Option<String>,
    /// No timeout unless one is asked for; a stalled call keeps its view loading.
    pub timeout: Option<Duration>,
    /// Serve canned demo responses instead of calling the provider.
    pub offline: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("offline", &self.offline)
            .finish()
    }
}

impl Config {
    /// Reads `.env` if present, then `API_KEY` (or `GEMINI_API_KEY`),
    /// `NAIJPEDIA_MODEL` and `NAIJPEDIA_BASE_URL`.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            api_key: var("API_KEY").or_else(|| var("GEMINI_API_KEY")),
            model_name: var("NAIJPEDIA_MODEL"),
            base_url: var("NAIJPEDIA_BASE_URL"),
            timeout: None,
            offline: false,
        }
    }

    pub fn model_name(&self) -> &str {
        self.model_name.as_deref().unwrap_or(prompts::MODEL_NAME)
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }
}

pub mod prelude {
    pub use super::Config;
    pub use super::gateway::Gateway;
    pub use super::models::{create_provider, Provider};
    pub use np_core::{ArticleSummary, Error, NewsItem, Result, SearchResult};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.model_name(), "gemini-2.5-flash");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = Config {
            api_key: Some("secret-key".to_string()),
            base_url: Some("http://localhost:8080/".to_string()),
            ..Config::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
        assert_eq!(config.base_url(), "http://localhost:8080");
    }
}
