// src/config.rs - Application configuration

//! Configuration for the panel client.
//!
//! The web build runs on compiled defaults. The desktop build merges, in
//! order of precedence: built-in defaults, an optional `sellerdesk.toml`
//! under the user config directory, then `SELLERDESK_*` environment
//! variables. Command-line flags (see `main.rs`) override all of these.

use serde::{Deserialize, Serialize};

use crate::error::Result;

fn default_api_base_url() -> String {
    "/api/v1".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_per_page() -> u32 {
    15
}

fn default_search_debounce_ms() -> u32 {
    600
}

fn default_retry_limit() -> u32 {
    1
}

fn default_list_stale_secs() -> i64 {
    30
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base path of the REST API, e.g. `https://api.example.com/api/v1`.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Value sent in `Accept-Language` until the user picks another one.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Page size requested from list endpoints.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Quiet period before a search input commits its settled value.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u32,
    /// Extra attempts after a transport failure. 4xx never retries.
    #[serde(default = "default_retry_limit")]
    pub retry_limit: u32,
    /// How long a cached list page counts as fresh. Reference data ignores
    /// this and is cached for the whole session.
    #[serde(default = "default_list_stale_secs")]
    pub list_stale_secs: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            default_language: default_language(),
            per_page: default_per_page(),
            search_debounce_ms: default_search_debounce_ms(),
            retry_limit: default_retry_limit(),
            list_stale_secs: default_list_stale_secs(),
        }
    }
}

impl AppConfig {
    /// Loads configuration for the current platform.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::load_native().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "falling back to default configuration");
                Self::default()
            })
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load_native() -> Result<Self> {
        let mut config = Self::default();

        if let Some(dir) = dirs::config_dir() {
            let path = dir.join("sellerdesk").join("sellerdesk.toml");
            if path.exists() {
                let raw = std::fs::read_to_string(&path)?;
                config = toml::from_str(&raw).map_err(|e| {
                    crate::error::Error::config(path.display().to_string(), e.to_string())
                })?;
            }
        }

        config.apply_env();
        Ok(config)
    }

    /// Applies `SELLERDESK_*` environment overrides.
    #[cfg(not(target_arch = "wasm32"))]
    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("SELLERDESK_API_BASE_URL") {
            self.api_base_url = url;
        }
        if let Ok(lang) = std::env::var("SELLERDESK_LANGUAGE") {
            self.default_language = lang;
        }
        if let Ok(per_page) = std::env::var("SELLERDESK_PER_PAGE") {
            if let Ok(n) = per_page.parse() {
                self.per_page = n;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "/api/v1");
        assert_eq!(config.default_language, "en");
        assert_eq!(config.retry_limit, 1);
        assert!(config.search_debounce_ms >= 500 && config.search_debounce_ms <= 800);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig =
            toml::from_str("api_base_url = \"https://api.shop.test/api/v1\"").unwrap();
        assert_eq!(config.api_base_url, "https://api.shop.test/api/v1");
        assert_eq!(config.per_page, 15);
        assert_eq!(config.default_language, "en");
    }
}
