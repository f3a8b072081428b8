//! Application configuration
//!
//! Configuration loaded from .review-tui.toml, with env overrides for the
//! review endpoint. A `.env` file in the working directory is honored.

use serde::{Deserialize, Serialize};
use std::env;

/// Env var that overrides the review endpoint URL.
const ENDPOINT_ENV: &str = "REVIEW_TUI_ENDPOINT";

/// Application configuration loaded from .review-tui.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// URL of the review endpoint the code is POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Theme to start with: "dark" or "light"
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Highlighting language preselected in the language dropdown
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_endpoint() -> String {
    "http://localhost:4000/ai/get-review".to_string()
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_language() -> String {
    "javascript".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            theme: default_theme(),
            language: default_language(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults.
    ///
    /// After file loading, `REVIEW_TUI_ENDPOINT` (from the environment or a
    /// `.env` file) overrides the endpoint.
    pub fn load() -> Self {
        // Pick up a .env file if present; missing file is fine
        let _ = dotenvy::dotenv();

        let mut config = if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                    Self::default()
                }
            }
        } else {
            log::debug!("Using default app config");
            Self::default()
        };

        if let Ok(endpoint) = env::var(ENDPOINT_ENV) {
            if !endpoint.is_empty() {
                log::info!("Endpoint overridden via {}", ENDPOINT_ENV);
                config.endpoint = endpoint;
            }
        }

        config
    }
}
