//! Application configuration
//!
//! Loaded from `config.toml` in the app config directory, with every field
//! defaulted so a missing file is never an error. `COOP_API_URL` overrides
//! the configured backend URL (useful with a `.env` file in development).

use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL of the backend REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// WhatsApp number UPI orders are composed for
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,

    /// Upper bound for the one-shot delivery-location lookup, in seconds
    #[serde(default = "default_location_timeout_secs")]
    pub location_timeout_secs: u64,

    /// Endpoint of the IP-geolocation service used during checkout
    #[serde(default = "default_location_url")]
    pub location_url: String,
}

fn default_api_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_whatsapp_number() -> String {
    "917349729767".to_string()
}

fn default_location_timeout_secs() -> u64 {
    10
}

fn default_location_url() -> String {
    "http://ip-api.com/json".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            whatsapp_number: default_whatsapp_number(),
            location_timeout_secs: default_location_timeout_secs(),
            location_url: default_location_url(),
        }
    }
}

impl AppConfig {
    /// Load config from the config directory, falling back to defaults
    ///
    /// `COOP_API_URL` in the environment wins over the file.
    pub fn load() -> Self {
        let mut config = Self::load_file().unwrap_or_default();
        if let Ok(url) = env::var("COOP_API_URL") {
            if !url.is_empty() {
                config.api_url = url;
            }
        }
        config
    }

    fn load_file() -> Option<Self> {
        let path = crate::paths::app_config_path().ok()?;
        let content = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => {
                log::info!("Loaded app config from {:?}", path);
                Some(config)
            }
            Err(err) => {
                log::warn!("Failed to parse config file {:?}: {}", path, err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: AppConfig = toml::from_str("api_url = \"http://backend:9000\"").unwrap();
        assert_eq!(config.api_url, "http://backend:9000");
        assert_eq!(config.location_timeout_secs, 10);
        assert!(!config.whatsapp_number.is_empty());
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.api_url, default_api_url());
    }
}
