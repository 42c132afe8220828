//! Client configuration.
//!
//! The frontend is a static wasm bundle, so configuration is read at build
//! time with `option_env!`. Unset or blank values fall back to the local
//! development backend.

use log::info;

use crate::api::Endpoints;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Build-time variable holding the API base URL.
pub const BASE_URL_VAR: &str = "INVENTORY_API_BASE_URL";

/// Build-time variable overriding the debtor update route template.
pub const DEBTOR_UPDATE_VAR: &str = "INVENTORY_DEBTOR_UPDATE_PATH";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub endpoints: Endpoints,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            endpoints: Endpoints::default(),
        }
    }

    /// Configuration baked in when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("INVENTORY_API_BASE_URL"),
            option_env!("INVENTORY_DEBTOR_UPDATE_PATH"),
        )
    }

    pub fn from_values(base_url: Option<&str>, debtor_update: Option<&str>) -> Self {
        let mut config = match base_url.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => {
                info!("{} not set, using {}", BASE_URL_VAR, DEFAULT_BASE_URL);
                Self::default()
            }
        };

        if let Some(template) = debtor_update.map(str::trim).filter(|v| !v.is_empty()) {
            info!("debtor update route overridden by {}: {}", DEBTOR_UPDATE_VAR, template);
            config.endpoints = config.endpoints.with_debtor_update(template);
        }

        config
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Joins a route onto the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = ClientConfig::from_values(Some("  "), None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.endpoints, Endpoints::default());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ClientConfig::new("https://api.example.com/");
        assert_eq!(config.url("/categories"), "https://api.example.com/categories");
        assert_eq!(config.url("products/"), "https://api.example.com/products/");
    }

    #[test]
    fn debtor_update_override_applies() {
        let config = ClientConfig::from_values(None, Some("/debtors/{id}"));
        assert_eq!(config.endpoints.debtors.update.as_deref(), Some("/debtors/{id}"));
    }
}
