//! API Configuration

use log::{info, warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

/// Where the budget API lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Resolve from an optional raw value (e.g. `option_env!("BUDGET_API_URL")`),
    /// falling back to the default when missing or blank.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => {
                info!("[config] Using API at {}", url);
                Self::new(url)
            }
            Some(_) => {
                warn!("[config] BUDGET_API_URL is blank, using default: {}", DEFAULT_BASE_URL);
                Self::default()
            }
            None => {
                info!("[config] BUDGET_API_URL not set, using default: {}", DEFAULT_BASE_URL);
                Self::default()
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
