//! Configuration types
//!
//! Application configuration: where quotes come from and where state is kept.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default remote endpoint returning one random quote per request
pub const DEFAULT_API_URL: &str = "https://dummyjson.com/quotes/random";

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Endpoint of the remote quote source
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Request timeout for the quote source
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Overrides the platform data directory when set
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    format!("Quotebox/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            data_dir: None,
        }
    }
}

impl AppConfig {
    /// Bring values back into acceptable ranges
    pub fn validate(&mut self) {
        if self.api_url.trim().is_empty() {
            self.api_url = default_api_url();
        }
        self.api_url = self.api_url.trim().to_string();

        self.request_timeout_secs = self.request_timeout_secs.clamp(1, 120);

        if self.user_agent.trim().is_empty() {
            self.user_agent = default_user_agent();
        }
    }
}
