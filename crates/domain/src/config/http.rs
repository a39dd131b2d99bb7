use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DOCUMENTATION_URL: &str = "https://carbontxt.org/tools/validator";

/// Settings shared by every HEAD/GET the finder issues.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds (default: 5.0)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,

    /// User-Agent header; `None` uses [`default_user_agent`].
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Redirects followed before a request is treated as failed (default: 10)
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout_secs)
    }

    pub fn effective_user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(default_user_agent)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            max_redirects: default_max_redirects(),
        }
    }
}

/// `CarbonTxtValidator/<version> (<documentation url>)`
pub fn default_user_agent() -> String {
    format!(
        "CarbonTxtValidator/{} ({})",
        env!("CARGO_PKG_VERSION"),
        DOCUMENTATION_URL
    )
}

fn default_timeout_secs() -> f64 {
    5.0
}

fn default_max_redirects() -> usize {
    10
}
