//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across the admin client.
pub struct DashboardConfig {
    /// Base URL of the admin backend, e.g. `http://localhost:3002/api`.
    pub api_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Bearer token to seed the session with, when already known.
    #[serde(default)]
    pub api_token: Option<String>,
}

fn default_timeout_secs() -> u64 {
    30
}
