use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Connection settings for the remote catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme + host + port of the catalog service (e.g., "http://localhost:5062").
    /// The `/games` collection path is appended by the client.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total request timeout in seconds. Unset leaves the transport default.
    #[serde(default)]
    pub request_timeout_seconds: Option<u32>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds when idle (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:5062".to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
