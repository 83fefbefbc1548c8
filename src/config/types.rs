use serde::{Deserialize, Serialize};

/// Root configuration container.
///
/// Every section carries defaults, so a missing or empty config file is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

/// Quote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Endpoint returning a single random quote as JSON.
    #[serde(default = "default_api_url")]
    pub url: String,
    /// Connection timeout in seconds. Unset leaves it to the transport.
    #[serde(default)]
    pub connect_timeout_seconds: Option<u64>,
    /// Whole-request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
}

/// Durations driving the quote card animations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Fade-out wait before the text swap, and the fade-in length after it (default: 300).
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u64,
    /// Delay before the card is revealed after startup (default: 100).
    #[serde(default = "default_entrance_delay_ms")]
    pub entrance_delay_ms: u64,
    /// How long the entrance slide runs after the reveal (default: 600).
    #[serde(default = "default_entrance_slide_ms")]
    pub entrance_slide_ms: u64,
    /// Delay before the automatic first fetch (default: 500).
    #[serde(default = "default_initial_fetch_delay_ms")]
    pub initial_fetch_delay_ms: u64,
    /// UI tick interval; drives the spinner (default: 100).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

/// Share behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareConfig {
    /// External command invoked with (title, text, url) arguments. When unset,
    /// the composed text goes to the system clipboard instead.
    #[serde(default)]
    pub command: Option<String>,
}

fn default_api_url() -> String {
    "https://api.quotable.io/random".to_string()
}

fn default_fade_ms() -> u64 {
    300
}

fn default_entrance_delay_ms() -> u64 {
    100
}

fn default_entrance_slide_ms() -> u64 {
    600
}

fn default_initial_fetch_delay_ms() -> u64 {
    500
}

fn default_tick_ms() -> u64 {
    100
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            connect_timeout_seconds: None,
            request_timeout_seconds: None,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            fade_ms: default_fade_ms(),
            entrance_delay_ms: default_entrance_delay_ms(),
            entrance_slide_ms: default_entrance_slide_ms(),
            initial_fetch_delay_ms: default_initial_fetch_delay_ms(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            timing: TimingConfig::default(),
            share: ShareConfig::default(),
        }
    }
}
