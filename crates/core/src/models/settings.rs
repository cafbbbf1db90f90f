use serde::{Deserialize, Serialize};

/// Environment variable read by [`Settings::from_env`].
pub const API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";

pub const DEFAULT_ALPHAVANTAGE_URL: &str = "https://www.alphavantage.co/query";
pub const DEFAULT_FRANKFURTER_URL: &str = "https://api.frankfurter.app";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How much history Alpha Vantage returns per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputSize {
    /// Latest 100 trading days.
    #[default]
    Compact,
    /// Full history (premium on some plans).
    Full,
}

impl OutputSize {
    pub fn as_param(&self) -> &'static str {
        match self {
            OutputSize::Compact => "compact",
            OutputSize::Full => "full",
        }
    }
}

/// Explicit configuration handed to the viewer and its clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Alpha Vantage API key. Required for market data requests.
    pub alphavantage_api_key: Option<String>,

    pub output_size: OutputSize,

    pub alphavantage_base_url: String,

    pub frankfurter_base_url: String,

    /// HTTP timeout applied on native targets.
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            alphavantage_api_key: None,
            output_size: OutputSize::Compact,
            alphavantage_base_url: DEFAULT_ALPHAVANTAGE_URL.to_string(),
            frankfurter_base_url: DEFAULT_FRANKFURTER_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            alphavantage_api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Defaults, with the API key taken from `ALPHAVANTAGE_API_KEY` when set.
    pub fn from_env() -> Self {
        let key = std::env::var(API_KEY_ENV)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        Self {
            alphavantage_api_key: key,
            ..Self::default()
        }
    }
}
