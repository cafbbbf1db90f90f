use thiserror::Error;

/// Unified error type for the entire fx-viewer-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    #[error("Upstream error ({provider}): {message}")]
    Upstream {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Alignment / Statistics ──────────────────────────────────────
    #[error("No data fetched for {0}")]
    EmptyUpstream(String),

    #[error("Price and FX calendars do not overlap — check the date range")]
    NoOverlap,

    #[error("Percentage change is undefined: division by zero")]
    DivisionByZero,

    #[error("Percentage change is undefined: result is not a finite number")]
    NonFinite,

    // ── Caller input ────────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for building a [`CoreError::Upstream`] from a provider name.
    pub fn upstream(provider: &str, message: impl Into<String>) -> Self {
        CoreError::Upstream {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    /// Whether the failure came from outside the crate (API or transport)
    /// rather than from the fetched data itself.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            CoreError::Upstream { .. } | CoreError::Network(_) | CoreError::Deserialization(_)
        )
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Strip query parameters: Alpha Vantage URLs carry the API key.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
