use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::FxRateProvider;
use crate::errors::CoreError;
use crate::models::price::{DateRange, FxPoint};
use crate::models::settings::Settings;

const PROVIDER: &str = "Frankfurter";
const BASE: &str = "USD";
const TARGET: &str = "EUR";

/// Frankfurter client for USD→EUR reference rates.
///
/// - **Free**: no API key, no rate limits.
/// - **Source**: European Central Bank; rates are published on TARGET
///   business days only.
/// - **Endpoint**: `/{start}..{end}?from=USD&to=EUR`
pub struct FrankfurterClient {
    client: Client,
    base_url: String,
}

impl FrankfurterClient {
    pub fn new(settings: &Settings) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(settings.timeout_secs));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: settings.frankfurter_base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for FrankfurterClient {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

// ── Frankfurter API response types ──────────────────────────────────

#[derive(Deserialize)]
struct TimeSeriesResponse {
    rates: Option<HashMap<String, HashMap<String, f64>>>,
}

/// Parse a raw Frankfurter time-series body into ascending EUR-per-USD points.
///
/// Days without an EUR entry are skipped.
pub fn parse_rates(body: &str) -> Result<Vec<FxPoint>, CoreError> {
    let resp: TimeSeriesResponse = serde_json::from_str(body).map_err(|e| {
        CoreError::upstream(PROVIDER, format!("Failed to parse time series for {BASE}/{TARGET}: {e}"))
    })?;

    let rates = resp
        .rates
        .ok_or_else(|| CoreError::upstream(PROVIDER, "Response has no rates payload"))?;

    let mut points = Vec::with_capacity(rates.len());
    for (date_str, day) in &rates {
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
            CoreError::upstream(PROVIDER, format!("Invalid date '{date_str}': {e}"))
        })?;
        if let Some(rate) = day.get(TARGET) {
            points.push(FxPoint { date, rate: *rate });
        }
    }

    points.sort_by_key(|p| p.date);
    Ok(points)
}

/// [`parse_rates`], keeping only the days inside `range`.
///
/// Frankfurter rolls a weekend or holiday start back to the previous
/// business day, so the body can begin before `range.start()`.
pub fn parse_rates_in(body: &str, range: DateRange) -> Result<Vec<FxPoint>, CoreError> {
    let mut points = parse_rates(body)?;
    points.retain(|p| range.contains(p.date));
    Ok(points)
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl FxRateProvider for FrankfurterClient {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn fetch_rates(&self, range: DateRange) -> Result<Vec<FxPoint>, CoreError> {
        let from_str = range.start().format("%Y-%m-%d");
        let to_str = range.end().format("%Y-%m-%d");
        let url = format!("{}/{from_str}..{to_str}", self.base_url);

        let resp = self
            .client
            .get(&url)
            .query(&[("from", BASE), ("to", TARGET)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%status, %range, "Frankfurter request failed");
            return Err(CoreError::upstream(
                PROVIDER,
                format!("Request for {range} failed with status {status}"),
            ));
        }

        let points = parse_rates_in(&resp.text().await?, range)?;
        tracing::debug!(%range, points = points.len(), "fetched USD→EUR rates");
        Ok(points)
    }
}
