use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::MarketDataProvider;
use crate::errors::CoreError;
use crate::models::price::{DateRange, PricePoint};
use crate::models::settings::{OutputSize, Settings};

const PROVIDER: &str = "Alpha Vantage";

/// Alpha Vantage client for daily equity prices (`TIME_SERIES_DAILY`).
///
/// - **Free tier**: 25 requests/day across all endpoints.
/// - **Requires**: API key, passed in through [`Settings`].
/// - **Compact** output covers the latest 100 trading days.
///
/// Prices are in the listing currency, typically USD.
pub struct AlphaVantageClient {
    client: Client,
    api_key: String,
    base_url: String,
    output_size: OutputSize,
}

impl AlphaVantageClient {
    /// Build a client from explicit settings. Fails when no API key is set.
    pub fn new(settings: &Settings) -> Result<Self, CoreError> {
        let api_key = settings
            .alphavantage_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| CoreError::Validation("Alpha Vantage API key is not configured".into()))?
            .to_string();

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(settings.timeout_secs));
        Ok(Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            api_key,
            base_url: settings.alphavantage_base_url.clone(),
            output_size: settings.output_size,
        })
    }
}

// ── Alpha Vantage API response types ────────────────────────────────

#[derive(Deserialize)]
struct TimeSeriesResponse {
    #[serde(rename = "Time Series (Daily)")]
    time_series: Option<HashMap<String, DailyData>>,

    // Alpha Vantage answers 200 with one of these instead of data when the
    // symbol is unknown or the quota is exhausted.
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

#[derive(Deserialize)]
struct DailyData {
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
}

/// Parse a raw `TIME_SERIES_DAILY` JSON body into ascending price points.
pub fn parse_daily_series(body: &str, symbol: &str) -> Result<Vec<PricePoint>, CoreError> {
    let resp: TimeSeriesResponse = serde_json::from_str(body).map_err(|e| {
        CoreError::upstream(PROVIDER, format!("Failed to parse time series for {symbol}: {e}"))
    })?;

    let Some(time_series) = resp.time_series else {
        let detail = resp
            .error_message
            .or(resp.note)
            .or(resp.information)
            .unwrap_or_else(|| "API limit may be exceeded".to_string());
        tracing::warn!(symbol, %detail, "Alpha Vantage returned no time series");
        return Err(CoreError::upstream(
            PROVIDER,
            format!("No time series data for {symbol}: {detail}"),
        ));
    };

    let mut points = time_series
        .iter()
        .map(|(date_str, data)| parse_entry(date_str, data, symbol))
        .collect::<Result<Vec<_>, _>>()?;

    points.sort_by_key(|p| p.date);
    Ok(points)
}

fn parse_entry(date_str: &str, data: &DailyData, symbol: &str) -> Result<PricePoint, CoreError> {
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
        CoreError::upstream(PROVIDER, format!("Invalid date '{date_str}' for {symbol}: {e}"))
    })?;
    let number = |field: &str, raw: &str| -> Result<f64, CoreError> {
        let value: f64 = raw.trim().parse().map_err(|e| {
            CoreError::upstream(
                PROVIDER,
                format!("Invalid {field} '{raw}' for {symbol} on {date}: {e}"),
            )
        })?;
        // `f64::from_str` accepts "NaN" and "inf".
        if !value.is_finite() {
            return Err(CoreError::upstream(
                PROVIDER,
                format!("Non-finite {field} '{raw}' for {symbol} on {date}"),
            ));
        }
        Ok(value)
    };
    Ok(PricePoint {
        date,
        high: number("high", &data.high)?,
        low: number("low", &data.low)?,
        close: number("close", &data.close)?,
    })
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataProvider for AlphaVantageClient {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn fetch_daily(
        &self,
        symbol: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<PricePoint>, CoreError> {
        let symbol = symbol.trim().to_uppercase();

        let body = self
            .client
            .get(&self.base_url)
            .query(&[
                ("function", "TIME_SERIES_DAILY"),
                ("symbol", symbol.as_str()),
                ("outputsize", self.output_size.as_param()),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?
            .text()
            .await?;

        let mut points = parse_daily_series(&body, &symbol)?;
        if let Some(range) = range {
            points.retain(|p| range.contains(p.date));
        }

        tracing::debug!(%symbol, points = points.len(), "fetched daily series");
        Ok(points)
    }
}
