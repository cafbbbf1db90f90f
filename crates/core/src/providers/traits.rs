use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::price::{DateRange, FxPoint, PricePoint};

/// Source of daily equity prices.
///
/// The viewer only depends on this trait, so the Alpha Vantage client can
/// be swapped (or mocked in tests) without touching the alignment code.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Daily high/low/close for `symbol`, sorted ascending by date.
    /// When `range` is given, only points inside it are returned.
    async fn fetch_daily(
        &self,
        symbol: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<PricePoint>, CoreError>;
}

/// Source of daily USD→EUR reference rates.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait FxRateProvider: Send + Sync {
    fn name(&self) -> &str;

    /// EUR per 1 USD for every published day in `range`, sorted by date.
    async fn fetch_rates(&self, range: DateRange) -> Result<Vec<FxPoint>, CoreError>;
}
