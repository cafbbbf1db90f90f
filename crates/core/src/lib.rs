pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use models::{
    price::DateRange,
    report::{CombinedReport, FxReport, HighLowReport, ViewReport, ViewRequest},
    settings::Settings,
};
use providers::{
    alphavantage::AlphaVantageClient,
    frankfurter::FrankfurterClient,
    traits::{FxRateProvider, MarketDataProvider},
};
use services::{
    alignment_service::AlignmentService, chart_service::ChartService,
    trend_service::TrendService,
};

use errors::CoreError;

/// Maximum date range in days (10 years).
const MAX_RANGE_DAYS: i64 = 3650;

/// Main entry point for the fx-viewer core library.
///
/// Each call is one user action: fetch, align, summarize, annotate and
/// hand back a serializable report. Nothing is kept between calls.
#[must_use]
pub struct SymbolFxViewer {
    market: Box<dyn MarketDataProvider>,
    fx: Box<dyn FxRateProvider>,
    alignment_service: AlignmentService,
    trend_service: TrendService,
    chart_service: ChartService,
}

impl std::fmt::Debug for SymbolFxViewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolFxViewer")
            .field("market", &self.market.name())
            .field("fx", &self.fx.name())
            .finish()
    }
}

impl SymbolFxViewer {
    /// Build a viewer backed by Alpha Vantage and Frankfurter.
    /// Fails when `settings` carries no Alpha Vantage API key.
    pub fn new(settings: &Settings) -> Result<Self, CoreError> {
        let market = AlphaVantageClient::new(settings)?;
        let fx = FrankfurterClient::new(settings);
        Ok(Self::with_providers(Box::new(market), Box::new(fx)))
    }

    /// Build a viewer over arbitrary providers (e.g. mocks in tests).
    pub fn with_providers(
        market: Box<dyn MarketDataProvider>,
        fx: Box<dyn FxRateProvider>,
    ) -> Self {
        Self {
            market,
            fx,
            alignment_service: AlignmentService::new(),
            trend_service: TrendService::new(),
            chart_service: ChartService::new(),
        }
    }

    /// Dispatch a request to the matching view.
    pub async fn load(&self, request: ViewRequest) -> Result<ViewReport, CoreError> {
        tracing::debug!(mode = ?request.mode(), "loading view");
        match request {
            ViewRequest::SymbolEur { symbol, range } => {
                self.symbol_eur(&symbol, range).await.map(ViewReport::SymbolEur)
            }
            ViewRequest::SymbolHighLow { symbol } => {
                self.symbol_high_low(&symbol).await.map(ViewReport::SymbolHighLow)
            }
            ViewRequest::UsdEurFx { range } => {
                self.usd_eur_fx(range).await.map(ViewReport::UsdEurFx)
            }
        }
    }

    // ── Views ───────────────────────────────────────────────────────

    /// Symbol close in USD and EUR over `range`, with statistics and
    /// trend segments.
    pub async fn symbol_eur(
        &self,
        symbol: &str,
        range: DateRange,
    ) -> Result<CombinedReport, CoreError> {
        let symbol = normalize_symbol(symbol)?;
        validate_range(range)?;

        // Range filtering happens in `align`, so an empty fetch is
        // distinguishable from a range that excludes every price.
        let prices = self.market.fetch_daily(&symbol, None).await?;
        let rates = self.fx.fetch_rates(range).await?;

        let aligned = self.alignment_service.align(&prices, &rates, Some(range))?;
        let stats = self.alignment_service.stats(&aligned)?;
        let anchors = self.trend_service.annotate(&aligned, &stats.usd, &stats.eur)?;
        let chart = self
            .chart_service
            .combined_chart(&symbol, range, &aligned, &stats, anchors);

        tracing::debug!(%symbol, %range, rows = aligned.len(), "built combined report");
        Ok(CombinedReport {
            symbol,
            range,
            aligned,
            stats,
            chart,
        })
    }

    /// Daily high and low of `symbol` over whatever history the provider returns.
    pub async fn symbol_high_low(&self, symbol: &str) -> Result<HighLowReport, CoreError> {
        let symbol = normalize_symbol(symbol)?;

        let prices = self.market.fetch_daily(&symbol, None).await?;
        if prices.is_empty() {
            return Err(CoreError::EmptyUpstream(symbol));
        }

        let series = Vec::from(self.chart_service.high_low_chart(&prices));
        Ok(HighLowReport {
            title: format!("{symbol} – High & Low"),
            symbol,
            prices,
            series,
        })
    }

    /// Historical USD→EUR rate over `range`.
    pub async fn usd_eur_fx(&self, range: DateRange) -> Result<FxReport, CoreError> {
        validate_range(range)?;

        let rates = self.fx.fetch_rates(range).await?;
        if rates.is_empty() {
            return Err(CoreError::EmptyUpstream("fx rates".into()));
        }

        let series = self.chart_service.fx_chart(&rates);
        Ok(FxReport {
            range,
            rates,
            title: "USD → EUR exchange rate".to_string(),
            series,
        })
    }
}

fn normalize_symbol(symbol: &str) -> Result<String, CoreError> {
    let symbol = symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(CoreError::Validation("Symbol must not be empty".into()));
    }
    Ok(symbol)
}

fn validate_range(range: DateRange) -> Result<(), CoreError> {
    let range_days = (range.end() - range.start()).num_days();
    if range_days > MAX_RANGE_DAYS {
        return Err(CoreError::Validation(format!(
            "Range of {range_days} days exceeds maximum of {MAX_RANGE_DAYS} days (10 years)"
        )));
    }
    Ok(())
}
