use serde::Serialize;

use super::aligned::AlignedSeries;
use super::analytics::SeriesStats;
use super::chart::{CombinedChart, PlotSeries};
use super::price::{DateRange, FxPoint, PricePoint};

/// The three views offered by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViewMode {
    /// Symbol close in USD and EUR with trend segments.
    SymbolEur,
    /// Daily high and low of a symbol.
    SymbolHighLow,
    /// Historical USD→EUR rate.
    UsdEurFx,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [
        ViewMode::SymbolEur,
        ViewMode::SymbolHighLow,
        ViewMode::UsdEurFx,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ViewMode::SymbolEur => "Symbol × EUR",
            ViewMode::SymbolHighLow => "Symbol High/Low",
            ViewMode::UsdEurFx => "USD → EUR FX",
        }
    }
}

/// Output of the `SymbolEur` view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedReport {
    pub symbol: String,
    pub range: DateRange,
    pub aligned: AlignedSeries,
    pub stats: SeriesStats,
    pub chart: CombinedChart,
}

/// Output of the `SymbolHighLow` view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighLowReport {
    pub symbol: String,
    pub prices: Vec<PricePoint>,
    pub title: String,
    pub series: Vec<PlotSeries>,
}

/// Output of the `UsdEurFx` view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FxReport {
    pub range: DateRange,
    pub rates: Vec<FxPoint>,
    pub title: String,
    pub series: PlotSeries,
}

/// A user action: the selected view plus its inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewRequest {
    SymbolEur { symbol: String, range: DateRange },
    SymbolHighLow { symbol: String },
    UsdEurFx { range: DateRange },
}

impl ViewRequest {
    pub fn mode(&self) -> ViewMode {
        match self {
            ViewRequest::SymbolEur { .. } => ViewMode::SymbolEur,
            ViewRequest::SymbolHighLow { .. } => ViewMode::SymbolHighLow,
            ViewRequest::UsdEurFx { .. } => ViewMode::UsdEurFx,
        }
    }
}

/// Result of a [`ViewRequest`], one variant per mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "report")]
pub enum ViewReport {
    SymbolEur(CombinedReport),
    SymbolHighLow(HighLowReport),
    UsdEurFx(FxReport),
}
