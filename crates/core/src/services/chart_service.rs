use crate::models::aligned::{AlignedRow, AlignedSeries};
use crate::models::analytics::{ExtremaSummary, SeriesStats};
use crate::models::chart::{
    ChartPoint, CombinedChart, Currency, PercentLabels, PlotSeries, TrendAnchors,
};
use crate::models::price::{DateRange, FxPoint, PricePoint};

/// Label shown instead of a number when a percentage has no defined value.
pub const UNDEFINED_LABEL: &str = "undefined";

/// Legend name of the single series in the FX view.
pub const FX_SERIES_NAME: &str = "EUR per 1 USD";

/// Format a percentage with an explicit sign and two decimals, e.g. "+3.47%".
pub fn format_pct(pct: Option<f64>) -> String {
    match pct {
        // `+ 0.0` folds negative zero into "+0.00%".
        Some(v) if v.is_finite() => format!("{:+.2}%", v + 0.0),
        _ => UNDEFINED_LABEL.to_string(),
    }
}

/// Turns aligned data and statistics into chart-ready structures.
///
/// The core computes all the numbers — the renderer only draws them.
/// Nothing here can fail; errors are raised upstream.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// USD and EUR close lines over the aligned dates, in that order.
    pub fn price_overlay(&self, series: &AlignedSeries) -> [PlotSeries; 2] {
        let line = |currency: Currency, pick: fn(&AlignedRow) -> f64| {
            PlotSeries {
                name: currency.code().to_string(),
                points: series
                    .rows()
                    .iter()
                    .map(|r| ChartPoint::new(r.date(), pick(r)))
                    .collect(),
            }
        };
        [
            line(Currency::Usd, |r| r.close_usd()),
            line(Currency::Eur, |r| r.close_eur()),
        ]
    }

    pub fn summary_labels(&self, summary: &ExtremaSummary) -> PercentLabels {
        PercentLabels {
            first_to_last: format_pct(summary.pct_first_to_last),
            max_to_min: format_pct(summary.pct_max_to_min),
            min_to_last: format_pct(summary.pct_min_to_last),
        }
    }

    /// Assemble the combined USD/EUR view.
    pub fn combined_chart(
        &self,
        symbol: &str,
        range: DateRange,
        series: &AlignedSeries,
        stats: &SeriesStats,
        anchors: TrendAnchors,
    ) -> CombinedChart {
        let [usd, eur] = self.price_overlay(series);
        CombinedChart {
            title: format!("{symbol} Price: USD & EUR\n{range}"),
            usd,
            eur,
            anchors,
            usd_labels: self.summary_labels(&stats.usd),
            fx_first_to_last: format_pct(stats.fx.pct_first_to_last),
            eur_labels: self.summary_labels(&stats.eur),
        }
    }

    /// Daily "high" and "low" lines of a price series.
    pub fn high_low_chart(&self, prices: &[PricePoint]) -> [PlotSeries; 2] {
        let line = |name: &str, pick: fn(&PricePoint) -> f64| PlotSeries {
            name: name.to_string(),
            points: prices.iter().map(|p| ChartPoint::new(p.date, pick(p))).collect(),
        };
        [line("high", |p| p.high), line("low", |p| p.low)]
    }

    /// Single USD→EUR rate line.
    pub fn fx_chart(&self, rates: &[FxPoint]) -> PlotSeries {
        PlotSeries {
            name: FX_SERIES_NAME.to_string(),
            points: rates.iter().map(|p| ChartPoint::new(p.date, p.rate)).collect(),
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
