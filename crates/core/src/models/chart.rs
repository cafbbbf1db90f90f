use chrono::NaiveDate;
use serde::Serialize;

/// Display currency of a plotted price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Currency {
    Usd,
    Eur,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

/// Which notable points a trend segment connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SegmentKind {
    /// First point → last point
    StartToEnd,
    /// Period high → period low
    MaxToMin,
    /// Period low → last point
    MinToEnd,
}

impl SegmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            SegmentKind::StartToEnd => "start→end",
            SegmentKind::MaxToMin => "max→min",
            SegmentKind::MinToEnd => "min→end",
        }
    }
}

/// A `(date, value)` anchor of a trend segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// A straight two-point reference line drawn over a price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendSegment {
    pub currency: Currency,
    pub kind: SegmentKind,
    pub from: ChartPoint,
    pub to: ChartPoint,
}

impl TrendSegment {
    /// Legend name, e.g. "EUR max→min".
    pub fn name(&self) -> String {
        format!("{} {}", self.currency.code(), self.kind.label())
    }
}

/// The six segments of a combined USD/EUR chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendAnchors {
    pub usd: [TrendSegment; 3],
    pub eur: [TrendSegment; 3],
}

impl TrendAnchors {
    pub fn for_currency(&self, currency: Currency) -> &[TrendSegment; 3] {
        match currency {
            Currency::Usd => &self.usd,
            Currency::Eur => &self.eur,
        }
    }

    /// USD segments first, then EUR.
    pub fn segments(&self) -> impl Iterator<Item = &TrendSegment> {
        self.usd.iter().chain(self.eur.iter())
    }

    pub fn find(&self, currency: Currency, kind: SegmentKind) -> Option<&TrendSegment> {
        self.for_currency(currency).iter().find(|s| s.kind == kind)
    }
}

/// A named line series ready for any plotting backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSeries {
    pub name: String,
    pub points: Vec<ChartPoint>,
}

/// Human-readable percentage strings for one summary, e.g. "+3.47%".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PercentLabels {
    pub first_to_last: String,
    pub max_to_min: String,
    pub min_to_last: String,
}

/// Everything the renderer needs for the combined USD/EUR view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedChart {
    pub title: String,
    pub usd: PlotSeries,
    pub eur: PlotSeries,
    pub anchors: TrendAnchors,
    pub usd_labels: PercentLabels,
    /// Only start→end is meaningful for the FX rate itself.
    pub fx_first_to_last: String,
    pub eur_labels: PercentLabels,
}
