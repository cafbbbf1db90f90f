use chrono::NaiveDate;
use serde::Serialize;

/// First/last/min/max of one numeric column plus the three
/// percentage-change figures derived from them.
///
/// Percentages are `None` when undefined (their denominator was zero).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtremaSummary {
    pub first_value: f64,
    pub first_date: NaiveDate,

    pub last_value: f64,
    pub last_date: NaiveDate,

    /// Earliest date wins on ties.
    pub min_value: f64,
    pub min_date: NaiveDate,

    /// Earliest date wins on ties.
    pub max_value: f64,
    pub max_date: NaiveDate,

    /// Total return over the period: (last − first) / first × 100
    pub pct_first_to_last: Option<f64>,

    /// Drop from the period high to the period low: (min − max) / max × 100
    pub pct_max_to_min: Option<f64>,

    /// Recovery from the trough: (last − min) / min × 100
    pub pct_min_to_last: Option<f64>,
}

/// Statistics for the three columns of an aligned series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesStats {
    pub usd: ExtremaSummary,
    pub eur: ExtremaSummary,
    pub fx: ExtremaSummary,
}
