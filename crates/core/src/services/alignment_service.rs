use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::errors::CoreError;
use crate::models::aligned::{AlignedRow, AlignedSeries};
use crate::models::analytics::{ExtremaSummary, SeriesStats};
use crate::models::price::{DateRange, FxPoint, PricePoint};

/// Percentage change from `from` to `to`: (to − from) / from × 100.
///
/// A zero base has no defined relative change. A result that overflows or
/// comes from a NaN/infinite input is `NonFinite`.
pub fn percent_change(from: f64, to: f64) -> Result<f64, CoreError> {
    if from == 0.0 {
        return Err(CoreError::DivisionByZero);
    }
    let pct = (to - from) / from * 100.0;
    if !pct.is_finite() {
        return Err(CoreError::NonFinite);
    }
    Ok(pct)
}

/// Joins a price series with USD→EUR rates and derives the period statistics.
///
/// Everything here is recomputed per request; nothing is cached.
pub struct AlignmentService;

impl AlignmentService {
    pub fn new() -> Self {
        Self
    }

    /// Inner-join `prices` and `fx` on date and convert each close to EUR.
    ///
    /// 1. Reject empty inputs (`EmptyUpstream`)
    /// 2. Keep prices inside `range` (inclusive) when given
    /// 3. Keep only dates present in both series
    /// 4. Sort ascending; an empty join is `NoOverlap`
    pub fn align(
        &self,
        prices: &[PricePoint],
        fx: &[FxPoint],
        range: Option<DateRange>,
    ) -> Result<AlignedSeries, CoreError> {
        if prices.is_empty() {
            return Err(CoreError::EmptyUpstream("prices".into()));
        }
        if fx.is_empty() {
            return Err(CoreError::EmptyUpstream("fx rates".into()));
        }

        let rates: BTreeMap<NaiveDate, f64> = fx.iter().map(|p| (p.date, p.rate)).collect();

        let mut rows: Vec<AlignedRow> = prices
            .iter()
            .filter(|p| range.map_or(true, |r| r.contains(p.date)))
            .filter_map(|p| {
                rates
                    .get(&p.date)
                    .map(|rate| AlignedRow::new(p.date, p.close, *rate))
            })
            .collect();

        rows.sort_by_key(|r| r.date());

        tracing::debug!(
            prices = prices.len(),
            rates = fx.len(),
            aligned = rows.len(),
            "aligned price and fx series"
        );

        if rows.is_empty() {
            return Err(CoreError::NoOverlap);
        }
        Ok(AlignedSeries::from_sorted_rows(rows))
    }

    /// First/last/min/max of `values` (parallel to `dates`) and the three
    /// percentage changes between them.
    ///
    /// Ties on min or max resolve to the earliest index. A percentage whose
    /// base is zero, or that overflows, is reported as `None`. NaN or
    /// infinite values are rejected up front.
    pub fn summarize(
        &self,
        dates: &[NaiveDate],
        values: &[f64],
    ) -> Result<ExtremaSummary, CoreError> {
        if dates.len() != values.len() {
            return Err(CoreError::Validation(format!(
                "Series has {} dates but {} values",
                dates.len(),
                values.len()
            )));
        }
        let (Some(&first_value), Some(&last_value)) = (values.first(), values.last()) else {
            return Err(CoreError::EmptyUpstream("series".into()));
        };
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(CoreError::Validation(format!(
                "Series value on {} is not a finite number",
                dates[i]
            )));
        }

        let mut min_idx = 0;
        let mut max_idx = 0;
        for (i, &v) in values.iter().enumerate().skip(1) {
            // Strict comparisons keep the earliest occurrence on ties.
            if v < values[min_idx] {
                min_idx = i;
            }
            if v > values[max_idx] {
                max_idx = i;
            }
        }
        let min_value = values[min_idx];
        let max_value = values[max_idx];

        Ok(ExtremaSummary {
            first_value,
            first_date: dates[0],
            last_value,
            last_date: dates[dates.len() - 1],
            min_value,
            min_date: dates[min_idx],
            max_value,
            max_date: dates[max_idx],
            pct_first_to_last: defined(percent_change(first_value, last_value), "first→last"),
            pct_max_to_min: defined(percent_change(max_value, min_value), "max→min"),
            pct_min_to_last: defined(percent_change(min_value, last_value), "min→last"),
        })
    }

    pub fn summarize_usd(&self, series: &AlignedSeries) -> Result<ExtremaSummary, CoreError> {
        self.summarize(&series.dates(), &series.usd_closes())
    }

    pub fn summarize_eur(&self, series: &AlignedSeries) -> Result<ExtremaSummary, CoreError> {
        self.summarize(&series.dates(), &series.eur_closes())
    }

    pub fn summarize_fx(&self, series: &AlignedSeries) -> Result<ExtremaSummary, CoreError> {
        self.summarize(&series.dates(), &series.rates())
    }

    /// USD, EUR and FX summaries in one go.
    ///
    /// They are computed independently: the rate moves on its own, so USD
    /// and EUR returns can differ in sign.
    pub fn stats(&self, series: &AlignedSeries) -> Result<SeriesStats, CoreError> {
        Ok(SeriesStats {
            usd: self.summarize_usd(series)?,
            eur: self.summarize_eur(series)?,
            fx: self.summarize_fx(series)?,
        })
    }
}

impl Default for AlignmentService {
    fn default() -> Self {
        Self::new()
    }
}

fn defined(pct: Result<f64, CoreError>, what: &str) -> Option<f64> {
    match pct {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(change = what, error = %e, "percentage reported as undefined");
            None
        }
    }
}

