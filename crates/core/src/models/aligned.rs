use chrono::NaiveDate;
use serde::Serialize;

/// One date on which both a closing price and an FX rate were published.
///
/// `close_eur` is derived on construction and the fields are read-only,
/// so it always equals `close_usd * rate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlignedRow {
    date: NaiveDate,
    close_usd: f64,
    rate: f64,
    close_eur: f64,
}

impl AlignedRow {
    pub fn new(date: NaiveDate, close_usd: f64, rate: f64) -> Self {
        Self {
            date,
            close_usd,
            rate,
            close_eur: close_usd * rate,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn close_usd(&self) -> f64 {
        self.close_usd
    }

    /// EUR per 1 USD on this date.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn close_eur(&self) -> f64 {
        self.close_eur
    }
}

/// Date-ascending, non-empty result of joining prices with FX rates.
///
/// Only `alignment_service::align` builds these.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AlignedSeries {
    rows: Vec<AlignedRow>,
}

impl AlignedSeries {
    /// Caller guarantees `rows` is non-empty and sorted by date.
    pub(crate) fn from_sorted_rows(rows: Vec<AlignedRow>) -> Self {
        debug_assert!(!rows.is_empty());
        debug_assert!(rows.windows(2).all(|w| w[0].date <= w[1].date));
        Self { rows }
    }

    pub fn rows(&self) -> &[AlignedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|r| r.date).collect()
    }

    pub fn usd_closes(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.close_usd).collect()
    }

    pub fn eur_closes(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.close_eur).collect()
    }

    pub fn rates(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.rate).collect()
    }
}
