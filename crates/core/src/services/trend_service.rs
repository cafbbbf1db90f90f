use crate::errors::CoreError;
use crate::models::aligned::AlignedSeries;
use crate::models::analytics::ExtremaSummary;
use crate::models::chart::{ChartPoint, Currency, SegmentKind, TrendAnchors, TrendSegment};

/// Derives the reference segments drawn over the USD and EUR price lines.
///
/// No new arithmetic: every anchor is read from an [`ExtremaSummary`].
pub struct TrendService;

impl TrendService {
    pub fn new() -> Self {
        Self
    }

    /// start→end, max→min and min→end for each of USD and EUR.
    pub fn annotate(
        &self,
        series: &AlignedSeries,
        usd: &ExtremaSummary,
        eur: &ExtremaSummary,
    ) -> Result<TrendAnchors, CoreError> {
        if series.is_empty() {
            return Err(CoreError::EmptyUpstream("aligned series".into()));
        }
        Ok(TrendAnchors {
            usd: Self::segments_for(Currency::Usd, usd),
            eur: Self::segments_for(Currency::Eur, eur),
        })
    }

    fn segments_for(currency: Currency, s: &ExtremaSummary) -> [TrendSegment; 3] {
        let first = ChartPoint::new(s.first_date, s.first_value);
        let last = ChartPoint::new(s.last_date, s.last_value);
        let min = ChartPoint::new(s.min_date, s.min_value);
        let max = ChartPoint::new(s.max_date, s.max_value);

        let segment = |kind, from, to| TrendSegment {
            currency,
            kind,
            from,
            to,
        };
        [
            segment(SegmentKind::StartToEnd, first, last),
            segment(SegmentKind::MaxToMin, max, min),
            segment(SegmentKind::MinToEnd, min, last),
        ]
    }
}

impl Default for TrendService {
    fn default() -> Self {
        Self::new()
    }
}
