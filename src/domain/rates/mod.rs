//! Exchange-rate domain — rate history series for line charts.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::CurrencyCode;
use chrono::{Days, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::RateChartState;

/// Default base currency for the rate chart.
pub const DEFAULT_BASE_CURRENCY: &str = "NZD";

/// Default target currency for the rate chart.
pub const DEFAULT_TARGET_CURRENCY: &str = "CNY";

/// Default history window length in days.
pub const DEFAULT_WINDOW_DAYS: u64 = 365;

/// One point on the exchange-rate chart.
///
/// `rate` is truncated toward zero to 3 decimal places at construction;
/// see [`wire`] for the raw upstream shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePoint {
    pub date: NaiveDate,
    pub rate: Decimal,
}

/// An exchange-rate history series, strictly ascending by date.
///
/// Immutable after construction; each fetch produces a fresh series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSeries {
    pub base: CurrencyCode,
    pub target: CurrencyCode,
    points: Vec<RatePoint>,
}

impl RateSeries {
    pub fn points(&self) -> &[RatePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&RatePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&RatePoint> {
        self.points.last()
    }

    /// Smallest rate in the series (chart y-axis lower bound).
    pub fn min_rate(&self) -> Option<Decimal> {
        self.points.iter().map(|p| p.rate).min()
    }

    /// Largest rate in the series (chart y-axis upper bound).
    pub fn max_rate(&self) -> Option<Decimal> {
        self.points.iter().map(|p| p.rate).max()
    }
}

/// Parameters for one rate-history fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateQuery {
    pub base: CurrencyCode,
    pub target: CurrencyCode,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl RateQuery {
    pub fn new(
        base: impl Into<CurrencyCode>,
        target: impl Into<CurrencyCode>,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Self {
        Self {
            base: base.into(),
            target: target.into(),
            from,
            to,
        }
    }

    /// A trailing-365-day window ending at `today`.
    pub fn trailing_year(
        base: impl Into<CurrencyCode>,
        target: impl Into<CurrencyCode>,
        today: NaiveDate,
    ) -> Self {
        let from = today
            .checked_sub_days(Days::new(DEFAULT_WINDOW_DAYS))
            .unwrap_or(today);
        Self::new(base, target, from, today)
    }

    /// The default chart query: NZD→CNY over the trailing year, ending on
    /// the local calendar date.
    pub fn default_window() -> Self {
        Self::trailing_year(
            DEFAULT_BASE_CURRENCY,
            DEFAULT_TARGET_CURRENCY,
            Local::now().date_naive(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_trailing_year_window() {
        let query = RateQuery::trailing_year("NZD", "CNY", date("2021-12-31"));
        assert_eq!(query.from, date("2020-12-31"));
        assert_eq!(query.to, date("2021-12-31"));
    }

    #[test]
    fn test_default_window_currencies() {
        let query = RateQuery::default_window();
        assert_eq!(query.base.as_str(), "NZD");
        assert_eq!(query.target.as_str(), "CNY");
        assert!(query.from < query.to);
    }
}
