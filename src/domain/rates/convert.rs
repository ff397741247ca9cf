//! Conversion from the wire response to a chart-ready rate series.

use super::wire::RateHistoryResponse;
use super::{RatePoint, RateSeries};
use crate::error::SdkError;
use crate::shared::CurrencyCode;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Truncate a raw rate toward zero at 3 decimal places.
///
/// Truncation, not rounding: `1.0549` becomes `1.054`.
fn truncate_rate(raw: f64) -> Result<Decimal, SdkError> {
    Decimal::try_from(raw)
        .map(|d| d.trunc_with_scale(3))
        .map_err(|_| SdkError::Validation(format!("Rate is not a finite number: {}", raw)))
}

impl RateSeries {
    /// Build a series from a wire response.
    ///
    /// Fails with [`SdkError::Api`] if the response carries a non-empty
    /// `error` field, and with [`SdkError::Validation`] on an unparseable
    /// date key or a date entry missing the target currency. Points come
    /// out sorted ascending by date whatever order the mapping used.
    pub fn from_response(
        base: CurrencyCode,
        target: CurrencyCode,
        response: RateHistoryResponse,
    ) -> Result<Self, SdkError> {
        if let Some(message) = response.error {
            if !message.is_empty() {
                return Err(SdkError::Api(message));
            }
        }

        let mut points = Vec::with_capacity(response.rates.len());
        for (date_key, per_currency) in response.rates {
            let date = NaiveDate::parse_from_str(&date_key, "%Y-%m-%d").map_err(|e| {
                SdkError::Validation(format!("Invalid date key {:?}: {}", date_key, e))
            })?;
            let raw = per_currency.get(target.as_str()).copied().ok_or_else(|| {
                SdkError::Validation(format!("No {} rate on {}", target, date_key))
            })?;
            points.push(RatePoint {
                date,
                rate: truncate_rate(raw)?,
            });
        }
        points.sort_by_key(|p| p.date);

        Ok(Self {
            base,
            target,
            points,
        })
    }
}
