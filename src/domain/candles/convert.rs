//! Conversion from the wire response to a chart-ready candle series.

use super::wire::KlineResponse;
use super::{CandlePoint, CandleSeries, Direction};
use chrono::{Local, TimeZone};

impl CandleSeries {
    /// Build a series from a wire response, dating candles in local time.
    pub fn from_response(response: KlineResponse) -> Self {
        Self::from_response_in(response, &Local)
    }

    /// Build a series, dating candles in the given timezone.
    ///
    /// Records are sorted ascending by timestamp first; the upstream array
    /// order is not guaranteed.
    pub fn from_response_in<Tz: TimeZone>(response: KlineResponse, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let mut ticks = response.data;
        ticks.sort_by_key(|t| t.id);

        let points = ticks
            .into_iter()
            .map(|t| CandlePoint {
                timestamp: t.id,
                date: t.id.with_timezone(tz).format("%Y-%m-%d").to_string(),
                open: t.open,
                close: t.close,
                low: t.low,
                high: t.high,
                volume: t.vol,
                direction: Direction::of(t.open, t.close),
            })
            .collect();

        Self { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn response(json: &str) -> KlineResponse {
        serde_json::from_str(json).unwrap()
    }

    fn build(json: &str) -> CandleSeries {
        // Tests pin UTC so date strings do not depend on the host timezone.
        CandleSeries::from_response_in(response(json), &Utc)
    }

    #[test]
    fn test_unsorted_input_comes_out_timestamp_sorted() {
        let series = build(
            r#"{"data": [
                {"id": 1577923200, "open": 2.0, "close": 3.0, "low": 1.0, "high": 4.0, "vol": 20.0},
                {"id": 1577836800, "open": 1.0, "close": 2.0, "low": 0.5, "high": 2.5, "vol": 10.0}
            ]}"#,
        );
        let points = series.points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, "2020-01-01");
        assert_eq!(points[1].date, "2020-01-02");
        assert!(points.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[test]
    fn test_values_preserve_open_close_low_high_order() {
        let series = build(
            r#"{"data": [
                {"id": 1577836800, "open": 10.0, "close": 9.0, "low": 8.5, "high": 10.5, "vol": 7.0}
            ]}"#,
        );
        assert_eq!(series.values(), vec![[10.0, 9.0, 8.5, 10.5]]);
    }

    #[test]
    fn test_volume_bars_carry_direction() {
        let series = build(
            r#"{"data": [
                {"id": 1577836800, "open": 10.0, "close": 9.0, "low": 8.0, "high": 11.0, "vol": 7.0},
                {"id": 1577923200, "open": 9.0, "close": 10.0, "low": 8.0, "high": 11.0, "vol": 8.0},
                {"id": 1578009600, "open": 10.0, "close": 10.0, "low": 9.0, "high": 11.0, "vol": 9.0}
            ]}"#,
        );
        let volumes = series.volumes();
        assert_eq!(volumes[0].0, 7.0);
        assert_eq!(volumes[0].1, 7.0);
        assert_eq!(volumes[0].2, Direction::Down);
        assert_eq!(volumes[1].2, Direction::Up);
        // Flat candle: the tie-break classifies it as rising.
        assert_eq!(volumes[2].2, Direction::Up);
    }

    #[test]
    fn test_categories_match_point_dates() {
        let series = build(
            r#"{"data": [
                {"id": 1577836800, "open": 1.0, "close": 2.0, "low": 0.5, "high": 2.5, "vol": 10.0},
                {"id": 1577923200, "open": 2.0, "close": 3.0, "low": 1.0, "high": 4.0, "vol": 20.0}
            ]}"#,
        );
        assert_eq!(series.categories(), vec!["2020-01-01", "2020-01-02"]);
    }

    #[test]
    fn test_date_formatting_respects_timezone() {
        let json = r#"{"data": [
            {"id": 1577836800, "open": 1.0, "close": 2.0, "low": 0.5, "high": 2.5, "vol": 10.0}
        ]}"#;
        // 2020-01-01T00:00:00Z is still 2019-12-31 in UTC-10.
        let tz = chrono::FixedOffset::west_opt(10 * 3600).unwrap();
        let series = CandleSeries::from_response_in(response(json), &tz);
        assert_eq!(series.points()[0].date, "2019-12-31");
    }

    #[test]
    fn test_identical_input_builds_identical_series() {
        let json = r#"{"data": [
            {"id": 1577836800, "open": 1.0, "close": 2.0, "low": 0.5, "high": 2.5, "vol": 10.0}
        ]}"#;
        assert_eq!(build(json), build(json));
    }
}
