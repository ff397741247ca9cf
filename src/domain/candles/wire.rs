//! Wire types for the kline (candlestick) history API.

use crate::shared::serde_util::timestamp_secs;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One raw kline record. `id` is the period's Unix-seconds timestamp.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KlineTick {
    #[serde(deserialize_with = "timestamp_secs::deserialize")]
    pub id: DateTime<Utc>,
    pub open: f64,
    pub close: f64,
    pub low: f64,
    pub high: f64,
    pub vol: f64,
    /// Quote-currency turnover, not used by the chart boundary.
    #[serde(default)]
    pub amount: Option<f64>,
    /// Trade count within the period, not used by the chart boundary.
    #[serde(default)]
    pub count: Option<u64>,
}

/// Raw response of `GET {kline_url}/market/history/kline?...`.
///
/// `data` arrives in no guaranteed order; conversion sorts it. A body
/// without `data` (e.g. an upstream error envelope) fails deserialization
/// and propagates as-is — the candle pipeline defines no API-level error
/// check.
#[derive(Debug, Clone, Deserialize)]
pub struct KlineResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub ch: Option<String>,
    #[serde(default)]
    pub ts: Option<u64>,
    pub data: Vec<KlineTick>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kline_response_deserialize() {
        let json = r#"{
            "ch": "market.btcusdt.kline.1day",
            "status": "ok",
            "ts": 1629788763750,
            "data": [
                {"id": 1629738000, "open": 49056.37, "close": 49025.51,
                 "low": 48900.0, "high": 49228.87, "amount": 1835.0873,
                 "vol": 90067433.07, "count": 42228}
            ]
        }"#;
        let resp: KlineResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status.as_deref(), Some("ok"));
        assert_eq!(resp.data.len(), 1);
        let tick = &resp.data[0];
        assert_eq!(tick.open, 49056.37);
        assert_eq!(tick.vol, 90067433.07);
        assert_eq!(tick.id.timestamp(), 1629738000);
    }

    #[test]
    fn test_missing_data_array_fails_deserialization() {
        let json = r#"{"status": "error", "err-code": "invalid-parameter"}"#;
        assert!(serde_json::from_str::<KlineResponse>(json).is_err());
    }

    #[test]
    fn test_optional_turnover_fields() {
        let json = r#"{"data": [
            {"id": 1629738000, "open": 1.0, "close": 2.0, "low": 0.5, "high": 2.5, "vol": 10.0}
        ]}"#;
        let resp: KlineResponse = serde_json::from_str(json).unwrap();
        assert!(resp.data[0].amount.is_none());
        assert!(resp.data[0].count.is_none());
    }
}
