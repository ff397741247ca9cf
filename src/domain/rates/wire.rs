//! Wire types for the exchange-rate history API.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Raw response of `GET {rates_url}/{from}..{to}?from={BASE}&to={TARGET}`.
///
/// `rates` maps date keys (`"YYYY-MM-DD"`) to per-currency-code rates. The
/// mapping's order is not guaranteed to be chronological; a `BTreeMap`
/// keeps iteration deterministic, and conversion sorts by parsed date
/// regardless.
#[derive(Debug, Clone, Deserialize)]
pub struct RateHistoryResponse {
    /// Error message; non-empty means the request failed upstream.
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub rates: BTreeMap<String, HashMap<String, f64>>,
    /// Echoed request amount (always 1 for history queries).
    #[serde(default)]
    pub amount: Option<f64>,
    /// Echoed base currency code.
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_response_deserialize() {
        let json = r#"{
            "amount": 1.0,
            "base": "NZD",
            "start_date": "2020-01-01",
            "end_date": "2020-01-03",
            "rates": {
                "2020-01-02": {"CNY": 4.6651},
                "2020-01-03": {"CNY": 4.6412}
            }
        }"#;
        let resp: RateHistoryResponse = serde_json::from_str(json).unwrap();
        assert!(resp.error.is_none());
        assert_eq!(resp.rates.len(), 2);
        assert_eq!(resp.rates["2020-01-02"]["CNY"], 4.6651);
        assert_eq!(resp.base.as_deref(), Some("NZD"));
    }

    #[test]
    fn test_error_body_deserialize() {
        let json = r#"{"error": "not found"}"#;
        let resp: RateHistoryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.error.as_deref(), Some("not found"));
        assert!(resp.rates.is_empty());
    }
}
