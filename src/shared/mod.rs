//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the upstream APIs use, so they can be used
//! directly in wire types without conversion overhead.

pub mod refresh;
pub mod serde_util;

pub use refresh::RefreshGate;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── CurrencyCode ────────────────────────────────────────────────────────────

/// Newtype for ISO 4217 currency codes (e.g. `"NZD"`, `"CNY"`).
///
/// Passed through to the exchange-rate API verbatim; no normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CurrencyCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for CurrencyCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CurrencyCode(s.to_string()))
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CurrencyCode(s))
    }
}

// ─── Period ──────────────────────────────────────────────────────────────────

/// Kline candle period, in the upstream API's wire spelling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1min")]
    Minute1,
    #[serde(rename = "5min")]
    Minute5,
    #[serde(rename = "15min")]
    Minute15,
    #[serde(rename = "30min")]
    Minute30,
    #[serde(rename = "60min")]
    Minute60,
    #[serde(rename = "4hour")]
    Hour4,
    #[default]
    #[serde(rename = "1day")]
    Day1,
    #[serde(rename = "1week")]
    Week1,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "1min",
            Self::Minute5 => "5min",
            Self::Minute15 => "15min",
            Self::Minute30 => "30min",
            Self::Minute60 => "60min",
            Self::Hour4 => "4hour",
            Self::Day1 => "1day",
            Self::Week1 => "1week",
        }
    }

    /// Duration of one candle in seconds.
    pub fn seconds(&self) -> u64 {
        match self {
            Self::Minute1 => 60,
            Self::Minute5 => 300,
            Self::Minute15 => 900,
            Self::Minute30 => 1800,
            Self::Minute60 => 3600,
            Self::Hour4 => 14400,
            Self::Day1 => 86400,
            Self::Week1 => 604800,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_serde() {
        let code = CurrencyCode::from("NZD");
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"NZD\"");
        let back: CurrencyCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, back);
    }

    #[test]
    fn test_currency_code_passthrough() {
        // No normalization: what the caller typed is what goes on the wire.
        let code = CurrencyCode::from("nzd");
        assert_eq!(code.as_str(), "nzd");
    }

    #[test]
    fn test_period_serde() {
        let p: Period = serde_json::from_str("\"1day\"").unwrap();
        assert_eq!(p, Period::Day1);
        assert_eq!(p.seconds(), 86400);
        assert_eq!(serde_json::to_string(&Period::Hour4).unwrap(), "\"4hour\"");
    }

    #[test]
    fn test_period_default_is_daily() {
        assert_eq!(Period::default(), Period::Day1);
        assert_eq!(Period::default().as_str(), "1day");
    }
}
