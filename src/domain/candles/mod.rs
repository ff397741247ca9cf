//! Candle domain — OHLCV history series for candlestick/volume charts.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::Period;
use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

pub use state::CandleChartState;

/// Default kline symbol.
pub const DEFAULT_SYMBOL: &str = "btcusdt";

/// Default kline period.
pub const DEFAULT_PERIOD: Period = Period::Day1;

/// Default number of candles to fetch.
pub const DEFAULT_SIZE: u32 = 200;

/// Candle direction as charting libraries encode it: `1` for a falling
/// period (`open > close`), `-1` for a rising one.
///
/// Equal open and close counts as [`Direction::Up`]. The strict `>`
/// comparison is the upstream contract; do not widen it to `>=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Classify one candle period.
    pub fn of(open: f64, close: f64) -> Self {
        if open > close {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// Wire encoding: `Down` → `1`, `Up` → `-1`.
    pub fn as_i8(&self) -> i8 {
        match self {
            Direction::Down => 1,
            Direction::Up => -1,
        }
    }
}

impl Serialize for Direction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i8(self.as_i8())
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match i8::deserialize(deserializer)? {
            1 => Ok(Direction::Down),
            -1 => Ok(Direction::Up),
            other => Err(de::Error::custom(format!(
                "Invalid direction {}, expected 1 or -1",
                other
            ))),
        }
    }
}

/// One candle period, chart-ready.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlePoint {
    /// Period start, from the upstream Unix-seconds timestamp.
    pub timestamp: DateTime<Utc>,
    /// Category label: the timestamp as a local-time `YYYY-MM-DD` string.
    pub date: String,
    pub open: f64,
    pub close: f64,
    pub low: f64,
    pub high: f64,
    pub volume: f64,
    pub direction: Direction,
}

impl CandlePoint {
    /// Candlestick row in the order the chart boundary expects:
    /// `[open, close, low, high]`.
    pub fn values(&self) -> [f64; 4] {
        [self.open, self.close, self.low, self.high]
    }

    /// Volume-bar row: `[vol, vol, direction]`.
    pub fn volume_bar(&self) -> VolumeBar {
        VolumeBar(self.volume, self.volume, self.direction)
    }
}

/// A volume bar crossing the chart boundary as `[vol, vol, ±1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeBar(pub f64, pub f64, pub Direction);

impl Serialize for VolumeBar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(3))?;
        seq.serialize_element(&self.0)?;
        seq.serialize_element(&self.1)?;
        seq.serialize_element(&self.2)?;
        seq.end()
    }
}

/// A candle history series, strictly ascending by timestamp.
///
/// Immutable after construction; each fetch produces a fresh series. The
/// projection methods yield the three parallel arrays a candlestick/volume
/// chart consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries {
    points: Vec<CandlePoint>,
}

impl CandleSeries {
    pub fn points(&self) -> &[CandlePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&CandlePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&CandlePoint> {
        self.points.last()
    }

    /// Category axis labels, one per candle.
    pub fn categories(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.date.as_str()).collect()
    }

    /// Candlestick rows, `[open, close, low, high]` each.
    pub fn values(&self) -> Vec<[f64; 4]> {
        self.points.iter().map(CandlePoint::values).collect()
    }

    /// Volume-bar rows, `[vol, vol, ±1]` each.
    pub fn volumes(&self) -> Vec<VolumeBar> {
        self.points.iter().map(CandlePoint::volume_bar).collect()
    }
}

/// Parameters for one kline fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandleQuery {
    pub symbol: String,
    pub period: Period,
    pub size: u32,
}

impl Default for CandleQuery {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            period: DEFAULT_PERIOD,
            size: DEFAULT_SIZE,
        }
    }
}

impl CandleQuery {
    pub fn new(symbol: impl Into<String>, period: Period, size: u32) -> Self {
        Self {
            symbol: symbol.into(),
            period,
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_open_above_close_is_down() {
        assert_eq!(Direction::of(10.0, 9.0), Direction::Down);
        assert_eq!(Direction::of(10.0, 9.0).as_i8(), 1);
    }

    #[test]
    fn test_direction_open_below_close_is_up() {
        assert_eq!(Direction::of(9.0, 10.0), Direction::Up);
        assert_eq!(Direction::of(9.0, 10.0).as_i8(), -1);
    }

    #[test]
    fn test_direction_tie_counts_as_up() {
        // Strict `>`: a flat candle classifies as rising.
        assert_eq!(Direction::of(10.0, 10.0), Direction::Up);
        assert_eq!(Direction::of(10.0, 10.0).as_i8(), -1);
    }

    #[test]
    fn test_direction_serde_roundtrip() {
        assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Direction::Up).unwrap(), "-1");
        let up: Direction = serde_json::from_str("-1").unwrap();
        assert_eq!(up, Direction::Up);
        assert!(serde_json::from_str::<Direction>("0").is_err());
    }

    #[test]
    fn test_volume_bar_serializes_as_triplet() {
        let bar = VolumeBar(132.5, 132.5, Direction::Up);
        assert_eq!(serde_json::to_string(&bar).unwrap(), "[132.5,132.5,-1]");
    }

    #[test]
    fn test_default_query_is_the_fixed_endpoint() {
        let query = CandleQuery::default();
        assert_eq!(query.symbol, "btcusdt");
        assert_eq!(query.period, Period::Day1);
        assert_eq!(query.size, 200);
    }
}
