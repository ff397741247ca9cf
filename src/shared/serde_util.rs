//! Custom serde helpers for upstream wire formats.

/// Deserializes a Unix-seconds integer into `DateTime<Utc>`.
///
/// The kline API sends candle timestamps as epoch seconds (`id`), not
/// ISO 8601 strings.
pub mod timestamp_secs {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = i64::deserialize(deserializer)?;
        DateTime::<Utc>::from_timestamp(secs, 0)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", secs)))
    }
}
