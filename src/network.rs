//! Network URL constants for the chartfeed SDK.

/// Default exchange-rate history API base URL.
pub const DEFAULT_RATES_API_URL: &str = "https://api.frankfurter.app";

/// Default kline (candlestick) history API base URL.
pub const DEFAULT_KLINE_API_URL: &str = "https://api.huobi.pro";
