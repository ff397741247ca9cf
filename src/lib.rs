//! # chartfeed
//!
//! Chart-ready financial time series from public market-data APIs.
//!
//! Two independent pipelines, no shared state between them:
//!
//! - **Rates** — exchange-rate history for a currency pair over a date
//!   range, as a line-chart series of date/rate points.
//! - **Candles** — OHLCV kline history, as a candlestick/volume series
//!   with the categories/values/volumes projections charting libraries
//!   consume.
//!
//! Each pipeline run is one HTTP fetch, a synchronous transformation, and
//! a hand-off to a caller-supplied renderer. Rendering itself (axes,
//! drawing, tooltips, zoom) is out of scope — see [`render`].
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — shared newtypes, domain models, wire types (WASM-safe)
//! 2. **HTTP** — `ChartFeedHttp` with opt-in retry policies
//! 3. **High-Level Client** — `ChartFeedClient` with per-pipeline
//!    sub-clients and supersede-guarded chart state
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chartfeed::prelude::*;
//!
//! let client = ChartFeedClient::new()?;
//!
//! let rates = client.rates().history(&RateQuery::default_window()).await?;
//! println!("{} points, latest {:?}", rates.len(), rates.last());
//!
//! let candles = client.candles().history().await?;
//! println!("{} candles", candles.len());
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Renderer boundary traits.
pub mod render;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP client with opt-in retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `ChartFeedClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CurrencyCode, Period, RefreshGate};

    // Domain types — rates
    pub use crate::domain::rates::{
        RateChartState, RatePoint, RateQuery, RateSeries, DEFAULT_BASE_CURRENCY,
        DEFAULT_TARGET_CURRENCY,
    };

    // Domain types — candles
    pub use crate::domain::candles::{
        CandleChartState, CandlePoint, CandleQuery, CandleSeries, Direction, VolumeBar,
        DEFAULT_PERIOD, DEFAULT_SIZE, DEFAULT_SYMBOL,
    };

    // Renderer boundary
    pub use crate::render::{CandleChartRenderer, RateChartRenderer};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_KLINE_API_URL, DEFAULT_RATES_API_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{CandlesClient, ChartFeedClient, ChartFeedClientBuilder, RatesClient};
    #[cfg(feature = "http")]
    pub use crate::http::{RetryConfig, RetryPolicy};
}
