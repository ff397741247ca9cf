//! High-level client — `ChartFeedClient` with nested sub-client accessors.
//!
//! Each pipeline has its own sub-client in `domain/<name>/client.rs`. This
//! module keeps the builder, the client-owned chart states, and the
//! accessor methods.

use crate::domain::candles::CandleChartState;
use crate::domain::candles::client::Candles;
use crate::domain::rates::RateChartState;
use crate::domain::rates::client::Rates;
use crate::error::SdkError;
use crate::http::{ChartFeedHttp, RetryPolicy};

use async_lock::RwLock;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::candles::client::Candles as CandlesClient;
pub use crate::domain::rates::client::Rates as RatesClient;

/// The primary entry point for the chartfeed SDK.
///
/// Provides one sub-client per pipeline: `client.rates()` and
/// `client.candles()`. The client owns the two chart state containers, so
/// overlapping `refresh` calls resolve last-requested-wins.
pub struct ChartFeedClient {
    pub(crate) http: ChartFeedHttp,
    /// Rate chart state: latest installed series + refresh generations.
    pub(crate) rate_chart: Arc<RwLock<RateChartState>>,
    /// Candle chart state: latest installed series + refresh generations.
    pub(crate) candle_chart: Arc<RwLock<CandleChartState>>,
}

impl ChartFeedClient {
    /// A client against the default public endpoints, no timeout, no
    /// retries.
    pub fn new() -> Result<Self, SdkError> {
        Self::builder().build()
    }

    pub fn builder() -> ChartFeedClientBuilder {
        ChartFeedClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn rates(&self) -> Rates<'_> {
        Rates { client: self }
    }

    pub fn candles(&self) -> Candles<'_> {
        Candles { client: self }
    }

    /// Drop both installed series.
    pub async fn clear_all(&self) {
        self.rate_chart.write().await.clear();
        self.candle_chart.write().await.clear();
    }
}

impl Clone for ChartFeedClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            rate_chart: self.rate_chart.clone(),
            candle_chart: self.candle_chart.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ChartFeedClientBuilder {
    rates_url: String,
    kline_url: String,
    timeout: Option<Duration>,
    retry: RetryPolicy,
}

impl Default for ChartFeedClientBuilder {
    fn default() -> Self {
        Self {
            rates_url: crate::network::DEFAULT_RATES_API_URL.to_string(),
            kline_url: crate::network::DEFAULT_KLINE_API_URL.to_string(),
            timeout: None,
            retry: RetryPolicy::None,
        }
    }
}

impl ChartFeedClientBuilder {
    pub fn rates_url(mut self, url: &str) -> Self {
        self.rates_url = url.to_string();
        self
    }

    pub fn kline_url(mut self, url: &str) -> Self {
        self.kline_url = url.to_string();
        self
    }

    /// Opt in to a request timeout. Off by default: a fetch runs until the
    /// transport gives up.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Opt in to retries. Off by default: one fetch, one outcome.
    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    pub fn build(self) -> Result<ChartFeedClient, SdkError> {
        let http =
            ChartFeedHttp::with_options(&self.rates_url, &self.kline_url, self.timeout, self.retry)?;
        Ok(ChartFeedClient {
            http,
            rate_chart: Arc::new(RwLock::new(RateChartState::new())),
            candle_chart: Arc::new(RwLock::new(CandleChartState::new())),
        })
    }
}
