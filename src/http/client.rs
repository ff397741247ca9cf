//! Low-level HTTP client — `ChartFeedHttp`.
//!
//! One method per API endpoint. Returns wire types; conversion to domain
//! series happens at the sub-client boundary. Internal to the SDK — the
//! high-level client wraps this.

use crate::domain::candles::wire::KlineResponse;
use crate::domain::rates::wire::RateHistoryResponse;
use crate::error::HttpError;
use crate::http::retry::RetryPolicy;
use crate::shared::{CurrencyCode, Period};

use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the two chart-data APIs.
#[derive(Debug, Clone)]
pub struct ChartFeedHttp {
    rates_url: String,
    kline_url: String,
    client: Client,
    retry: RetryPolicy,
}

impl ChartFeedHttp {
    pub fn new(rates_url: &str, kline_url: &str) -> Result<Self, HttpError> {
        Self::with_options(rates_url, kline_url, None, RetryPolicy::None)
    }

    /// Build with an optional request timeout and a retry policy.
    ///
    /// Both default to off: one fetch, one outcome (see [`RetryPolicy`]).
    pub fn with_options(
        rates_url: &str,
        kline_url: &str,
        timeout: Option<Duration>,
        retry: RetryPolicy,
    ) -> Result<Self, HttpError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(t) = timeout {
                builder = builder.timeout(t);
            }
            builder = builder.pool_max_idle_per_host(10);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            rates_url: rates_url.trim_end_matches('/').to_string(),
            kline_url: kline_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            retry,
        })
    }

    // ── Rate history ─────────────────────────────────────────────────────

    /// `GET {rates_url}/{from}..{to}?from={BASE}&to={TARGET}`.
    ///
    /// The rate API reports failures inside the JSON body (`error` field),
    /// sometimes alongside a non-2xx status. The body is therefore parsed
    /// first whatever the status; the status mapping only applies when the
    /// body is not a rate-history document.
    pub async fn get_rate_history(
        &self,
        base: &CurrencyCode,
        target: &CurrencyCode,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<RateHistoryResponse, HttpError> {
        let url = format!(
            "{}/{}..{}?from={}&to={}",
            self.rates_url,
            from.format("%Y-%m-%d"),
            to.format("%Y-%m-%d"),
            urlencoding::encode(base.as_str()),
            urlencoding::encode(target.as_str()),
        );
        self.get_with_retry(&url, || Self::fetch_lenient(&self.client, &url)).await
    }

    // ── Kline history ────────────────────────────────────────────────────

    /// `GET {kline_url}/market/history/kline?period=..&size=..&symbol=..`.
    pub async fn get_kline(
        &self,
        symbol: &str,
        period: Period,
        size: u32,
    ) -> Result<KlineResponse, HttpError> {
        let url = format!(
            "{}/market/history/kline?period={}&size={}&symbol={}",
            self.kline_url,
            period.as_str(),
            size,
            urlencoding::encode(symbol),
        );
        self.get_with_retry(&url, || Self::fetch_strict(&self.client, &url)).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get_with_retry<T, F, Fut>(&self, url: &str, request_fn: F) -> Result<T, HttpError>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T, HttpError>>,
    {
        let config = match self.retry.config() {
            None => return request_fn().await,
            Some(c) => c,
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match request_fn().await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                            }
                            config.retryable_statuses.contains(&429)
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            #[cfg(not(target_arch = "wasm32"))]
                            let retryable = re.is_connect() || re.is_timeout() || re.is_request();
                            #[cfg(target_arch = "wasm32")]
                            let retryable = re.is_timeout() || re.is_request();
                            retryable
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    /// Strict fetch: non-2xx statuses map to errors before the body is
    /// deserialized.
    async fn fetch_strict<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, HttpError> {
        let resp = client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        Err(Self::map_status(status.as_u16(), resp.text().await.unwrap_or_default()))
    }

    /// Lenient fetch: an error status may still carry a parseable document
    /// whose in-body `error` field is the real signal, so the body is tried
    /// first and the status mapping is the fallback.
    async fn fetch_lenient<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, HttpError> {
        let resp = client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        let body = resp.text().await?;
        match serde_json::from_str::<T>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(Self::map_status(status.as_u16(), body)),
        }
    }

    fn map_status(status: u16, body: String) -> HttpError {
        match status {
            404 => HttpError::NotFound(body),
            429 => HttpError::RateLimited {
                retry_after_ms: None,
            },
            400..=499 => HttpError::BadRequest(body),
            _ => HttpError::ServerError { status, body },
        }
    }
}
