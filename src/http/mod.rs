//! HTTP layer: low-level client and retry policies.

pub mod client;
pub mod retry;

pub use client::ChartFeedHttp;
pub use retry::{RetryConfig, RetryPolicy};
