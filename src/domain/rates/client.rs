//! Rates sub-client — fetch, build, refresh.

use crate::client::ChartFeedClient;
use crate::domain::rates::{RateQuery, RateSeries};
use crate::error::SdkError;
use crate::render::RateChartRenderer;

/// Sub-client for the exchange-rate pipeline.
pub struct Rates<'a> {
    pub(crate) client: &'a ChartFeedClient,
}

impl<'a> Rates<'a> {
    /// Fetch and build a rate-history series.
    ///
    /// One GET, one series; identical inputs against identical upstream
    /// data yield identical output.
    pub async fn history(&self, query: &RateQuery) -> Result<RateSeries, SdkError> {
        let response = self
            .client
            .http
            .get_rate_history(&query.base, &query.target, query.from, query.to)
            .await?;
        RateSeries::from_response(query.base.clone(), query.target.clone(), response)
    }

    /// Run the whole pipeline against the client-owned chart state: begin
    /// a refresh, fetch, build, commit, render on commit.
    ///
    /// Returns `Ok(true)` when the series was installed and rendered, and
    /// `Ok(false)` when a refresh begun later superseded this one — the
    /// stale series is dropped and the renderer is not called.
    pub async fn refresh<R: RateChartRenderer>(
        &self,
        query: &RateQuery,
        renderer: &mut R,
    ) -> Result<bool, SdkError> {
        let generation = self.client.rate_chart.write().await.begin_refresh();
        let series = self.history(query).await?;
        let points = series.len();

        let mut state = self.client.rate_chart.write().await;
        if state.commit(generation, series) {
            if let Some(current) = state.series() {
                renderer.render(current);
            }
            tracing::debug!(generation, points, "Rate chart refreshed");
            Ok(true)
        } else {
            tracing::debug!(generation, "Rate refresh superseded, result dropped");
            Ok(false)
        }
    }

    /// The series currently installed in the client-owned chart state.
    pub async fn current(&self) -> Option<RateSeries> {
        self.client.rate_chart.read().await.series().cloned()
    }

    /// Drop the installed series.
    pub async fn clear(&self) {
        self.client.rate_chart.write().await.clear();
    }
}
