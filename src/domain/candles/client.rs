//! Candles sub-client — fetch, build, refresh.

use crate::client::ChartFeedClient;
use crate::domain::candles::{CandleQuery, CandleSeries};
use crate::error::SdkError;
use crate::render::CandleChartRenderer;

/// Sub-client for the candle pipeline.
pub struct Candles<'a> {
    pub(crate) client: &'a ChartFeedClient,
}

impl<'a> Candles<'a> {
    /// Fetch and build the fixed candle history: 200 daily btcusdt candles.
    pub async fn history(&self) -> Result<CandleSeries, SdkError> {
        self.history_for(&CandleQuery::default()).await
    }

    /// Fetch and build a candle history for an arbitrary symbol, period
    /// and size.
    pub async fn history_for(&self, query: &CandleQuery) -> Result<CandleSeries, SdkError> {
        let response = self
            .client
            .http
            .get_kline(&query.symbol, query.period, query.size)
            .await?;
        Ok(CandleSeries::from_response(response))
    }

    /// Run the whole pipeline against the client-owned chart state: begin
    /// a refresh, fetch, build, commit, render on commit.
    ///
    /// Returns `Ok(true)` when the series was installed and rendered, and
    /// `Ok(false)` when a refresh begun later superseded this one.
    pub async fn refresh<R: CandleChartRenderer>(
        &self,
        query: &CandleQuery,
        renderer: &mut R,
    ) -> Result<bool, SdkError> {
        let generation = self.client.candle_chart.write().await.begin_refresh();
        let series = self.history_for(query).await?;
        let candles = series.len();

        let mut state = self.client.candle_chart.write().await;
        if state.commit(generation, series) {
            if let Some(current) = state.series() {
                renderer.render(current);
            }
            tracing::debug!(generation, candles, "Candle chart refreshed");
            Ok(true)
        } else {
            tracing::debug!(generation, "Candle refresh superseded, result dropped");
            Ok(false)
        }
    }

    /// The series currently installed in the client-owned chart state.
    pub async fn current(&self) -> Option<CandleSeries> {
        self.client.candle_chart.read().await.series().cloned()
    }

    /// Drop the installed series.
    pub async fn clear(&self) {
        self.client.candle_chart.write().await.clear();
    }
}
