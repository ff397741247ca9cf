//! Renderer boundary — dependency-injected chart sinks.
//!
//! Rendering (axis scaling, drawing, tooltips, zoom, resize) belongs to an
//! external charting component. The SDK only fixes the shape of the data
//! crossing the boundary and requires the render target to be passed in
//! explicitly — it is never looked up from ambient state.

use crate::domain::candles::CandleSeries;
use crate::domain::rates::RateSeries;

/// Sink for a finished exchange-rate series.
pub trait RateChartRenderer {
    fn render(&mut self, series: &RateSeries);
}

/// Sink for a finished candlestick/volume series.
pub trait CandleChartRenderer {
    fn render(&mut self, series: &CandleSeries);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rates::wire::RateHistoryResponse;

    #[derive(Default)]
    struct Recording {
        rendered: Vec<usize>,
    }

    impl RateChartRenderer for Recording {
        fn render(&mut self, series: &RateSeries) {
            self.rendered.push(series.len());
        }
    }

    #[test]
    fn test_renderer_receives_finished_series() {
        let resp: RateHistoryResponse =
            serde_json::from_str(r#"{"rates": {"2020-01-01": {"CNY": 4.66}}}"#).unwrap();
        let series = RateSeries::from_response("NZD".into(), "CNY".into(), resp).unwrap();

        let mut renderer = Recording::default();
        renderer.render(&series);
        assert_eq!(renderer.rendered, vec![1]);
    }
}
