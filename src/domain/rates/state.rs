//! Rate chart state container — app-owned, SDK-provided update logic.

use super::RateSeries;
use crate::shared::RefreshGate;

/// Holds the rate series currently on screen, guarded by a refresh
/// generation so a superseded fetch can never overwrite a newer one.
///
/// The app (or [`crate::client::ChartFeedClient`]) owns instances of this
/// type. The SDK provides the update methods.
#[derive(Debug, Clone, Default)]
pub struct RateChartState {
    gate: RefreshGate,
    series: Option<RateSeries>,
}

impl RateChartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh; supersedes every refresh still in flight.
    pub fn begin_refresh(&mut self) -> u64 {
        self.gate.begin()
    }

    /// Install a freshly built series if `generation` is still current.
    ///
    /// Returns `false` (and drops the series) when a newer refresh has been
    /// begun since this one started.
    pub fn commit(&mut self, generation: u64, series: RateSeries) -> bool {
        if self.gate.try_commit(generation) {
            self.series = Some(series);
            true
        } else {
            false
        }
    }

    /// The series currently installed, if any.
    pub fn series(&self) -> Option<&RateSeries> {
        self.series.as_ref()
    }

    pub fn clear(&mut self) {
        self.series = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rates::wire::RateHistoryResponse;

    fn series(rate: f64) -> RateSeries {
        let json = format!(r#"{{"rates": {{"2020-01-01": {{"CNY": {}}}}}}}"#, rate);
        let resp: RateHistoryResponse = serde_json::from_str(&json).unwrap();
        RateSeries::from_response("NZD".into(), "CNY".into(), resp).unwrap()
    }

    #[test]
    fn test_commit_installs_series() {
        let mut state = RateChartState::new();
        let generation = state.begin_refresh();
        assert!(state.commit(generation, series(4.6)));
        assert_eq!(state.series().unwrap().len(), 1);
    }

    #[test]
    fn test_stale_fetch_cannot_overwrite_newer_result() {
        let mut state = RateChartState::new();
        let stale = state.begin_refresh();
        let fresh = state.begin_refresh();
        assert!(state.commit(fresh, series(4.7)));
        // The older fetch resolves late; its result is dropped.
        assert!(!state.commit(stale, series(4.6)));
        let held = state.series().unwrap();
        assert_eq!(held.max_rate(), Some("4.7".parse().unwrap()));
    }

    #[test]
    fn test_clear_drops_series_but_keeps_generations() {
        let mut state = RateChartState::new();
        let generation = state.begin_refresh();
        state.commit(generation, series(4.6));
        state.clear();
        assert!(state.series().is_none());
        assert!(state.begin_refresh() > generation);
    }
}
