//! Candle chart state container — app-owned, SDK-provided update logic.

use super::CandleSeries;
use crate::shared::RefreshGate;

/// Holds the candle series currently on screen, guarded by a refresh
/// generation so a superseded fetch can never overwrite a newer one.
#[derive(Debug, Clone, Default)]
pub struct CandleChartState {
    gate: RefreshGate,
    series: Option<CandleSeries>,
}

impl CandleChartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh; supersedes every refresh still in flight.
    pub fn begin_refresh(&mut self) -> u64 {
        self.gate.begin()
    }

    /// Install a freshly built series if `generation` is still current.
    pub fn commit(&mut self, generation: u64, series: CandleSeries) -> bool {
        if self.gate.try_commit(generation) {
            self.series = Some(series);
            true
        } else {
            false
        }
    }

    /// The series currently installed, if any.
    pub fn series(&self) -> Option<&CandleSeries> {
        self.series.as_ref()
    }

    pub fn clear(&mut self) {
        self.series = None;
    }
}
