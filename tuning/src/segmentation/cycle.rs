use super::{ErrorAccumulator, Segmenter};
use crate::Result;

/// Partitions a signal into half cycles, the runs of samples between two zero crossings.
///
/// The last seen value survives `clean_state`, crossings are always detected relative to the
/// signal's history and not to the accumulation window.
#[derive(Debug, Default, Clone)]
pub struct CycleSegmenter {
    last_value: f64,
    acc: ErrorAccumulator,
}

impl CycleSegmenter {
    /// Creates a new `CycleSegmenter` whose previous value is `0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tests for a zero crossing between the stored value and `new_value`.
    ///
    /// The stored value is replaced by `new_value` whatever the outcome. A crossing only completes
    /// a half cycle if at least one sample was accumulated since the last clean, so the first call
    /// after construction or after `clean_state` never reports completion.
    ///
    /// # Arguments
    /// * `new_value` - The signal value for this tick.
    ///
    /// # Returns
    /// Whether a half cycle was completed.
    pub fn is_half_cycle_completed(&mut self, new_value: f64) -> bool {
        let crossed = self.is_crossing_zero(new_value);
        self.last_value = new_value;
        crossed && self.acc.samples() != 0
    }

    fn is_crossing_zero(&self, new_value: f64) -> bool {
        let v = self.last_value;
        (v < 0. && new_value >= 0.) || (v > 0. && new_value <= 0.) || (v == 0. && new_value != 0.)
    }

    /// The last value handed to `is_half_cycle_completed`.
    pub fn last_value(&self) -> f64 {
        self.last_value
    }

    /// The amount of samples in the open half cycle.
    pub fn samples(&self) -> usize {
        self.acc.samples()
    }

    /// The sum of absolute errors in the open half cycle.
    pub fn abs_error_sum(&self) -> f64 {
        self.acc.abs_error_sum()
    }
}

impl Segmenter for CycleSegmenter {
    fn is_completed(&mut self, sample: f64) -> bool {
        self.is_half_cycle_completed(sample)
    }

    fn update(&mut self, error: f64) {
        self.acc.push(error);
    }

    fn average_error(&self) -> Result<f64> {
        self.acc.mean()
    }

    fn clean_state(&mut self) {
        self.acc.clear();
    }
}
