use crate::Result;

/// Splits a stream of error samples into segments and reports their mean absolute error.
///
/// Every tick is expected to call `is_completed` and then `update` with the same sample. When a
/// completion is observed the caller reads `average_error` and then calls `clean_state`.
pub trait Segmenter {
    /// Tests whether `sample` closes the currently open segment.
    ///
    /// # Arguments
    /// * `sample` - The error value for this tick.
    ///
    /// # Returns
    /// Whether the open segment is complete.
    fn is_completed(&mut self, sample: f64) -> bool;

    /// Accumulates `error` into the open segment.
    ///
    /// # Arguments
    /// * `error` - The error value for this tick.
    fn update(&mut self, error: f64);

    /// The mean absolute error of the open segment.
    ///
    /// # Returns
    /// `TuningErr::EmptySegment` if nothing was accumulated yet.
    fn average_error(&self) -> Result<f64>;

    /// Starts a fresh segment.
    fn clean_state(&mut self);
}
