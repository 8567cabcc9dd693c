use std::num::NonZeroUsize;

use super::{ErrorAccumulator, Segmenter};
use crate::Result;

/// Splits the signal into segments of a fixed amount of samples, regardless of its sign.
#[derive(Debug, Clone)]
pub struct FixedWindowSegmenter {
    window: NonZeroUsize,
    acc: ErrorAccumulator,
}

impl FixedWindowSegmenter {
    /// Creates a new `FixedWindowSegmenter`.
    ///
    /// # Arguments
    /// * `window` - The amount of samples every segment averages over.
    pub fn new(window: NonZeroUsize) -> Self {
        Self {
            window,
            acc: ErrorAccumulator::new(),
        }
    }

    pub fn window(&self) -> usize {
        self.window.get()
    }
}

impl Segmenter for FixedWindowSegmenter {
    /// Completes when the sample about to be accumulated fills the window.
    fn is_completed(&mut self, _sample: f64) -> bool {
        self.acc.samples() + 1 >= self.window.get()
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
