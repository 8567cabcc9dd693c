use crate::{Result, TuningErr};

/// Running mean absolute error over a window of samples.
///
/// `samples` is read both by the mean and by the segmenters' warm-up guard, so it must stay a
/// single counter.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ErrorAccumulator {
    samples: usize,
    abs_error_sum: f64,
}

impl ErrorAccumulator {
    /// Creates an empty `ErrorAccumulator`.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, error: f64) {
        self.samples += 1;
        self.abs_error_sum += error.abs();
    }

    /// The amount of samples accumulated since the last clear.
    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// The sum of the absolute values accumulated since the last clear.
    #[inline]
    pub fn abs_error_sum(&self) -> f64 {
        self.abs_error_sum
    }

    /// Computes `abs_error_sum / samples`, with no smoothing.
    ///
    /// # Returns
    /// `TuningErr::EmptySegment` if there are no samples, instead of a non-finite value.
    pub fn mean(&self) -> Result<f64> {
        if self.samples == 0 {
            return Err(TuningErr::EmptySegment);
        }

        Ok(self.abs_error_sum / self.samples as f64)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.samples = 0;
        self.abs_error_sum = 0.;
    }
}
