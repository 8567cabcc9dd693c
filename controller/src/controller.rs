use crate::Result;

/// A feedback controller whose coefficients can be replaced while it runs.
pub trait Controller {
    /// (Re)configures the controller's coefficients and clears its integral and derivative history.
    ///
    /// # Arguments
    /// * `gains` - The new coefficients.
    ///
    /// # Returns
    /// An error if the controller can't be configured with that many gains.
    fn init(&mut self, gains: &[f64]) -> Result<()>;

    /// Consumes one error sample and produces the next control command.
    ///
    /// # Arguments
    /// * `sample` - The error for this tick.
    ///
    /// # Returns
    /// The control output.
    fn update_error(&mut self, sample: f64) -> f64;
}
