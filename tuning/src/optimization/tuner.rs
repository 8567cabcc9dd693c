/// Defines the strategy for updating a gain vector based on a scalar feedback score.
pub trait Tuner {
    /// Treats `observed_error` as the score of the gains last returned and produces the next ones.
    ///
    /// # Arguments
    /// * `observed_error` - The score of the current gains, lower is better.
    ///
    /// # Returns
    /// The gains to evaluate next.
    fn next_params(&mut self, observed_error: f64) -> Vec<f64>;

    /// Whether the search is exhausted and `next_params` became the identity.
    fn is_converged(&self) -> bool;
}
