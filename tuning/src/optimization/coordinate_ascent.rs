use super::{StepOutcome, Tuner, TuningObserver, TuningStep};
use crate::{Result, TuningErr};

/// The direction of the last perturbation applied to the active dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increasing,
    Decreasing,
}

/// Hyperparameters of the `CoordinateAscent` tuner.
///
/// None of them has a default, the right sentinel and step sizes depend on the gains being tuned.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateAscentConfig {
    /// One strictly positive step size per gain.
    pub initial_deltas: Vec<f64>,
    /// The score a perturbation must beat to count as the first improvement.
    pub initial_best_error: f64,
    /// Multiplies the step size of a dimension whose perturbation improved the score, `> 1`.
    pub growth: f64,
    /// Multiplies the step size of a dimension whose perturbations both failed, in `(0, 1)`.
    pub shrink: f64,
    /// The search stops once the step sizes add up to this or less. Non-positive values disable it.
    pub tolerance: f64,
}

/// Derivative free coordinate ascent ("twiddle") over a gain vector.
///
/// Each call to `next_params` scores the last perturbation and performs exactly one transition:
/// dimensions are perturbed one at a time, first upwards and then downwards, visited round-robin.
/// Step sizes grow on success and shrink when both directions fail, but never change sign.
pub struct CoordinateAscent {
    gains: Vec<f64>,
    deltas: Vec<f64>,
    best_error: f64,
    active: usize,
    direction: Direction,
    growth: f64,
    shrink: f64,
    tolerance: f64,
    observer: Option<Box<dyn TuningObserver + Send>>,
}

impl CoordinateAscent {
    /// Creates a new `CoordinateAscent` tuner, the first dimension is the first to be perturbed.
    ///
    /// # Arguments
    /// * `gains` - The initial gain vector.
    /// * `config` - The tuner's hyperparameters.
    ///
    /// # Returns
    /// An error if `gains` is empty, if the deltas don't match the gains one to one or aren't
    /// strictly positive, or if `growth` or `shrink` are out of range.
    pub fn new(gains: Vec<f64>, config: CoordinateAscentConfig) -> Result<Self> {
        let CoordinateAscentConfig {
            initial_deltas: deltas,
            initial_best_error: best_error,
            growth,
            shrink,
            tolerance,
        } = config;

        if gains.is_empty() {
            return Err(TuningErr::EmptyGains);
        }

        if deltas.len() != gains.len() {
            return Err(TuningErr::DeltaCountMismatch {
                got: deltas.len(),
                expected: gains.len(),
            });
        }

        if let Some((index, &value)) = deltas
            .iter()
            .enumerate()
            .find(|(_, d)| !(d.is_finite() && **d > 0.))
        {
            return Err(TuningErr::InvalidDelta { index, value });
        }

        if !(growth.is_finite() && growth > 1.) {
            return Err(TuningErr::InvalidFactor {
                what: "growth",
                value: growth,
            });
        }

        if !(shrink > 0. && shrink < 1.) {
            return Err(TuningErr::InvalidFactor {
                what: "shrink",
                value: shrink,
            });
        }

        Ok(Self {
            gains,
            deltas,
            best_error,
            active: 0,
            direction: Direction::Increasing,
            growth,
            shrink,
            tolerance,
            observer: None,
        })
    }

    /// Installs an observer notified after every transition.
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: TuningObserver + Send + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn gains(&self) -> &[f64] {
        &self.gains
    }

    pub fn deltas(&self) -> &[f64] {
        &self.deltas
    }

    /// The lowest score observed so far, or the initial sentinel.
    pub fn best_error(&self) -> f64 {
        self.best_error
    }

    /// The dimension whose perturbation the next call will score.
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The current search resolution, compared against the tolerance.
    fn resolution(&self) -> f64 {
        self.deltas.iter().sum()
    }

    /// Moves on to the next dimension and applies an increase of its own step size.
    fn advance(&mut self) {
        self.active = (self.active + 1) % self.gains.len();
        self.gains[self.active] += self.deltas[self.active];
        self.direction = Direction::Increasing;
    }

    fn transition(&mut self, observed_error: f64) -> StepOutcome {
        let i = self.active;

        if observed_error < self.best_error {
            self.best_error = observed_error;
            self.deltas[i] *= self.growth;
            self.advance();
            return StepOutcome::Improved;
        }

        match self.direction {
            Direction::Increasing => {
                self.gains[i] -= 2. * self.deltas[i];
                self.direction = Direction::Decreasing;
                StepOutcome::Reversed
            }
            Direction::Decreasing => {
                self.gains[i] += self.deltas[i];
                self.deltas[i] *= self.shrink;
                self.advance();
                StepOutcome::Shrunk
            }
        }
    }
}

impl Tuner for CoordinateAscent {
    fn next_params(&mut self, observed_error: f64) -> Vec<f64> {
        if self.is_converged() {
            return self.gains.clone();
        }

        let outcome = self.transition(observed_error);

        if let Some(observer) = self.observer.as_mut() {
            observer.on_step(&TuningStep {
                observed_error,
                outcome,
                active_index: self.active,
                best_error: self.best_error,
                gains: &self.gains,
                deltas: &self.deltas,
            });
        }

        self.gains.clone()
    }

    fn is_converged(&self) -> bool {
        self.resolution() <= self.tolerance
    }
}
