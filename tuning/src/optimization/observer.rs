use log::debug;

/// What a single tuner transition did to the active dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The score improved, the step size grew and the next dimension was increased.
    Improved,
    /// The increase didn't help, the gain was moved one step below its baseline.
    Reversed,
    /// Neither direction helped, the baseline was restored, the step size shrank and the next
    /// dimension was increased.
    Shrunk,
}

impl StepOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepOutcome::Improved => "improved",
            StepOutcome::Reversed => "reversed",
            StepOutcome::Shrunk => "shrunk",
        }
    }
}

/// A snapshot of the tuner right after a transition.
#[derive(Debug, Clone, Copy)]
pub struct TuningStep<'a> {
    pub observed_error: f64,
    pub outcome: StepOutcome,
    /// The dimension that will be evaluated by the next call.
    pub active_index: usize,
    pub best_error: f64,
    pub gains: &'a [f64],
    pub deltas: &'a [f64],
}

/// Gets notified after every tuner transition, it can't alter the tuner's state.
pub trait TuningObserver {
    fn on_step(&mut self, step: &TuningStep<'_>);
}

impl<F> TuningObserver for F
where
    F: FnMut(&TuningStep<'_>),
{
    fn on_step(&mut self, step: &TuningStep<'_>) {
        self(step)
    }
}

/// Reports every transition through the `log` facade at debug level.
#[derive(Debug, Default)]
pub struct LogObserver {
    steps: u64,
}

impl LogObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TuningObserver for LogObserver {
    fn on_step(&mut self, step: &TuningStep<'_>) {
        self.steps += 1;

        debug!(
            step = self.steps,
            outcome = step.outcome.as_str(),
            observed_error = step.observed_error,
            best_error = step.best_error,
            active_index = step.active_index;
            "tuner step: gains={:?} deltas={:?}",
            step.gains,
            step.deltas
        );
    }
}
