use controller::PidController;
use tuning::{
    optimization::{CoordinateAscent, LogObserver, Tuner},
    segmentation::{CycleSegmenter, FixedWindowSegmenter, Segmenter},
};

use crate::{
    Result,
    config::{SegmenterConfig, SessionConfig, TuningConfig},
    session::{Session, TuningLoop},
};

/// Builds new `Session`s given a configuration.
pub struct SessionBuilder {
    built_count: usize,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBuilder {
    /// Creates a new `SessionBuilder`.
    pub fn new() -> Self {
        Self { built_count: 0 }
    }

    /// Builds a `Session` following a configuration.
    ///
    /// # Args
    /// * `config` - The configuration of the session.
    ///
    /// # Returns
    /// A new session or an error if the controller or the tuner reject the configuration.
    pub fn build(&mut self, config: &SessionConfig) -> Result<Session> {
        let controller = PidController::from_gains(&config.gains)?;

        let mut session = Session::new(
            self.generate_id(),
            Box::new(controller),
            config.gains.clone(),
            config.throttle,
        );

        if let Some(tuning) = &config.tuning {
            session = session.with_tuning(self.resolve_tuning(&config.gains, tuning)?);
        }

        Ok(session)
    }

    /// Generates a new incremental id for the session being created.
    fn generate_id(&mut self) -> usize {
        self.built_count += 1;
        self.built_count - 1
    }

    /// Resolves the segmenter and the tuner of a session, the tuner starts at `gains`.
    fn resolve_tuning(&self, gains: &[f64], config: &TuningConfig) -> Result<TuningLoop> {
        let segmenter: Box<dyn Segmenter + Send> = match config.segmenter {
            SegmenterConfig::HalfCycle => Box::new(CycleSegmenter::new()),
            SegmenterConfig::FixedWindow { samples } => Box::new(FixedWindowSegmenter::new(samples)),
        };

        let tuner: Box<dyn Tuner + Send> = Box::new(
            CoordinateAscent::new(gains.to_vec(), config.tuner.clone().into())?
                .with_observer(LogObserver::new()),
        );

        Ok(TuningLoop::new(segmenter, tuner))
    }
}
