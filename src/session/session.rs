use comms::msg::{Inbound, Outbound, Steer};
use controller::{Controller, Throttle};
use log::{debug, info};
use tuning::{optimization::Tuner, segmentation::Segmenter};

use crate::Result;

/// Scores the controller once per segment of the error signal and proposes new gains.
pub struct TuningLoop {
    segmenter: Box<dyn Segmenter + Send>,
    tuner: Box<dyn Tuner + Send>,
    segments: u64,
    converged: bool,
}

impl TuningLoop {
    /// Creates a new `TuningLoop`.
    ///
    /// # Args
    /// * `segmenter` - Splits the error signal into scored segments.
    /// * `tuner` - Turns every segment's score into the next gains.
    pub fn new(segmenter: Box<dyn Segmenter + Send>, tuner: Box<dyn Tuner + Send>) -> Self {
        Self {
            segmenter,
            tuner,
            segments: 0,
            converged: false,
        }
    }

    /// The amount of segments scored so far.
    pub fn segments(&self) -> u64 {
        self.segments
    }

    /// Feeds one tick of the error signal.
    ///
    /// # Returns
    /// The gains to apply if `cte` closed a segment.
    fn observe(&mut self, cte: f64) -> Result<Option<Vec<f64>>> {
        let completed = self.segmenter.is_completed(cte);
        self.segmenter.update(cte);

        if !completed {
            return Ok(None);
        }

        let average_error = self.segmenter.average_error()?;
        let gains = self.tuner.next_params(average_error);
        self.segmenter.clean_state();
        self.segments += 1;

        debug!(segment = self.segments, average_error = average_error; "segment scored");

        if !self.converged && self.tuner.is_converged() {
            self.converged = true;
            info!(segments = self.segments; "tuning converged, best gains {gains:?}");
        }

        Ok(Some(gains))
    }
}

/// The control loop of a single simulator connection.
///
/// Every telemetry tick steers with the current gains, and when tuning is enabled, every completed
/// segment re-initializes the controller with the tuner's next gains.
pub struct Session {
    id: usize,
    controller: Box<dyn Controller + Send>,
    gains: Vec<f64>,
    throttle: Throttle,
    tuning: Option<TuningLoop>,
}

impl Session {
    /// Creates a new `Session` without tuning.
    ///
    /// # Args
    /// * `id` - Identifier used for observability.
    /// * `controller` - The controller, already initialized with `gains`.
    /// * `gains` - The gains `controller` runs with.
    /// * `throttle` - The throttle policy.
    pub fn new(
        id: usize,
        controller: Box<dyn Controller + Send>,
        gains: Vec<f64>,
        throttle: Throttle,
    ) -> Self {
        Self {
            id,
            controller,
            gains,
            throttle,
            tuning: None,
        }
    }

    /// Enables online tuning of the controller's gains.
    pub fn with_tuning(mut self, tuning: TuningLoop) -> Self {
        self.tuning = Some(tuning);
        self
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// The gains the controller currently runs with.
    pub fn gains(&self) -> &[f64] {
        &self.gains
    }

    pub fn tuning(&self) -> Option<&TuningLoop> {
        self.tuning.as_ref()
    }

    /// Runs a single tick of the control loop.
    ///
    /// # Args
    /// * `cte` - The cross-track error reported for this tick.
    ///
    /// # Returns
    /// The steering command, or an error if the controller rejects the tuned gains.
    pub fn on_telemetry(&mut self, cte: f64) -> Result<Steer> {
        let steering_angle = self.controller.update_error(-cte);

        if let Some(tuning) = self.tuning.as_mut() {
            if let Some(gains) = tuning.observe(cte)? {
                self.controller.init(&gains)?;
                self.gains = gains;
            }
        }

        Ok(Steer {
            steering_angle,
            throttle: self.throttle.value(cte),
        })
    }

    /// Handles a decoded inbound frame.
    ///
    /// # Returns
    /// The reply to send back, if any.
    pub fn handle(&mut self, msg: Inbound) -> Result<Option<Outbound>> {
        match msg {
            Inbound::Telemetry(telemetry) => {
                let steer = self.on_telemetry(telemetry.cte)?;
                Ok(Some(Outbound::Steer(steer)))
            }
            Inbound::Manual => Ok(Some(Outbound::Manual)),
            Inbound::Event(name) => {
                debug!(session = self.id; "ignoring event {name}");
                Ok(None)
            }
            Inbound::Unrecognized => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        num::NonZeroUsize,
        sync::{Arc, Mutex},
    };

    use comms::msg::Telemetry;
    use controller::PidController;
    use tuning::segmentation::CycleSegmenter;

    use super::*;
    use crate::{
        SessionBuilder,
        config::{SegmenterConfig, SessionConfig, TunerConfig, TuningConfig},
    };

    /// Records every score and always proposes the same gains.
    struct RecordingTuner {
        scores: Arc<Mutex<Vec<f64>>>,
        gains: Vec<f64>,
    }

    impl Tuner for RecordingTuner {
        fn next_params(&mut self, observed_error: f64) -> Vec<f64> {
            self.scores.lock().unwrap().push(observed_error);
            self.gains.clone()
        }

        fn is_converged(&self) -> bool {
            false
        }
    }

    fn proportional_session() -> Session {
        Session::new(
            0,
            Box::new(PidController::new(1., 0., 0.)),
            vec![1., 0., 0.],
            Throttle::Constant { value: 0.3 },
        )
    }

    #[test]
    fn steers_against_the_error() {
        let mut session = proportional_session();

        let steer = session.on_telemetry(0.5).unwrap();
        assert_eq!(steer.steering_angle, -0.5);
        assert_eq!(steer.throttle, 0.3);

        let steer = session.on_telemetry(-0.25).unwrap();
        assert_eq!(steer.steering_angle, 0.25);
    }

    #[test]
    fn half_cycle_scores_reach_the_tuner() {
        let scores = Arc::new(Mutex::new(Vec::new()));
        let tuner = RecordingTuner {
            scores: Arc::clone(&scores),
            gains: vec![2., 0., 0.],
        };

        let mut session = proportional_session().with_tuning(TuningLoop::new(
            Box::new(CycleSegmenter::new()),
            Box::new(tuner),
        ));

        session.on_telemetry(1.).unwrap();
        session.on_telemetry(2.).unwrap();
        assert!(scores.lock().unwrap().is_empty());
        assert_eq!(session.gains(), [1., 0., 0.]);

        // The crossing sample still belongs to the segment it closes.
        session.on_telemetry(-1.).unwrap();
        assert_eq!(*scores.lock().unwrap(), [4. / 3.]);
        assert_eq!(session.gains(), [2., 0., 0.]);
        assert_eq!(session.tuning().unwrap().segments(), 1);

        let steer = session.on_telemetry(-0.5).unwrap();
        assert_eq!(steer.steering_angle, 1.);
    }

    #[test]
    fn built_session_applies_tuned_gains() {
        let config = SessionConfig {
            gains: vec![1., 0., 0.],
            throttle: Throttle::Constant { value: 0.3 },
            tuning: Some(TuningConfig {
                segmenter: SegmenterConfig::FixedWindow {
                    samples: NonZeroUsize::new(2).unwrap(),
                },
                tuner: TunerConfig {
                    initial_deltas: vec![0.5, 0.5, 0.5],
                    initial_best_error: 1e9,
                    growth: 1.1,
                    shrink: 0.9,
                    tolerance: 0.0001,
                },
            }),
        };

        let mut session = SessionBuilder::new().build(&config).unwrap();

        session.on_telemetry(0.5).unwrap();
        assert_eq!(session.gains(), [1., 0., 0.]);

        session.on_telemetry(0.5).unwrap();
        assert_eq!(session.gains(), [1., 0.5, 0.]);

        // History was cleared: p = i = -1, d = -1.
        let steer = session.on_telemetry(1.).unwrap();
        assert_eq!(steer.steering_angle, -1.5);
    }

    #[test]
    fn converged_tuning_keeps_gains() {
        let config = SessionConfig {
            gains: vec![1., 0., 0.],
            throttle: Throttle::default(),
            tuning: Some(TuningConfig {
                segmenter: SegmenterConfig::FixedWindow {
                    samples: NonZeroUsize::new(1).unwrap(),
                },
                tuner: TunerConfig {
                    initial_deltas: vec![0.001, 0.001, 0.001],
                    initial_best_error: 1e9,
                    growth: 1.1,
                    shrink: 0.9,
                    tolerance: 1.,
                },
            }),
        };

        let mut session = SessionBuilder::new().build(&config).unwrap();
        for cte in [0.5, -0.5, 2., -3.] {
            session.on_telemetry(cte).unwrap();
            assert_eq!(session.gains(), [1., 0., 0.]);
        }
    }

    #[test]
    fn replies_to_frames() {
        let mut session = proportional_session();

        let reply = session
            .handle(Inbound::Telemetry(Telemetry {
                cte: 0.5,
                speed: 10.,
                steering_angle: 0.,
            }))
            .unwrap();
        assert_eq!(
            reply,
            Some(Outbound::Steer(Steer {
                steering_angle: -0.5,
                throttle: 0.3
            }))
        );

        assert_eq!(session.handle(Inbound::Manual).unwrap(), Some(Outbound::Manual));
        assert_eq!(session.handle(Inbound::Event("reset".into())).unwrap(), None);
        assert_eq!(session.handle(Inbound::Unrecognized).unwrap(), None);
    }

    #[test]
    fn builder_assigns_incremental_ids() {
        let mut builder = SessionBuilder::new();
        let config = SessionConfig::default();

        assert_eq!(builder.build(&config).unwrap().id(), 0);
        assert_eq!(builder.build(&config).unwrap().id(), 1);
    }
}
