use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use tuning::optimization::CoordinateAscentConfig;

/// Online tuning of the controller gains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuningConfig {
    pub segmenter: SegmenterConfig,
    pub tuner: TunerConfig,
}

/// How the error signal is split into scored segments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmenterConfig {
    /// A segment per half cycle of the cross-track error.
    HalfCycle,
    /// A segment every `samples` ticks.
    FixedWindow { samples: NonZeroUsize },
}

/// The coordinate ascent hyperparameters, every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TunerConfig {
    pub initial_deltas: Vec<f64>,
    pub initial_best_error: f64,
    pub growth: f64,
    pub shrink: f64,
    pub tolerance: f64,
}

impl From<TunerConfig> for CoordinateAscentConfig {
    fn from(value: TunerConfig) -> Self {
        Self {
            initial_deltas: value.initial_deltas,
            initial_best_error: value.initial_best_error,
            growth: value.growth,
            shrink: value.shrink,
            tolerance: value.tolerance,
        }
    }
}
