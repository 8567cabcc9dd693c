mod coordinate_ascent;
mod observer;
mod tuner;

pub use coordinate_ascent::{CoordinateAscent, CoordinateAscentConfig, Direction};
pub use observer::{LogObserver, StepOutcome, TuningObserver, TuningStep};
pub use tuner::Tuner;
