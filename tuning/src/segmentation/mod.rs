mod accumulator;
mod cycle;
mod fixed_window;
mod segmenter;

pub use accumulator::ErrorAccumulator;
pub use cycle::CycleSegmenter;
pub use fixed_window::FixedWindowSegmenter;
pub use segmenter::Segmenter;
