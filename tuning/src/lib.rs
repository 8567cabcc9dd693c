pub mod error;
pub mod optimization;
pub mod segmentation;

pub use error::{Result, TuningErr};
