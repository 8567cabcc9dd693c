use std::{error::Error, fmt};

/// The tuning module's result type.
pub type Result<T> = std::result::Result<T, TuningErr>;

/// Failures raised at the boundaries of the segmenters and tuners.
///
/// State transitions themselves never fail, only construction and reading an
/// empty segment do.
#[derive(Debug, Clone, PartialEq)]
pub enum TuningErr {
    /// The average of a segment was requested before any sample was accumulated.
    EmptySegment,
    /// A tuner was built over an empty gain vector.
    EmptyGains,
    /// The step sizes don't line up with the gains.
    DeltaCountMismatch { got: usize, expected: usize },
    /// A step size is zero, negative or not finite.
    InvalidDelta { index: usize, value: f64 },
    /// A growth or shrink factor is out of its range.
    InvalidFactor { what: &'static str, value: f64 },
}

impl fmt::Display for TuningErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningErr::EmptySegment => f.write_str("segment has no accumulated samples"),
            TuningErr::EmptyGains => f.write_str("gain vector must not be empty"),
            TuningErr::DeltaCountMismatch { got, expected } => {
                write!(f, "delta count mismatch: got {got}, expected {expected}")
            }
            TuningErr::InvalidDelta { index, value } => {
                write!(f, "delta {index} must be positive and finite, got {value}")
            }
            TuningErr::InvalidFactor { what, value } => {
                write!(f, "invalid {what} factor: {value}")
            }
        }
    }
}

impl Error for TuningErr {}
