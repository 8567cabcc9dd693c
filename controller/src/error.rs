use std::{error::Error, fmt};

/// The controller module's result type.
pub type Result<T> = std::result::Result<T, ControllerErr>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerErr {
    /// The controller was handed the wrong amount of coefficients.
    GainCount { got: usize, expected: usize },
}

impl fmt::Display for ControllerErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerErr::GainCount { got, expected } => {
                write!(f, "gain count mismatch: got {got}, expected {expected}")
            }
        }
    }
}

impl Error for ControllerErr {}
