use std::{error::Error, fmt, io};

use controller::ControllerErr;
use tokio_util::codec::LinesCodecError;
use tuning::TuningErr;

/// The node's result type.
pub type Result<T> = std::result::Result<T, NodeErr>;

/// All errors that can occur while serving a simulator.
#[derive(Debug)]
pub enum NodeErr {
    Io(io::Error),
    /// Invalid configuration, caught before accepting connections.
    InvalidConfig(String),
    Tuning(TuningErr),
    Controller(ControllerErr),
}

impl fmt::Display for NodeErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeErr::Io(e) => write!(f, "io error: {e}"),
            NodeErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            NodeErr::Tuning(e) => write!(f, "tuning error: {e}"),
            NodeErr::Controller(e) => write!(f, "controller error: {e}"),
        }
    }
}

impl Error for NodeErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NodeErr::Io(e) => Some(e),
            NodeErr::Tuning(e) => Some(e),
            NodeErr::Controller(e) => Some(e),
            NodeErr::InvalidConfig(_) => None,
        }
    }
}

impl From<io::Error> for NodeErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<TuningErr> for NodeErr {
    fn from(value: TuningErr) -> Self {
        Self::Tuning(value)
    }
}

impl From<ControllerErr> for NodeErr {
    fn from(value: ControllerErr) -> Self {
        Self::Controller(value)
    }
}

impl From<LinesCodecError> for NodeErr {
    fn from(value: LinesCodecError) -> Self {
        match value {
            LinesCodecError::Io(e) => Self::Io(e),
            other => Self::Io(io::Error::new(io::ErrorKind::InvalidData, other)),
        }
    }
}
