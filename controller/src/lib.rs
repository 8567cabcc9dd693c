mod controller;
pub mod error;
mod pid;
mod throttle;

pub use controller::Controller;
pub use error::{ControllerErr, Result};
pub use pid::PidController;
pub use throttle::Throttle;
