mod builder;
mod session;

pub use builder::SessionBuilder;
pub use session::{Session, TuningLoop};
