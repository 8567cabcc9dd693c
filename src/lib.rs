pub mod config;
pub mod error;
pub mod server;
pub mod session;

pub use config::NodeConfig;
pub use error::{NodeErr, Result};
pub use session::{Session, SessionBuilder};
