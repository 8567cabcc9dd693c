mod autotune;

use std::{env, fs, path::Path};

use controller::Throttle;
use serde::{Deserialize, Serialize};

pub use autotune::{SegmenterConfig, TunerConfig, TuningConfig};

use crate::{NodeErr, Result, SessionBuilder};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 4567;
const DEFAULT_GAINS: [f64; 3] = [0.08, 0.000166, 2.501];

/// Everything a node needs to serve simulators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub session: SessionConfig,
}

/// How every connection's control loop is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Initial controller gains, `[kp, ki, kd]`.
    #[serde(default = "default_gains")]
    pub gains: Vec<f64>,
    #[serde(default)]
    pub throttle: Throttle,
    /// Online tuning of `gains`, disabled when absent.
    #[serde(default)]
    pub tuning: Option<TuningConfig>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_gains() -> Vec<f64> {
    DEFAULT_GAINS.to_vec()
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            session: SessionConfig::default(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            gains: default_gains(),
            throttle: Throttle::default(),
            tuning: None,
        }
    }
}

impl NodeConfig {
    /// Loads a `NodeConfig` from a JSON file.
    ///
    /// # Errors
    /// `NodeErr::InvalidConfig` if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            NodeErr::InvalidConfig(format!("cannot read '{}': {e}", path.display()))
        })?;

        Self::from_json(&content)
    }

    /// Parses a `NodeConfig` from a JSON document.
    ///
    /// # Errors
    /// `NodeErr::InvalidConfig` if the document is not a valid configuration.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| NodeErr::InvalidConfig(format!("invalid JSON: {e}")))
    }

    /// Builds the configuration from the environment.
    ///
    /// `CONFIG` points to a JSON file, the defaults are used without it. `HOST` and `PORT`
    /// override the listening address.
    ///
    /// # Errors
    /// `NodeErr::InvalidConfig` if the file can't be loaded or `PORT` is not a port number.
    pub fn from_env() -> Result<Self> {
        let mut config = match env::var("CONFIG") {
            Ok(path) => Self::load(path)?,
            Err(_) => Self::default(),
        };

        if let Ok(host) = env::var("HOST") {
            config.host = host;
        }

        if let Ok(port) = env::var("PORT") {
            config.port = port
                .parse()
                .map_err(|e| NodeErr::InvalidConfig(format!("invalid PORT '{port}': {e}")))?;
        }

        Ok(config)
    }

    /// Checks the configuration by resolving a throwaway session from it.
    ///
    /// # Errors
    /// The error the session build would fail with.
    pub fn validate(&self) -> Result<()> {
        SessionBuilder::new().build(&self.session).map(|_| ())
    }

    /// The address to listen at, `host:port`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
