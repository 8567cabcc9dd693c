use serde::{Deserialize, Deserializer, Serialize, de};

/// A telemetry event as reported by the simulator.
///
/// The simulator sends every number as a JSON string, plain JSON numbers are accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Telemetry {
    #[serde(deserialize_with = "number")]
    pub cte: f64,
    #[serde(default, deserialize_with = "number")]
    pub speed: f64,
    #[serde(default, deserialize_with = "number")]
    pub steering_angle: f64,
}

/// The actuator command sent back for every telemetry event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Steer {
    pub steering_angle: f64,
    pub throttle: f64,
}

/// A decoded inbound frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    Telemetry(Telemetry),
    /// The frame carried no data, the simulator is in manual mode.
    Manual,
    /// A well formed event this system doesn't act on.
    Event(String),
    /// Not a message event frame.
    Unrecognized,
}

/// A frame to be sent to the simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outbound {
    Steer(Steer),
    Manual,
}

fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Float(f64),
        Text(String),
    }

    match Number::deserialize(deserializer)? {
        Number::Float(x) => Ok(x),
        Number::Text(s) => s.trim().parse().map_err(de::Error::custom),
    }
}
