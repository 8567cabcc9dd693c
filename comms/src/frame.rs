//! Implements the simulator's text protocol, a SocketIO style event frame.
//!
//! Message events are prefixed with `42` (`4` websocket message, `2` event) and followed by a
//! JSON array `[name, data]`.

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::msg::{Inbound, Outbound, Telemetry};

const EVENT_PREFIX: &str = "42";

#[derive(Serialize)]
struct Empty {}

fn invalid_data<T>(detail: &str) -> io::Result<T> {
    Err(io::Error::new(io::ErrorKind::InvalidData, detail.to_string()))
}

/// Extracts the JSON body of an event frame, `None` if the frame carries no data.
fn body(frame: &str) -> Option<&str> {
    if frame.contains("null") {
        return None;
    }

    let start = frame.find('[')?;
    let end = frame.rfind(']')?;
    (start < end).then(|| &frame[start..=end])
}

/// Decodes a single text frame.
///
/// # Arguments
/// * `frame` - The frame as received, without its line terminator.
///
/// # Returns
/// The decoded message, or an `InvalidData` error if the frame's JSON is malformed or a
/// telemetry event lacks its data.
pub fn decode(frame: &str) -> io::Result<Inbound> {
    let Some(rest) = frame.strip_prefix(EVENT_PREFIX) else {
        return Ok(Inbound::Unrecognized);
    };

    let Some(body) = body(rest) else {
        return Ok(Inbound::Manual);
    };

    let value: Value = serde_json::from_str(body)?;

    let Some(name) = value.get(0).and_then(Value::as_str) else {
        return invalid_data("event frame without a name");
    };

    match name {
        "telemetry" => {
            let Some(data) = value.get(1) else {
                return invalid_data("telemetry event without data");
            };

            let telemetry = Telemetry::deserialize(data)?;
            Ok(Inbound::Telemetry(telemetry))
        }
        other => Ok(Inbound::Event(other.to_string())),
    }
}

/// Encodes a single text frame, without its line terminator.
///
/// # Arguments
/// * `msg` - The message to encode.
///
/// # Returns
/// The frame, or an error if serialization fails.
pub fn encode(msg: &Outbound) -> io::Result<String> {
    let body = match msg {
        Outbound::Steer(steer) => serde_json::to_string(&("steer", steer))?,
        Outbound::Manual => serde_json::to_string(&("manual", Empty {}))?,
    };

    Ok(format!("{EVENT_PREFIX}{body}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::Steer;

    #[test]
    fn decodes_telemetry_with_string_numbers() {
        let frame = r#"42["telemetry",{"cte":"0.7598","speed":"0.4380","steering_angle":"0.0000","throttle":"0.0000","image":"..."}]"#;

        let Inbound::Telemetry(telemetry) = decode(frame).unwrap() else {
            panic!("expected telemetry");
        };

        assert_eq!(telemetry.cte, 0.7598);
        assert_eq!(telemetry.speed, 0.4380);
        assert_eq!(telemetry.steering_angle, 0.);
    }

    #[test]
    fn decodes_telemetry_with_plain_numbers() {
        let msg = decode(r#"42["telemetry",{"cte":-1.25}]"#).unwrap();

        assert_eq!(
            msg,
            Inbound::Telemetry(Telemetry {
                cte: -1.25,
                speed: 0.,
                steering_angle: 0.,
            })
        );
    }

    #[test]
    fn frames_without_data_are_manual() {
        assert_eq!(decode("42").unwrap(), Inbound::Manual);
        assert_eq!(decode(r#"42["telemetry",null]"#).unwrap(), Inbound::Manual);
    }

    #[test]
    fn other_frames_are_unrecognized() {
        assert_eq!(decode("2").unwrap(), Inbound::Unrecognized);
        assert_eq!(decode("").unwrap(), Inbound::Unrecognized);
        assert_eq!(decode(r#"0{"sid":"abc"}"#).unwrap(), Inbound::Unrecognized);
    }

    #[test]
    fn other_events_are_passed_through() {
        let msg = decode(r#"42["manual",{}]"#).unwrap();
        assert_eq!(msg, Inbound::Event("manual".to_string()));
    }

    #[test]
    fn malformed_frames_are_invalid_data() {
        for frame in [
            r#"42["telemetry",{"cte":]"#,
            r#"42["telemetry"]"#,
            r#"42["telemetry",{"cte":"abc"}]"#,
            r#"42["telemetry",{"speed":"1"}]"#,
            r#"42[1,{}]"#,
        ] {
            let err = decode(frame).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidData, "{frame}");
        }
    }

    #[test]
    fn encodes_manual() {
        assert_eq!(encode(&Outbound::Manual).unwrap(), r#"42["manual",{}]"#);
    }

    #[test]
    fn encodes_steer() {
        let steer = Steer {
            steering_angle: -0.5,
            throttle: 0.3,
        };

        assert_eq!(
            encode(&Outbound::Steer(steer)).unwrap(),
            r#"42["steer",{"steering_angle":-0.5,"throttle":0.3}]"#
        );
    }
}
