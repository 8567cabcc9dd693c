use serde::{Deserialize, Serialize};

/// Maps the cross-track error to a throttle command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Throttle {
    /// Always the same throttle.
    Constant { value: f64 },
    /// Speeds up to `peak` while well centered, falls back to `cruise` otherwise.
    ///
    /// Below `threshold` the throttle is `peak - |cte| / threshold`.
    Piecewise { threshold: f64, peak: f64, cruise: f64 },
}

impl Default for Throttle {
    fn default() -> Self {
        Throttle::Constant { value: 0.3 }
    }
}

impl Throttle {
    pub fn value(&self, cte: f64) -> f64 {
        match *self {
            Throttle::Constant { value } => value,
            Throttle::Piecewise {
                threshold,
                peak,
                cruise,
            } => {
                let cte = cte.abs();
                if cte < threshold {
                    peak - cte / threshold
                } else {
                    cruise
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIECEWISE: Throttle = Throttle::Piecewise {
        threshold: 0.5,
        peak: 1.5,
        cruise: 0.3,
    };

    #[test]
    fn constant_ignores_cte() {
        let throttle = Throttle::default();
        assert_eq!(throttle.value(0.), 0.3);
        assert_eq!(throttle.value(-7.), 0.3);
    }

    #[test]
    fn piecewise_inside_threshold() {
        assert_eq!(PIECEWISE.value(0.), 1.5);
        assert_eq!(PIECEWISE.value(0.25), 1.);
        assert_eq!(PIECEWISE.value(-0.25), 1.);
    }

    #[test]
    fn piecewise_outside_threshold() {
        assert_eq!(PIECEWISE.value(0.5), 0.3);
        assert_eq!(PIECEWISE.value(-3.), 0.3);
    }

    #[test]
    fn deserializes_from_json() {
        let throttle: Throttle =
            serde_json::from_str(r#"{"piecewise":{"threshold":0.01,"peak":1.1,"cruise":0.3}}"#)
                .unwrap();
        assert_eq!(
            throttle,
            Throttle::Piecewise {
                threshold: 0.01,
                peak: 1.1,
                cruise: 0.3
            }
        );
    }
}
