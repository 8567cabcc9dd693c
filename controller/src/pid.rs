use log::debug;

use crate::{Controller, ControllerErr, Result};

const GAINS: usize = 3;

/// Proportional-integral-derivative controller, the output is `kp·p + ki·i + kd·d`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PidController {
    kp: f64,
    ki: f64,
    kd: f64,

    p_error: f64,
    i_error: f64,
    d_error: f64,
}

impl PidController {
    /// Creates a new `PidController` with cleared history.
    ///
    /// # Arguments
    /// * `kp` - Proportional gain.
    /// * `ki` - Integral gain.
    /// * `kd` - Derivative gain.
    pub fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self {
            kp,
            ki,
            kd,
            ..Self::default()
        }
    }

    /// Creates a new `PidController` from a `[kp, ki, kd]` gain vector.
    ///
    /// # Returns
    /// An error if `gains` doesn't hold exactly three values.
    pub fn from_gains(gains: &[f64]) -> Result<Self> {
        let mut pid = Self::default();
        pid.init(gains)?;
        Ok(pid)
    }

    /// The gains as `[kp, ki, kd]`.
    pub fn gains(&self) -> [f64; GAINS] {
        [self.kp, self.ki, self.kd]
    }
}

impl Controller for PidController {
    fn init(&mut self, gains: &[f64]) -> Result<()> {
        let &[kp, ki, kd] = gains else {
            return Err(ControllerErr::GainCount {
                got: gains.len(),
                expected: GAINS,
            });
        };

        *self = Self::new(kp, ki, kd);
        debug!(kp = kp, ki = ki, kd = kd; "controller initialized");
        Ok(())
    }

    fn update_error(&mut self, sample: f64) -> f64 {
        self.d_error = sample - self.p_error;
        self.p_error = sample;
        self.i_error += sample;

        self.kp * self.p_error + self.ki * self.i_error + self.kd * self.d_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proportional_only() {
        let mut pid = PidController::new(2., 0., 0.);
        assert_eq!(pid.update_error(0.5), 1.);
        assert_eq!(pid.update_error(-1.), -2.);
    }

    #[test]
    fn integral_accumulates() {
        let mut pid = PidController::new(0., 1., 0.);
        assert_eq!(pid.update_error(1.), 1.);
        assert_eq!(pid.update_error(2.), 3.);
        assert_eq!(pid.update_error(-0.5), 2.5);
    }

    #[test]
    fn derivative_uses_previous_sample() {
        let mut pid = PidController::new(0., 0., 1.);
        assert_eq!(pid.update_error(1.), 1.);
        assert_eq!(pid.update_error(3.), 2.);
        assert_eq!(pid.update_error(3.), 0.);
    }

    #[test]
    fn init_clears_history() {
        let mut pid = PidController::new(1., 1., 1.);
        pid.update_error(4.);
        pid.update_error(2.);

        pid.init(&[1., 1., 1.]).unwrap();
        assert_eq!(pid, PidController::new(1., 1., 1.));
        assert_eq!(pid.update_error(1.), 3.);
    }

    #[test]
    fn init_replaces_gains() {
        let mut pid = PidController::from_gains(&[0.08, 0.000166, 2.501]).unwrap();
        assert_eq!(pid.gains(), [0.08, 0.000166, 2.501]);

        pid.init(&[1., 2., 3.]).unwrap();
        assert_eq!(pid.gains(), [1., 2., 3.]);
    }

    #[test]
    fn rejects_wrong_gain_count() {
        let mut pid = PidController::new(1., 0., 0.);
        let err = pid.init(&[1., 2.]).unwrap_err();

        assert_eq!(err, ControllerErr::GainCount { got: 2, expected: 3 });
        assert_eq!(pid.gains(), [1., 0., 0.]);
    }
}
