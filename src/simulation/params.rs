//! Time window of a run
//!
//! `Parameters` holds the runtime settings shared by both strategies:
//! - start time `t0` and end time `t_end`
//! - optional fixed step `h0` (numerical runs only)

use super::error::{SimError, SimResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub t0: f64, // time start
    pub t_end: f64, // time end
    pub h0: Option<f64>, // step size, None = analytical
}

impl Parameters {
    pub fn check(&self) -> SimResult<()> {
        if !(self.t0.is_finite() && self.t_end.is_finite()) {
            return Err(SimError::InvalidStep(format!("window [{}, {}] must be finite", self.t0, self.t_end)));
        }
        if let Some(h0) = self.h0 {
            if !(h0.is_finite() && h0 > 0.0) {
                return Err(SimError::InvalidStep(format!("dt must be positive and finite, got {h0}")));
            }
        }
        Ok(())
    }

    /// Is `t` inside the closed window [t0, t_end]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.t0 && t <= self.t_end
    }
}
