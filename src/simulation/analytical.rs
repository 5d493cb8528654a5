//! Closed-form trajectories of the field v1 = -ln(t) x1, v2 = t x2
//!
//! Separating the axes gives dx/x = -ln(t) dt and dy/y = t dt, so with
//! G(t) = t ln t - t and H(t) = t^2 / 2
//!
//! ```text
//! x(t) = x0 * exp(-(G(t) - G(t0)))
//! y(t) = y0 * exp(H(t) - H(t0))
//! ```
//!
//! where (x0, y0) is the position at t0. For t0 = 0 this is the textbook
//! x0 * exp(-(t ln t - t)), y0 * exp(t^2 / 2).

use super::error::{SimError, SimResult};
use super::grid::linspace;
use super::states::{MaterialBody, NVec2, Trajectory};

/// Samples per analytical trajectory
pub const ANALYTICAL_SAMPLES: usize = 100;

/// Below this, t ln t is replaced by its first-order limit
pub const SMALL_T: f64 = 1e-10;

/// G(t) = t ln t - t, with G(0) = 0 and G(t) ~ -t for 0 < t < SMALL_T
fn x_exponent(t: f64) -> f64 {
    if t <= 0.0 {
        0.0
    } else if t < SMALL_T {
        -t
    } else {
        t * t.ln() - t
    }
}

/// H(t) = t^2 / 2, zero outside the timeline
fn y_exponent(t: f64) -> f64 {
    if t <= 0.0 { 0.0 } else { 0.5 * t * t }
}

/// Position at `t` of the point that sits at `x0` at time `t0`
///
/// Times before 0 are not part of the timeline and return `x0` unchanged.
pub fn position_at(x0: &NVec2, t0: f64, t: f64) -> SimResult<NVec2> {
    if t < 0.0 {
        return Ok(*x0);
    }
    let fx = (-(x_exponent(t) - x_exponent(t0))).exp();
    let fy = (y_exponent(t) - y_exponent(t0)).exp();
    let p = NVec2::new(x0.x * fx, x0.y * fy);

    if !(p.x.is_finite() && p.y.is_finite()) {
        return Err(SimError::NumericalRange { t });
    }
    Ok(p)
}

/// Closed form at `n_samples` evenly spaced times in [t0, t_end]
pub fn trajectory_over(x0: &NVec2, t0: f64, t_end: f64, n_samples: usize) -> SimResult<Trajectory> {
    linspace(t0, t_end, n_samples)
        .into_iter()
        .map(|t| position_at(x0, t0, t))
        .collect()
}

/// Every point of `body` at time `t`, each anchored to its own initial position
pub fn shape_at<B: MaterialBody + ?Sized>(body: &B, t0: f64, t: f64) -> SimResult<Vec<NVec2>> {
    body.points()
        .iter()
        .map(|p| position_at(&p.x0, t0, t))
        .collect()
}
