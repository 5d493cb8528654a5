//! Fixed-step explicit Runge–Kutta integrator
//!
//! Generic over the tableau (stage count and coefficients come from
//! [`ButcherTableau`]) and over the right-hand side ([`Derivative`]).
//! No adaptivity and no error control: a step is never rejected, so a too
//! large `dt` or a window crossing the t = 0 guard silently loses accuracy.

use nalgebra::DVector;

use super::error::{SimError, SimResult};
use super::field::Derivative;
use super::tableau::ButcherTableau;

/// Sampled solution: `states[i]` is the state at `times[i]`
#[derive(Debug, Clone, Default)]
pub struct Solution {
    pub times: Vec<f64>,
    pub states: Vec<DVector<f64>>,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn last_state(&self) -> Option<&DVector<f64>> {
        self.states.last()
    }
}

/// Number of grid samples for a fixed step: floor((t_end - t0) / dt) + 1, at least 1
///
/// The grid is `t0 + i * dt`. When the window is not a whole multiple of `dt`
/// the last sample lands before `t_end` (by less than one step); the march is
/// never shortened to hit `t_end` exactly.
pub fn step_count(t0: f64, t_end: f64, dt: f64) -> usize {
    let n = ((t_end - t0) / dt).floor() + 1.0;
    if n < 1.0 { 1 } else { n as usize }
}

/// Reject step sizes and windows a fixed-step march cannot use
pub fn check_step(t0: f64, t_end: f64, dt: f64) -> SimResult<()> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(SimError::InvalidStep(format!("dt must be positive and finite, got {dt}")));
    }
    if !(t0.is_finite() && t_end.is_finite()) {
        return Err(SimError::InvalidStep(format!("window [{t0}, {t_end}] must be finite")));
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct RungeKutta {
    tableau: ButcherTableau,
}

impl RungeKutta {
    pub fn new(tableau: ButcherTableau) -> Self {
        Self { tableau }
    }

    pub fn tableau(&self) -> &ButcherTableau {
        &self.tableau
    }

    /// Integrate dy/dt = f(t, y) from `y0` at `t0` towards `t_end` with step `dt`
    pub fn solve<F>(&self, f: &F, y0: &DVector<f64>, t0: f64, t_end: f64, dt: f64) -> SimResult<Solution>
    where
        F: Derivative + ?Sized,
    {
        check_step(t0, t_end, dt)?;

        let n_steps = step_count(t0, t_end, dt);
        let times: Vec<f64> = (0..n_steps).map(|i| t0 + i as f64 * dt).collect();
        let mut states = Vec::with_capacity(n_steps);
        states.push(y0.clone());

        let (a, b, c) = self.tableau.get_coefficients();
        let stages = self.tableau.get_stages();
        let dim = y0.len();

        // stage derivatives k[s] and the stage argument, reused every step
        let mut k: Vec<DVector<f64>> = vec![DVector::zeros(dim); stages];
        let mut y_stage: DVector<f64> = DVector::zeros(dim);

        for i in 0..n_steps - 1 {
            let t = times[i];
            let y = &states[i];

            for s in 0..stages {
                // y_stage = y + dt * sum_{j<s} a[s,j] k[j]
                y_stage.copy_from(y);
                for j in 0..s {
                    let a_sj = a[(s, j)];
                    if a_sj != 0.0 {
                        y_stage.axpy(dt * a_sj, &k[j], 1.0);
                    }
                }
                f.derivative(t + c[s] * dt, &y_stage, &mut k[s]);
            }

            // y_next = y + dt * sum_s b[s] k[s]
            let mut y_next = y.clone();
            for s in 0..stages {
                y_next.axpy(dt * b[s], &k[s], 1.0);
            }

            if y_next.iter().any(|v| !v.is_finite()) {
                return Err(SimError::NumericalRange { t: times[i + 1] });
            }
            states.push(y_next);
        }

        Ok(Solution { times, states })
    }
}
