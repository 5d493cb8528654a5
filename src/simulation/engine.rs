//! Solution strategies for the trajectory calculator
//!
//! [`Strategy`] is the explicit selector chosen at construction; each variant
//! maps to a [`TrajectoryStrategy`] implementation that turns an initial
//! position into a trajectory or a single later position.

use nalgebra::DVector;

use super::analytical::{self, ANALYTICAL_SAMPLES};
use super::error::SimResult;
use super::field::VelocityField;
use super::integrator::RungeKutta;
use super::states::{NVec2, Trajectory};
use super::tableau::ButcherTableau;

/// How trajectories are produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// Closed form, fixed `ANALYTICAL_SAMPLES` samples per trajectory
    Analytical,
    /// Classical RK4 with fixed step `dt`
    Numerical { dt: f64 },
}

impl Strategy {
    /// Runtime solver for this selection
    pub fn solver(&self) -> Box<dyn TrajectoryStrategy> {
        match *self {
            Strategy::Analytical => Box::new(AnalyticalSolver),
            Strategy::Numerical { dt } => Box::new(NumericalSolver::new(ButcherTableau::rk4(), dt)),
        }
    }

    pub fn dt(&self) -> Option<f64> {
        match *self {
            Strategy::Analytical => None,
            Strategy::Numerical { dt } => Some(dt),
        }
    }
}

/// Capability shared by both solution paths
pub trait TrajectoryStrategy {
    /// Trajectory over [t0, t_end] of the point starting at `x0`
    fn populate_trajectory(&self, x0: &NVec2, t0: f64, t_end: f64) -> SimResult<Trajectory>;

    /// Position at `t` of the point starting at `x0` at `t0`
    fn position_at(&self, x0: &NVec2, t0: f64, t: f64) -> SimResult<NVec2>;

    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticalSolver;

impl TrajectoryStrategy for AnalyticalSolver {
    fn populate_trajectory(&self, x0: &NVec2, t0: f64, t_end: f64) -> SimResult<Trajectory> {
        analytical::trajectory_over(x0, t0, t_end, ANALYTICAL_SAMPLES)
    }

    fn position_at(&self, x0: &NVec2, t0: f64, t: f64) -> SimResult<NVec2> {
        analytical::position_at(x0, t0, t)
    }

    fn name(&self) -> &str {
        "analytical"
    }
}

/// Fixed-step explicit Runge–Kutta over the velocity field
#[derive(Debug, Clone)]
pub struct NumericalSolver {
    rk: RungeKutta,
    field: VelocityField,
    dt: f64,
}

impl NumericalSolver {
    pub fn new(tableau: ButcherTableau, dt: f64) -> Self {
        Self {
            rk: RungeKutta::new(tableau),
            field: VelocityField,
            dt,
        }
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    fn integrate(&self, x0: &NVec2, t0: f64, t_end: f64) -> SimResult<Vec<DVector<f64>>> {
        let y0 = DVector::from_column_slice(x0.as_slice());
        Ok(self.rk.solve(&self.field, &y0, t0, t_end, self.dt)?.states)
    }
}

impl TrajectoryStrategy for NumericalSolver {
    fn populate_trajectory(&self, x0: &NVec2, t0: f64, t_end: f64) -> SimResult<Trajectory> {
        let states = self.integrate(x0, t0, t_end)?;
        Ok(states.iter().map(|s| NVec2::new(s[0], s[1])).collect())
    }

    // fresh integration from t0, no lookup into a stored trajectory
    fn position_at(&self, x0: &NVec2, t0: f64, t: f64) -> SimResult<NVec2> {
        let states = self.integrate(x0, t0, t)?;
        Ok(states.last().map(|s| NVec2::new(s[0], s[1])).unwrap_or(*x0))
    }

    fn name(&self) -> &str {
        "numerical"
    }
}
