//! Trajectory calculator: drives a solution strategy over every point of a body
//!
//! The calculator borrows its body mutably for its whole lifetime.
//! `calculate_trajectories` replaces every point's trajectory (never appends),
//! so repeated calls with the same window give identical results.
//!
//! `get_form_at_time(t)` does not read stored trajectories:
//! - numerical strategy re-integrates each point from t0 to t
//! - analytical strategy evaluates the closed form from each initial position
//!
//! and `t` must lie inside [t0, t_end].

use log::{debug, info};

use super::engine::{Strategy, TrajectoryStrategy};
use super::error::{SimError, SimResult};
use super::params::Parameters;
use super::states::{MaterialBody, NVec2, Trajectory};

pub struct TrajectoryCalculator<'a, B: MaterialBody> {
    body: &'a mut B,
    parameters: Parameters,
    strategy: Strategy,
    solver: Box<dyn TrajectoryStrategy>,
}

impl<'a, B: MaterialBody> TrajectoryCalculator<'a, B> {
    pub fn new(body: &'a mut B, t0: f64, t_end: f64, strategy: Strategy) -> SimResult<Self> {
        let parameters = Parameters { t0, t_end, h0: strategy.dt() };
        parameters.check()?;
        Ok(Self {
            body,
            parameters,
            strategy,
            solver: strategy.solver(),
        })
    }

    /// RK4 with fixed step `dt`
    pub fn numerical(body: &'a mut B, t0: f64, t_end: f64, dt: f64) -> SimResult<Self> {
        Self::new(body, t0, t_end, Strategy::Numerical { dt })
    }

    pub fn analytical(body: &'a mut B, t0: f64, t_end: f64) -> SimResult<Self> {
        Self::new(body, t0, t_end, Strategy::Analytical)
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn body(&self) -> &B {
        &*self.body
    }

    /// Trajectories of all points, index = point order; the body is left untouched
    pub fn compute(&self) -> SimResult<Vec<Trajectory>> {
        let Parameters { t0, t_end, .. } = self.parameters;
        self.body
            .points()
            .iter()
            .map(|p| self.solver.populate_trajectory(&p.x0, t0, t_end))
            .collect()
    }

    /// Rebuild every point's trajectory over [t0, t_end]
    pub fn calculate_trajectories(&mut self) -> SimResult<()> {
        let trajectories = self.compute()?;
        for (point, trajectory) in self.body.points_mut().iter_mut().zip(trajectories) {
            point.trajectory = trajectory;
        }

        info!(
            "{} trajectories computed for {} points over [{}, {}]",
            self.solver.name(),
            self.body.points().len(),
            self.parameters.t0,
            self.parameters.t_end
        );
        Ok(())
    }

    /// Per point, its trajectory split into x / y sequences
    pub fn get_body_trajectories(&self) -> Vec<(Vec<f64>, Vec<f64>)> {
        self.body
            .points()
            .iter()
            .map(|p| p.trajectory.coordinates())
            .collect()
    }

    /// Reference outline of the undeformed body
    pub fn get_initial_circle(&self) -> (Vec<f64>, Vec<f64>) {
        self.body.outline()
    }

    /// Current position of every point (last trajectory sample)
    pub fn current_positions(&self) -> Vec<NVec2> {
        self.body.points().iter().map(|p| p.position()).collect()
    }

    /// Shape of the body at time `t` as x / y sequences, in point order
    pub fn get_form_at_time(&self, t: f64) -> SimResult<(Vec<f64>, Vec<f64>)> {
        let Parameters { t0, t_end, .. } = self.parameters;
        if !self.parameters.contains(t) {
            return Err(SimError::TimeOutOfRange { t, t0, t_end });
        }
        debug!("{} form at t = {t}", self.solver.name());

        let positions = self
            .body
            .points()
            .iter()
            .map(|p| self.solver.position_at(&p.x0, t0, t))
            .collect::<SimResult<Vec<NVec2>>>()?;

        Ok(positions.iter().map(|p| (p.x, p.y)).unzip())
    }
}
