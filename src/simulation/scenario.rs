//! Build fully-initialized runs from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - the sampled `CircleBody`
//! - the time window (`Parameters`)
//! - the selected `Strategy`
//! - snapshot times and an optional field sampling grid

use log::warn;

use crate::configuration::config::{GridConfig, MethodConfig, ScenarioConfig};
use crate::simulation::calculator::TrajectoryCalculator;
use crate::simulation::engine::Strategy;
use crate::simulation::error::{SimError, SimResult};
use crate::simulation::field::{FieldSamples, VelocityField};
use crate::simulation::params::Parameters;
use crate::simulation::shapes::CircleBody;
use crate::simulation::states::NVec2;

pub struct Scenario {
    pub parameters: Parameters,
    pub strategy: Strategy,
    pub body: CircleBody,
    pub snapshots: Vec<f64>,
    pub field_grid: Option<GridConfig>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        // Strategy: numerical runs need a step
        let strategy = match (cfg.solver.method, cfg.solver.dt) {
            (MethodConfig::Numerical, Some(dt)) => Strategy::Numerical { dt },
            (MethodConfig::Numerical, None) => {
                return Err(SimError::InvalidStep("numerical solver needs `dt`".into()));
            }
            (MethodConfig::Analytical, dt) => {
                if dt.is_some() {
                    warn!("`dt` is ignored by the analytical solver");
                }
                Strategy::Analytical
            }
        };

        let parameters = Parameters {
            t0: cfg.time.t0,
            t_end: cfg.time.t_end,
            h0: strategy.dt(),
        };
        parameters.check()?;

        // Body: sample the circle, keep quadrant IV
        let b_cfg = cfg.body;
        let body = CircleBody::new(NVec2::new(b_cfg.center[0], b_cfg.center[1]), b_cfg.radius, b_cfg.num_points)?;
        if body.get_points().is_empty() {
            warn!("circle does not reach quadrant IV, the body has no points");
        }

        let (snapshots, dropped): (Vec<f64>, Vec<f64>) = cfg.snapshots.into_iter().partition(|t| parameters.contains(*t));
        if !dropped.is_empty() {
            warn!("snapshots {dropped:?} lie outside [{}, {}] and are skipped", parameters.t0, parameters.t_end);
        }

        Ok(Self {
            parameters,
            strategy,
            body,
            snapshots,
            field_grid: cfg.field_grid,
        })
    }

    pub fn calculator(&mut self) -> SimResult<TrajectoryCalculator<'_, CircleBody>> {
        TrajectoryCalculator::new(&mut self.body, self.parameters.t0, self.parameters.t_end, self.strategy)
    }

    /// Field samples at time `t` on the configured grid
    pub fn field_samples(&self, t: f64) -> Option<FieldSamples> {
        self.field_grid.as_ref().map(|g| {
            VelocityField.sample_grid(t, (g.x_range[0], g.x_range[1]), (g.y_range[0], g.y_range[1]), g.nx, g.ny)
        })
    }
}
