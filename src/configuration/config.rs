//! Configuration types for loading deformation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`BodyConfig`]   – the circle that gets sampled into material points
//! - [`TimeConfig`]   – the time window of the run
//! - [`SolverConfig`] – analytical or numerical solution, and the step size
//! - `snapshots`      – times at which the deformed shape is reported
//! - [`GridConfig`]   – optional grid for sampling the velocity field
//!
//! # YAML format
//!
//! ```yaml
//! body:
//!   center: [ 5.0, -5.0 ]   # quadrant IV
//!   radius: 3.0
//!   num_points: 48          # requested, points outside quadrant IV are dropped
//!
//! time:
//!   t0: 0.1                 # the field is singular at t = 0
//!   t_end: 3.0
//!
//! solver:
//!   method: "numerical"     # or "analytical"
//!   dt: 0.01                # required for "numerical"
//!
//! snapshots: [ 0.5, 1.0, 2.0, 3.0 ]
//!
//! field_grid:
//!   x_range: [ 0.0, 10.0 ]
//!   y_range: [ -10.0, 0.0 ]
//!   nx: 30
//!   ny: 30
//! ```
//!
//! `Scenario::build_scenario` maps this onto the runtime types.

use serde::Deserialize;

/// Which solution path the calculator uses
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum MethodConfig {
    #[serde(rename = "analytical")] // closed form, 100 samples per trajectory
    Analytical,

    #[serde(rename = "numerical")] // classical RK4 with a fixed step
    Numerical,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub center: [f64; 2], // circle center (x, y)
    pub radius: f64,      // circle radius, > 0
    #[serde(default = "default_num_points")]
    pub num_points: usize, // requested sample count before filtering
}

#[derive(Deserialize, Debug, Clone)]
pub struct TimeConfig {
    pub t0: f64,    // window start
    pub t_end: f64, // window end
}

#[derive(Deserialize, Debug, Clone)]
pub struct SolverConfig {
    pub method: MethodConfig,
    pub dt: Option<f64>, // fixed step, numerical only
}

#[derive(Deserialize, Debug, Clone)]
pub struct GridConfig {
    pub x_range: [f64; 2],
    pub y_range: [f64; 2],
    #[serde(default = "default_grid_size")]
    pub nx: usize,
    #[serde(default = "default_grid_size")]
    pub ny: usize,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub body: BodyConfig,
    pub time: TimeConfig,
    pub solver: SolverConfig,
    #[serde(default)]
    pub snapshots: Vec<f64>,
    pub field_grid: Option<GridConfig>,
}

fn default_num_points() -> usize {
    36
}

fn default_grid_size() -> usize {
    30
}
