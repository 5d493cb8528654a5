//! Core state types for the material body.
//!
//! - `NVec2`       position (nalgebra vector, value semantics)
//! - `Trajectory`  chronological list of positions of one point
//! - `SamplePoint` material point: initial position, mass, trajectory
//! - `Body`        ordered collection of sample points
//!
//! `MaterialBody` is the seam the trajectory calculator works through.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    pub points: Vec<NVec2>, // insertion order = time order
}

impl Trajectory {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { points: Vec::with_capacity(n) }
    }

    pub fn push(&mut self, p: NVec2) {
        self.points.push(p);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&NVec2> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&NVec2> {
        self.points.last()
    }

    /// Split into parallel x / y sequences (plotting layout)
    pub fn coordinates(&self) -> (Vec<f64>, Vec<f64>) {
        self.points.iter().map(|p| (p.x, p.y)).unzip()
    }
}

impl FromIterator<NVec2> for Trajectory {
    fn from_iter<I: IntoIterator<Item = NVec2>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

#[derive(Debug, Clone)]
pub struct SamplePoint {
    pub x0: NVec2, // position at the window start
    pub m: f64, // mass, carried but unused by the kinematics
    pub trajectory: Trajectory,
}

impl SamplePoint {
    /// New point with unit mass; the trajectory is seeded with `x0`
    pub fn new(x0: NVec2) -> Self {
        Self::with_mass(x0, 1.0)
    }

    pub fn with_mass(x0: NVec2, m: f64) -> Self {
        let mut trajectory = Trajectory::new();
        trajectory.push(x0);
        Self { x0, m, trajectory }
    }

    /// Current position: last recorded sample, or `x0` before any sample exists
    pub fn position(&self) -> NVec2 {
        self.trajectory.last().copied().unwrap_or(self.x0)
    }

    pub fn get_trajectory(&self) -> &Trajectory {
        &self.trajectory
    }
}

/// Anything the trajectory calculator can advect
pub trait MaterialBody {
    fn points(&self) -> &[SamplePoint];
    fn points_mut(&mut self) -> &mut [SamplePoint];

    /// Reference outline for plotting, as parallel x / y sequences
    fn outline(&self) -> (Vec<f64>, Vec<f64>);
}

#[derive(Debug, Clone, Default)]
pub struct Body {
    pub points: Vec<SamplePoint>, // construction order
}

impl Body {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn from_positions<I: IntoIterator<Item = NVec2>>(positions: I) -> Self {
        Self {
            points: positions.into_iter().map(SamplePoint::new).collect(),
        }
    }

    pub fn add_point(&mut self, point: SamplePoint) {
        self.points.push(point);
    }

    pub fn get_points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn get_points_mut(&mut self) -> &mut [SamplePoint] {
        &mut self.points
    }

    pub fn get_trajectories(&self) -> Vec<&Trajectory> {
        self.points.iter().map(|p| &p.trajectory).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl MaterialBody for Body {
    fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    fn points_mut(&mut self) -> &mut [SamplePoint] {
        &mut self.points
    }

    // A bare point cloud has no analytic outline, use the initial positions
    fn outline(&self) -> (Vec<f64>, Vec<f64>) {
        self.points.iter().map(|p| (p.x0.x, p.x0.y)).unzip()
    }
}
