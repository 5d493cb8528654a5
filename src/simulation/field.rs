//! The prescribed velocity field and the right-hand-side trait
//!
//! ```text
//! v1 = -ln(t) * x1,   v2 = t * x2
//! ```
//!
//! The field is undefined at t <= 0 (ln); it is taken to be zero there.
//! [`Derivative`] is the state-vector form the integrator consumes.

use nalgebra::{DMatrix, DVector};

use super::grid::linspace;
use super::states::NVec2;

/// Right-hand side of dy/dt = f(t, y)
/// Implementations write f(t, y) into `out`, which has the length of `y`
pub trait Derivative {
    fn derivative(&self, t: f64, y: &DVector<f64>, out: &mut DVector<f64>);
}

impl<F> Derivative for F
where
    F: Fn(f64, &DVector<f64>, &mut DVector<f64>),
{
    fn derivative(&self, t: f64, y: &DVector<f64>, out: &mut DVector<f64>) {
        self(t, y, out)
    }
}

/// Velocity components at (t, x, y); zero for t <= 0
pub fn velocity(t: f64, x: f64, y: f64) -> (f64, f64) {
    if t <= 0.0 {
        return (0.0, 0.0);
    }
    (-t.ln() * x, t * y)
}

/// Field values sampled on a regular grid, meshgrid layout (rows follow y)
#[derive(Debug, Clone)]
pub struct FieldSamples {
    pub t: f64,
    pub x: DMatrix<f64>,
    pub y: DMatrix<f64>,
    pub vx: DMatrix<f64>,
    pub vy: DMatrix<f64>,
}

impl FieldSamples {
    /// Velocity magnitude per grid node
    pub fn speed(&self) -> DMatrix<f64> {
        self.vx.zip_map(&self.vy, |a, b| a.hypot(b))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VelocityField;

impl VelocityField {
    pub fn velocity_at(&self, t: f64, p: &NVec2) -> NVec2 {
        let (vx, vy) = velocity(t, p.x, p.y);
        NVec2::new(vx, vy)
    }

    /// Stretch rates (-ln t, t) of the two axes, `None` where the field is guarded
    pub fn coefficients(&self, t: f64) -> Option<(f64, f64)> {
        (t > 0.0).then(|| (-t.ln(), t))
    }

    /// Sample the field at time `t` on an `nx` x `ny` grid spanning the ranges
    pub fn sample_grid(&self, t: f64, x_range: (f64, f64), y_range: (f64, f64), nx: usize, ny: usize) -> FieldSamples {
        let xs = linspace(x_range.0, x_range.1, nx);
        let ys = linspace(y_range.0, y_range.1, ny);

        let x = DMatrix::from_fn(ny, nx, |_, j| xs[j]);
        let y = DMatrix::from_fn(ny, nx, |i, _| ys[i]);
        let vx = DMatrix::from_fn(ny, nx, |i, j| velocity(t, xs[j], ys[i]).0);
        let vy = DMatrix::from_fn(ny, nx, |i, j| velocity(t, xs[j], ys[i]).1);

        FieldSamples { t, x, y, vx, vy }
    }
}

impl Derivative for VelocityField {
    fn derivative(&self, t: f64, y: &DVector<f64>, out: &mut DVector<f64>) {
        let (vx, vy) = velocity(t, y[0], y[1]);
        out[0] = vx;
        out[1] = vy;
    }
}
