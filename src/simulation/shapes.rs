//! Body builders: sample a shape, keep the candidates a filter accepts
//!
//! `CircleBody` samples a circle and by default keeps only the points that lie
//! strictly inside quadrant IV (x > 0, y < 0). The filter is injectable through
//! [`PointFilter`], so other regions reuse the same builder.

use std::f64::consts::TAU;

use super::error::{SimError, SimResult};
use super::grid::{linspace, linspace_open};
use super::states::{Body, MaterialBody, NVec2, SamplePoint};

/// Number of samples in the unfiltered reference outline
pub const OUTLINE_SAMPLES: usize = 100;

/// Membership rule applied once to every candidate at construction
pub trait PointFilter {
    fn accepts(&self, p: &NVec2) -> bool;
}

/// Strict quadrant IV: x > 0 and y < 0 (axes excluded)
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadrantIV;

impl PointFilter for QuadrantIV {
    fn accepts(&self, p: &NVec2) -> bool {
        p.x > 0.0 && p.y < 0.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl PointFilter for AcceptAll {
    fn accepts(&self, _p: &NVec2) -> bool {
        true
    }
}

impl<F> PointFilter for F
where
    F: Fn(&NVec2) -> bool,
{
    fn accepts(&self, p: &NVec2) -> bool {
        self(p)
    }
}

#[derive(Debug, Clone)]
pub struct CircleBody {
    pub center: NVec2,
    pub radius: f64,
    pub num_points: usize, // requested, realized count can be lower
    body: Body,
}

impl CircleBody {
    /// Circle body restricted to quadrant IV
    pub fn new(center: NVec2, radius: f64, num_points: usize) -> SimResult<Self> {
        Self::with_filter(center, radius, num_points, &QuadrantIV)
    }

    pub fn with_filter(center: NVec2, radius: f64, num_points: usize, filter: &dyn PointFilter) -> SimResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidGeometry(format!("radius must be positive and finite, got {radius}")));
        }
        if !(center.x.is_finite() && center.y.is_finite()) {
            return Err(SimError::InvalidGeometry(format!("center must be finite, got ({}, {})", center.x, center.y)));
        }

        let mut body = Body::new();
        for angle in linspace_open(0.0, TAU, num_points) {
            let p = center + radius * NVec2::new(angle.cos(), angle.sin());
            if filter.accepts(&p) {
                body.add_point(SamplePoint::new(p));
            }
        }

        log::debug!(
            "circle body: center=({}, {}), r={}, kept {}/{} points",
            center.x, center.y, radius, body.len(), num_points
        );

        Ok(Self { center, radius, num_points, body })
    }

    pub fn get_points(&self) -> &[SamplePoint] {
        self.body.get_points()
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Full closed circle, `OUTLINE_SAMPLES` points, first == last
    pub fn get_circle_coordinates(&self) -> (Vec<f64>, Vec<f64>) {
        linspace(0.0, TAU, OUTLINE_SAMPLES)
            .into_iter()
            .map(|a| (self.center.x + self.radius * a.cos(), self.center.y + self.radius * a.sin()))
            .unzip()
    }
}

impl MaterialBody for CircleBody {
    fn points(&self) -> &[SamplePoint] {
        self.body.get_points()
    }

    fn points_mut(&mut self) -> &mut [SamplePoint] {
        self.body.get_points_mut()
    }

    fn outline(&self) -> (Vec<f64>, Vec<f64>) {
        self.get_circle_coordinates()
    }
}
