//! Butcher tableaux for explicit Runge–Kutta methods
//!
//! A tableau is pure data: the stage-coupling matrix `a` (strictly lower
//! triangular for an explicit method), the weights `b` and the nodes `c`.
//! The integrator reads the stage count and coefficients from here and never
//! hard-codes them, so swapping the tableau is the only thing needed to run
//! another explicit method.
//!
//! ```text
//!  c | a
//! ---+----
//!    | b
//! ```

use nalgebra::{DMatrix, DVector};

use super::error::{SimError, SimResult};

const WEIGHT_SUM_TOL: f64 = 1e-12;

/// Descriptive metadata of a method
#[derive(Debug, Clone, PartialEq)]
pub struct MethodInfo {
    pub name: String,
    pub stages: usize,
    pub order: usize,
}

#[derive(Debug, Clone)]
pub struct ButcherTableau {
    name: String,
    order: usize,
    a: DMatrix<f64>, // S x S stage coupling
    b: DVector<f64>, // S weights, sum to 1
    c: DVector<f64>, // S nodes, offsets within the step
}

impl ButcherTableau {
    /// Build and validate a custom explicit tableau
    pub fn new(name: impl Into<String>, order: usize, a: DMatrix<f64>, b: DVector<f64>, c: DVector<f64>) -> SimResult<Self> {
        let s = b.len();
        if s == 0 {
            return Err(SimError::InvalidTableau("tableau needs at least one stage".into()));
        }
        if a.nrows() != s || a.ncols() != s || c.len() != s {
            return Err(SimError::InvalidTableau(format!(
                "shape mismatch: a is {}x{}, b has {}, c has {}",
                a.nrows(), a.ncols(), s, c.len()
            )));
        }
        if a.iter().chain(b.iter()).chain(c.iter()).any(|v| !v.is_finite()) {
            return Err(SimError::InvalidTableau("coefficients must be finite".into()));
        }

        // explicit method: nothing on or above the diagonal
        for i in 0..s {
            for j in i..s {
                if a[(i, j)] != 0.0 {
                    return Err(SimError::InvalidTableau(format!("a[{i},{j}] = {} breaks the explicit structure", a[(i, j)])));
                }
            }
        }

        let weight_sum = b.sum();
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOL {
            return Err(SimError::InvalidTableau(format!("weights sum to {weight_sum}, expected 1")));
        }

        Ok(Self { name: name.into(), order, a, b, c })
    }

    /// Classical 4-stage, 4th-order Runge–Kutta
    pub fn rk4() -> Self {
        let a = DMatrix::from_row_slice(4, 4, &[
            0.0, 0.0, 0.0, 0.0,
            0.5, 0.0, 0.0, 0.0,
            0.0, 0.5, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
        ]);
        Self {
            name: "RK4 (classical 4-stage Runge-Kutta)".into(),
            order: 4,
            a,
            b: DVector::from_vec(vec![1.0 / 6.0, 2.0 / 6.0, 2.0 / 6.0, 1.0 / 6.0]),
            c: DVector::from_vec(vec![0.0, 0.5, 0.5, 1.0]),
        }
    }

    /// Forward Euler, 1 stage
    pub fn euler() -> Self {
        Self {
            name: "Forward Euler".into(),
            order: 1,
            a: DMatrix::zeros(1, 1),
            b: DVector::from_element(1, 1.0),
            c: DVector::zeros(1),
        }
    }

    /// Heun's method (explicit trapezoid), 2 stages
    pub fn heun() -> Self {
        Self {
            name: "Heun".into(),
            order: 2,
            a: DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 1.0, 0.0]),
            b: DVector::from_vec(vec![0.5, 0.5]),
            c: DVector::from_vec(vec![0.0, 1.0]),
        }
    }

    pub fn get_stages(&self) -> usize {
        self.b.len()
    }

    pub fn get_coefficients(&self) -> (&DMatrix<f64>, &DVector<f64>, &DVector<f64>) {
        (&self.a, &self.b, &self.c)
    }

    pub fn get_method_info(&self) -> MethodInfo {
        MethodInfo {
            name: self.name.clone(),
            stages: self.get_stages(),
            order: self.order,
        }
    }
}

impl Default for ButcherTableau {
    fn default() -> Self {
        Self::rk4()
    }
}
