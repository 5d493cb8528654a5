//! Error types for the trajectory engine
//!
//! Fallible operations return `SimResult<T>`. The velocity field itself never
//! fails (t <= 0 is a zero-velocity guard, not an error)

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Coefficient table is not a valid explicit Runge–Kutta tableau
    #[error("Invalid Butcher tableau: {0}")]
    InvalidTableau(String),

    /// Step size or time window cannot drive a fixed-step integration
    #[error("Invalid step: {0}")]
    InvalidStep(String),

    /// Body geometry is unusable (non-positive or non-finite radius, ...)
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Shape query outside the calculator's time window
    #[error("Time {t} is outside the window [{t0}, {t_end}]")]
    TimeOutOfRange { t: f64, t0: f64, t_end: f64 },

    /// A position left the representable range (exp overflow)
    #[error("Numerical range exceeded at t = {t}")]
    NumericalRange { t: f64 },
}

pub type SimResult<T> = Result<T, SimError>;
