pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{NVec2, Trajectory, SamplePoint, Body, MaterialBody};
pub use simulation::shapes::{CircleBody, PointFilter, QuadrantIV, AcceptAll};
pub use simulation::tableau::{ButcherTableau, MethodInfo};
pub use simulation::field::{velocity, Derivative, VelocityField, FieldSamples};
pub use simulation::integrator::{RungeKutta, Solution};
pub use simulation::engine::{Strategy, TrajectoryStrategy, AnalyticalSolver, NumericalSolver};
pub use simulation::calculator::TrajectoryCalculator;
pub use simulation::scenario::Scenario;
pub use simulation::error::{SimError, SimResult};

pub use configuration::config::{ScenarioConfig, BodyConfig, TimeConfig, SolverConfig, MethodConfig, GridConfig};

pub use benchmark::benchmark::{bench_convergence, bench_calculator};
