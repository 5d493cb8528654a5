pub mod error;
pub mod grid;
pub mod states;
pub mod shapes;
pub mod params;
pub mod tableau;
pub mod field;
pub mod integrator;
pub mod analytical;
pub mod engine;
pub mod calculator;
pub mod scenario;
