//! Edit operations that run against a `BlockGrid` within a `Region`.

pub mod simulate_snow;

pub use simulate_snow::{ColumnStep, SimulateSnow, classify};
