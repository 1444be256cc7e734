//! Application systems

mod simulation;

pub use simulation::{FrameSummary, SimulationSystem};
