//! Fixed-step projectile trajectory engine.
//!
//! A [`ParameterSet`](scenario::ParameterSet) goes through the explicit Euler
//! integrator in [`sim`] and comes back as a
//! [`SimulationResult`](sim::SimulationResult): an ordered, never-empty list of
//! samples from launch to ground contact plus max height, range and time of
//! flight. [`sim::query`] answers point-in-time lookups for playback.

pub mod config;
pub mod dynamics;
pub mod error;
pub mod interpret;
pub mod io;
pub mod physics;
pub mod scenario;
pub mod sim;

// Flat access to the types most callers need
pub mod types {
    pub use crate::dynamics::state::{
        SimConfig, State, DRAG_COEFFICIENT, FIXED_DT, MAX_FLIGHT_TIME, STANDARD_GRAVITY,
    };
    pub use crate::error::{ExportError, ParameterError};
    pub use crate::physics::Environment;
    pub use crate::scenario::{ParameterSet, ParameterSetBuilder};
    pub use crate::sim::{Comparison, Sample, SimulationResult, Termination};
}
