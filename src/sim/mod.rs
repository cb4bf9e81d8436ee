pub mod event;
pub mod integrator;
pub mod playback;
pub mod query;
pub mod runner;
pub mod trajectory;

pub use integrator::euler_step;
pub use playback::Playback;
pub use query::{sample_at, trail_until};
pub use runner::{
    compare_environments, integrate, integrate_with, try_integrate, try_integrate_with, Comparison,
};
pub use trajectory::{Sample, SimulationResult, Termination};
