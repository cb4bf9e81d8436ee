pub mod drag;
pub mod gravity;

pub use gravity::{Environment, ENVIRONMENTS};
