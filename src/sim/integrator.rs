use crate::dynamics;
use crate::dynamics::state::{SimConfig, State};
use crate::scenario::ParameterSet;

// ---------------------------------------------------------------------------
// Explicit Euler integrator
// ---------------------------------------------------------------------------

/// Single explicit Euler step of `config.dt`.
///
/// Position advances with the entry velocity and velocity with the entry
/// acceleration; both come from one derivative evaluation.
pub fn euler_step(state: &State, params: &ParameterSet, config: &SimConfig) -> State {
    let d = dynamics::derivatives(state, params, config);
    state.apply(&d, config.dt)
}
