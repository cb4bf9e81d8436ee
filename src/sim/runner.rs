use tracing::{debug, warn};

use super::integrator::euler_step;
use super::trajectory::{Sample, SimulationResult, Termination};
use crate::dynamics::state::{SimConfig, State};
use crate::error::ParameterError;
use crate::physics::Environment;
use crate::scenario::ParameterSet;

/// Preallocation ceiling; long runs grow the buffer past this as needed.
const PREALLOCATED_SAMPLES: usize = 4_096;

// ---------------------------------------------------------------------------
// Full flight simulation
// ---------------------------------------------------------------------------

/// Simulate from launch to ground contact (or the time ceiling) with an
/// explicit config.
///
/// Does not validate `params`; see [`try_integrate_with`]. A config that
/// fails [`SimConfig::validate`] is replaced by the default one so the run
/// always reaches ground contact or the time ceiling.
pub fn integrate_with(params: &ParameterSet, config: &SimConfig) -> SimulationResult {
    let fallback;
    let config = match config.validate() {
        Ok(()) => config,
        Err(e) => {
            warn!(error = %e, "unusable simulation config, using defaults");
            fallback = SimConfig::default();
            &fallback
        }
    };

    let mut state = State::launch(params);
    let mut trajectory = Vec::with_capacity(config.max_samples().min(PREALLOCATED_SAMPLES));
    let mut termination = None;

    while state.pos.y >= 0.0 && state.time < config.max_time {
        let entry = Sample::from_state(&state);
        trajectory.push(entry);

        state = euler_step(&state, params, config);

        // Ground contact: clamp, keep the step's entry velocity and speed
        if state.pos.y < 0.0 {
            trajectory.push(Sample {
                x: state.pos.x,
                y: 0.0,
                t: state.time,
                ..entry
            });
            termination = Some(Termination::GroundContact);
            break;
        }
    }

    let termination = termination.unwrap_or_else(|| close_without_contact(&mut trajectory, &state));
    let result = SimulationResult::summarize(trajectory, termination);

    if termination == Termination::Cutoff {
        warn!(
            max_time = config.max_time,
            height = result.last().y,
            "trajectory cut off before ground contact"
        );
    }
    debug!(
        samples = result.len(),
        time_of_flight = result.time_of_flight(),
        max_height = result.max_height(),
        range = result.range(),
        "trajectory integrated"
    );

    result
}

/// Record the final state when the loop ended without crossing the ground.
fn close_without_contact(trajectory: &mut Vec<Sample>, state: &State) -> Termination {
    let mut last = Sample::from_state(state);
    if trajectory.is_empty() && (last.y < 0.0 || last.y.is_nan()) {
        // Launched below ground: nothing to fly.
        last.y = 0.0;
        trajectory.push(last);
        return Termination::GroundContact;
    }
    trajectory.push(last);
    Termination::Cutoff
}

/// Simulate with the default fixed step and time ceiling.
pub fn integrate(params: &ParameterSet) -> SimulationResult {
    integrate_with(params, &SimConfig::default())
}

/// Validate, then simulate with the default config.
pub fn try_integrate(params: &ParameterSet) -> Result<SimulationResult, ParameterError> {
    params.validate()?;
    Ok(integrate(params))
}

/// Validate both inputs, then simulate.
pub fn try_integrate_with(
    params: &ParameterSet,
    config: &SimConfig,
) -> Result<SimulationResult, ParameterError> {
    config.validate()?;
    params.validate()?;
    Ok(integrate_with(params, config))
}

// ---------------------------------------------------------------------------
// Comparison mode
// ---------------------------------------------------------------------------

/// One environment's independent run.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub environment: Environment,
    pub result: SimulationResult,
}

/// Run the same launch once per environment, replacing only gravity.
pub fn compare_environments(
    params: &ParameterSet,
    environments: &[Environment],
    config: &SimConfig,
) -> Vec<Comparison> {
    environments
        .iter()
        .map(|env| Comparison {
            environment: *env,
            result: integrate_with(&params.with_gravity(env.gravity), config),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
