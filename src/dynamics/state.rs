use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::ParameterError;
use crate::scenario::ParameterSet;

// ---------------------------------------------------------------------------
// Physical and numerical constants
// ---------------------------------------------------------------------------

/// Fixed integration step, s. Trades animation smoothness against sample count.
pub const FIXED_DT: f64 = 0.05;
/// Linear damping coefficient applied when air resistance is enabled.
pub const DRAG_COEFFICIENT: f64 = 0.08;
/// Hard ceiling on simulated time, s. The only guard against runaway loops.
pub const MAX_FLIGHT_TIME: f64 = 1000.0;
/// Gravity assumed when a scenario does not name one, m/s^2.
pub const STANDARD_GRAVITY: f64 = 9.81;
/// Largest step count a config may ask for (`max_time / dt`).
pub const MAX_STEPS: f64 = 10_000_000.0;

// ---------------------------------------------------------------------------
// Point-mass state: elapsed time, position, velocity
// ---------------------------------------------------------------------------

/// Kinematic state at one instant.
/// Frame: x downrange, y up, origin on the ground below the launch point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub time: f64,           // s
    pub pos: Vector2<f64>,   // m   [downrange, height]
    pub vel: Vector2<f64>,   // m/s
}

impl State {
    /// Launch state: angle decomposed into velocity components, raised by the
    /// initial height.
    pub fn launch(params: &ParameterSet) -> State {
        let theta = params.angle.to_radians();
        State {
            time: 0.0,
            pos: Vector2::new(0.0, params.initial_height),
            vel: Vector2::new(params.velocity * theta.cos(), params.velocity * theta.sin()),
        }
    }

    /// Advance state by a derivative scaled by dt.
    pub fn apply(&self, d: &Deriv, dt: f64) -> State {
        State {
            time: self.time + dt,
            pos: self.pos + d.dpos * dt,
            vel: self.vel + d.dvel * dt,
        }
    }

    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }
}

// ---------------------------------------------------------------------------
// State derivative (dp/dt, dv/dt)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct Deriv {
    pub dpos: Vector2<f64>,   // velocity
    pub dvel: Vector2<f64>,   // acceleration
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub dt: f64,
    pub max_time: f64,
    pub drag_coefficient: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: FIXED_DT,
            max_time: MAX_FLIGHT_TIME,
            drag_coefficient: DRAG_COEFFICIENT,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ParameterError::new("dt", self.dt, "must be a positive finite step"));
        }
        if !self.max_time.is_finite() || self.max_time <= 0.0 {
            return Err(ParameterError::new(
                "max_time",
                self.max_time,
                "must be a positive finite bound",
            ));
        }
        if self.max_time / self.dt > MAX_STEPS {
            return Err(ParameterError::new(
                "dt",
                self.dt,
                "too small for max_time (over 10 million steps)",
            ));
        }
        if !self.drag_coefficient.is_finite() || self.drag_coefficient < 0.0 {
            return Err(ParameterError::new(
                "drag_coefficient",
                self.drag_coefficient,
                "must be finite and non-negative",
            ));
        }
        Ok(())
    }

    /// Upper bound on samples a run can produce under this config.
    /// Saturates for configs that fail [`validate`](Self::validate).
    pub fn max_samples(&self) -> usize {
        let steps = (self.max_time / self.dt).ceil();
        if steps.is_nan() || steps <= 0.0 {
            return 2;
        }
        (steps.min(usize::MAX as f64) as usize).saturating_add(2)
    }
}
