use serde::{Deserialize, Serialize};

use crate::dynamics::state::State;

// ---------------------------------------------------------------------------
// Trajectory samples
// ---------------------------------------------------------------------------

/// One recorded instant of a flight.
/// `y` is measured from the ground, not from the launch point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,    // m
    pub y: f64,    // m
    pub t: f64,    // s
    pub v: f64,    // m/s, speed magnitude
    pub vx: f64,   // m/s
    pub vy: f64,   // m/s
}

impl Sample {
    pub fn from_state(state: &State) -> Self {
        Sample {
            x: state.pos.x,
            y: state.pos.y,
            t: state.time,
            v: state.speed(),
            vx: state.vel.x,
            vy: state.vel.y,
        }
    }
}

/// Why a run stopped recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Final sample sits on the ground (y clamped to 0).
    GroundContact,
    /// The time ceiling was reached first; final sample is the last state.
    Cutoff,
}

// ---------------------------------------------------------------------------
// Simulation result
// ---------------------------------------------------------------------------

/// Sampled trajectory plus its summary metrics. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    max_height: f64,
    range: f64,
    time_of_flight: f64,
    trajectory: Vec<Sample>,
    termination: Termination,
}

impl SimulationResult {
    /// Summarize a recorded trajectory. `None` when there are no samples.
    pub fn from_samples(trajectory: Vec<Sample>, termination: Termination) -> Option<Self> {
        if trajectory.is_empty() {
            None
        } else {
            Some(Self::summarize(trajectory, termination))
        }
    }

    /// Caller guarantees at least one sample.
    pub(crate) fn summarize(trajectory: Vec<Sample>, termination: Termination) -> Self {
        debug_assert!(!trajectory.is_empty(), "trajectory must hold the launch sample");
        let max_height = trajectory
            .iter()
            .map(|s| s.y)
            .fold(f64::NEG_INFINITY, f64::max);
        let (range, time_of_flight) = trajectory.last().map_or((0.0, 0.0), |s| (s.x, s.t));

        SimulationResult {
            max_height,
            range,
            time_of_flight,
            trajectory,
            termination,
        }
    }

    /// Highest sampled height, m. Limited by the sampling resolution.
    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    /// Horizontal distance of the final sample, m.
    pub fn range(&self) -> f64 {
        self.range
    }

    /// Time of the final sample, s.
    pub fn time_of_flight(&self) -> f64 {
        self.time_of_flight
    }

    pub fn trajectory(&self) -> &[Sample] {
        &self.trajectory
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    pub fn first(&self) -> &Sample {
        &self.trajectory[0]
    }

    pub fn last(&self) -> &Sample {
        &self.trajectory[self.trajectory.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.trajectory.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.trajectory.is_empty()
    }

    /// Sample with the greatest height (first one on ties).
    pub fn apex(&self) -> &Sample {
        self.trajectory
            .iter()
            .fold(self.first(), |best, s| if s.y > best.y { s } else { best })
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.trajectory
    }
}
