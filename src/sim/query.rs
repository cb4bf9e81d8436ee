//! Point-in-time lookups for playback and display.
//!
//! Lookups scale the query time against the time of flight and the sample
//! count (fractional-index sampling) instead of searching on `t`. The final
//! ground sample usually lands less than a full step after its predecessor, so
//! the returned sample is an approximation of the state at `query_time`.

use super::trajectory::{Sample, SimulationResult};

/// Fraction of the flight elapsed at `query_time`. Zero for a zero-length flight.
fn progress(result: &SimulationResult, query_time: f64) -> f64 {
    let tof = result.time_of_flight();
    if tof > 0.0 {
        query_time / tof
    } else {
        0.0
    }
}

/// Trajectory index shown at `query_time`: `floor(f * (len - 1))`, clamped.
pub fn progress_index(result: &SimulationResult, query_time: f64) -> usize {
    let last = result.len() - 1;
    let raw = (progress(result, query_time) * last as f64).floor();
    if raw.is_nan() {
        0
    } else {
        raw.clamp(0.0, last as f64) as usize
    }
}

/// Sample displayed at `query_time`. Never out of bounds.
pub fn sample_at(result: &SimulationResult, query_time: f64) -> &Sample {
    &result.trajectory()[progress_index(result, query_time)]
}

/// Prefix of the trajectory drawn as the trail by `query_time`:
/// `floor(f * len)` samples, clamped to the trajectory.
pub fn trail_until(result: &SimulationResult, query_time: f64) -> &[Sample] {
    let len = result.len();
    let raw = (progress(result, query_time) * len as f64).floor();
    let count = if raw.is_nan() { 0 } else { raw.clamp(0.0, len as f64) as usize };
    &result.trajectory()[..count]
}
