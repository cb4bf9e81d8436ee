use nalgebra::Vector2;

use crate::dynamics::state::SimConfig;

/// Damping coefficient in effect for a run: the configured value when air
/// resistance is on, zero otherwise.
pub fn drag_coefficient(air_resistance: bool, config: &SimConfig) -> f64 {
    if air_resistance {
        config.drag_coefficient
    } else {
        0.0
    }
}

/// Linear-in-velocity drag deceleration, `-(k / m) * v`.
///
/// Applied per component. This is a damping term, not an aerodynamic model.
pub fn linear_drag(vel: &Vector2<f64>, k: f64, mass: f64) -> Vector2<f64> {
    -(k / mass) * vel
}
