pub mod state;

use crate::physics::{drag, gravity};
use crate::scenario::ParameterSet;
use state::{Deriv, SimConfig, State};

// ---------------------------------------------------------------------------
// Equations of motion (2D point mass)
// ---------------------------------------------------------------------------

/// Compute state derivatives for a given state and launch scenario.
///
/// Forces modeled:
///   1. Gravity — uniform, straight down
///   2. Drag    — linear in each velocity component, only with air resistance
///
/// Mass only enters through the drag term.
pub fn derivatives(state: &State, params: &ParameterSet, config: &SimConfig) -> Deriv {
    let a_gravity = gravity::gravity_accel(params.gravity);

    let k = drag::drag_coefficient(params.air_resistance, config);
    let a_drag = drag::linear_drag(&state.vel, k, params.mass);

    Deriv {
        dpos: state.vel,
        dvel: a_gravity + a_drag,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    fn moving(vx: f64, vy: f64) -> State {
        State {
            time: 0.0,
            pos: Vector2::new(0.0, 10.0),
            vel: Vector2::new(vx, vy),
        }
    }

    #[test]
    fn vacuum_is_pure_gravity() {
        let params = ParameterSet::new(20.0, 45.0, 9.81);
        let d = derivatives(&moving(12.0, 5.0), &params, &SimConfig::default());
        assert_eq!(d.dpos, Vector2::new(12.0, 5.0));
        assert_eq!(d.dvel.x, 0.0);
        assert_eq!(d.dvel.y, -9.81);
    }

    #[test]
    fn drag_matches_component_form() {
        let params = ParameterSet::new(20.0, 45.0, 9.81)
            .with_mass(2.0)
            .with_air_resistance(true);
        let (vx, vy) = (12.0, 5.0);
        let d = derivatives(&moving(vx, vy), &params, &SimConfig::default());
        let k_over_m = 0.08 / 2.0;
        assert!((d.dvel.x - (-k_over_m * vx)).abs() < 1e-12);
        assert!((d.dvel.y - (-9.81 - k_over_m * vy)).abs() < 1e-12);
    }

    #[test]
    fn mass_is_irrelevant_without_drag() {
        let light = ParameterSet::new(20.0, 45.0, 9.81).with_mass(0.1);
        let heavy = ParameterSet::new(20.0, 45.0, 9.81).with_mass(100.0);
        let s = moving(3.0, -2.0);
        let config = SimConfig::default();
        assert_eq!(
            derivatives(&s, &light, &config).dvel,
            derivatives(&s, &heavy, &config).dvel
        );
    }
}
