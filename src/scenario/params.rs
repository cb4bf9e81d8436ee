use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

// ---------------------------------------------------------------------------
// Launch scenario
// ---------------------------------------------------------------------------

/// Physical description of one launch. Treated as a value: the integrator
/// reads it and never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub velocity: f64,             // m/s, initial speed
    pub angle: f64,                // deg above horizontal
    pub gravity: f64,              // m/s^2, magnitude
    #[serde(default = "default_mass")]
    pub mass: f64,                 // kg, only matters with drag
    #[serde(default)]
    pub initial_height: f64,       // m above ground
    #[serde(default)]
    pub air_resistance: bool,
}

fn default_mass() -> f64 {
    1.0
}

impl ParameterSet {
    /// Scenario with unit mass, launched from the ground, without drag.
    pub fn new(velocity: f64, angle: f64, gravity: f64) -> Self {
        Self {
            velocity,
            angle,
            gravity,
            mass: default_mass(),
            initial_height: 0.0,
            air_resistance: false,
        }
    }

    pub fn with_mass(mut self, v: f64) -> Self { self.mass = v; self }
    pub fn with_initial_height(mut self, v: f64) -> Self { self.initial_height = v; self }
    pub fn with_air_resistance(mut self, v: bool) -> Self { self.air_resistance = v; self }
    pub fn with_gravity(mut self, v: f64) -> Self { self.gravity = v; self }

    /// Reject values the integrator is not defined for.
    ///
    /// Angles outside [0, 90] are physically meaningful and pass.
    pub fn validate(&self) -> Result<(), ParameterError> {
        let fields = [
            ("velocity", self.velocity),
            ("angle", self.angle),
            ("gravity", self.gravity),
            ("mass", self.mass),
            ("initial_height", self.initial_height),
        ];
        if let Some((field, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ParameterError::new(*field, *value, "must be finite"));
        }

        if self.velocity < 0.0 {
            return Err(ParameterError::new("velocity", self.velocity, "must be non-negative"));
        }
        if self.gravity <= 0.0 {
            return Err(ParameterError::new("gravity", self.gravity, "must be positive"));
        }
        if self.mass <= 0.0 {
            return Err(ParameterError::new("mass", self.mass, "must be positive"));
        }
        if self.initial_height < 0.0 {
            return Err(ParameterError::new(
                "initial_height",
                self.initial_height,
                "must be non-negative",
            ));
        }
        Ok(())
    }

    /// Launch angle in radians.
    pub fn angle_rad(&self) -> f64 {
        self.angle.to_radians()
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        ParameterSetBuilder::new().build()
    }
}

// ---------------------------------------------------------------------------
// Parameter builder
// ---------------------------------------------------------------------------

/// Stepwise construction starting from the interactive defaults
/// (25 m/s at 45 degrees, Earth gravity, 1.5 kg, ground level, no drag).
pub struct ParameterSetBuilder {
    velocity: f64,
    angle: f64,
    gravity: f64,
    mass: f64,
    initial_height: f64,
    air_resistance: bool,
}

impl ParameterSetBuilder {
    pub fn new() -> Self {
        Self {
            velocity: 25.0,
            angle: 45.0,
            gravity: crate::dynamics::state::STANDARD_GRAVITY,
            mass: 1.5,
            initial_height: 0.0,
            air_resistance: false,
        }
    }

    pub fn velocity(mut self, v: f64) -> Self { self.velocity = v; self }
    pub fn angle(mut self, v: f64) -> Self { self.angle = v; self }
    pub fn gravity(mut self, v: f64) -> Self { self.gravity = v; self }
    pub fn mass(mut self, v: f64) -> Self { self.mass = v; self }
    pub fn initial_height(mut self, v: f64) -> Self { self.initial_height = v; self }
    pub fn air_resistance(mut self, v: bool) -> Self { self.air_resistance = v; self }

    pub fn build(self) -> ParameterSet {
        ParameterSet {
            velocity: self.velocity,
            angle: self.angle,
            gravity: self.gravity,
            mass: self.mass,
            initial_height: self.initial_height,
            air_resistance: self.air_resistance,
        }
    }

    /// Build and validate in one step.
    pub fn try_build(self) -> Result<ParameterSet, ParameterError> {
        let params = self.build();
        params.validate()?;
        Ok(params)
    }
}

impl Default for ParameterSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_boundary_defaults() {
        let p = ParameterSet::new(10.0, 30.0, 9.81);
        assert_eq!(p.mass, 1.0);
        assert_eq!(p.initial_height, 0.0);
        assert!(!p.air_resistance);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn builder_defaults_match_interactive_start() {
        let p = ParameterSet::default();
        assert_eq!(p.velocity, 25.0);
        assert_eq!(p.angle, 45.0);
        assert_eq!(p.gravity, 9.81);
        assert_eq!(p.mass, 1.5);
    }

    #[test]
    fn rejects_out_of_domain_values() {
        let cases = [
            (ParameterSet::new(-1.0, 45.0, 9.81), "velocity"),
            (ParameterSet::new(10.0, 45.0, 0.0), "gravity"),
            (ParameterSet::new(10.0, 45.0, -9.81), "gravity"),
            (ParameterSet::new(10.0, 45.0, 9.81).with_mass(0.0), "mass"),
            (ParameterSet::new(10.0, 45.0, 9.81).with_initial_height(-2.0), "initial_height"),
            (ParameterSet::new(10.0, f64::NAN, 9.81), "angle"),
        ];
        for (params, field) in cases {
            let err = params.validate().expect_err("should be rejected");
            assert_eq!(err.field, field);
        }
    }

    #[test]
    fn steep_and_negative_angles_are_accepted() {
        assert!(ParameterSet::new(10.0, 120.0, 9.81).validate().is_ok());
        assert!(ParameterSet::new(10.0, -15.0, 9.81).validate().is_ok());
    }

    #[test]
    fn try_build_surfaces_validation() {
        let err = ParameterSetBuilder::new().mass(-3.0).try_build().unwrap_err();
        assert_eq!(err.field, "mass");
        assert!(err.to_string().contains("mass"));
    }

    #[test]
    fn deserializes_with_defaults() {
        let p: ParameterSet =
            toml::from_str("velocity = 12.0\nangle = 30.0\ngravity = 3.71\n").unwrap();
        assert_eq!(p, ParameterSet::new(12.0, 30.0, 3.71));
    }
}
