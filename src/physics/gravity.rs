use nalgebra::Vector2;

/// Uniform gravity acceleration for a flat-ground frame (y up).
pub fn gravity_accel(gravity: f64) -> Vector2<f64> {
    Vector2::new(0.0, -gravity)
}

// ---------------------------------------------------------------------------
// Surface gravity presets
// ---------------------------------------------------------------------------

/// A named gravity field a scenario can be run in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub name: &'static str,
    pub gravity: f64,           // m/s^2
    pub description: &'static str,
}

/// Presets whose `gravity` lies within this distance match a custom value.
pub const MATCH_TOLERANCE: f64 = 0.1;

pub const EARTH: Environment = Environment {
    name: "Earth",
    gravity: 9.81,
    description: "Standard terrestrial gravity. Parabolic curves are well-defined by the constant 9.81 m/s^2 pull.",
};

pub const MOON: Environment = Environment {
    name: "Moon",
    gravity: 1.62,
    description: "Low gravity (about 1/6 of Earth). Projectiles travel much higher and further.",
};

pub const MARS: Environment = Environment {
    name: "Mars",
    gravity: 3.71,
    description: "Medium gravity (about 38% of Earth).",
};

pub const JUPITER: Environment = Environment {
    name: "Jupiter",
    gravity: 24.79,
    description: "Extreme gravity. Projectiles are pulled down fast into shallow, short-range arcs.",
};

/// Environments used by comparison mode, in display order.
pub const ENVIRONMENTS: [Environment; 4] = [EARTH, MOON, MARS, JUPITER];

impl Environment {
    /// Preset whose gravity is within [`MATCH_TOLERANCE`] of `gravity`.
    pub fn matching(gravity: f64) -> Option<&'static Environment> {
        ENVIRONMENTS
            .iter()
            .find(|env| (env.gravity - gravity).abs() < MATCH_TOLERANCE)
    }

    pub fn by_name(name: &str) -> Option<&'static Environment> {
        ENVIRONMENTS
            .iter()
            .find(|env| env.name.eq_ignore_ascii_case(name))
    }

    /// Display label for an arbitrary gravity value.
    pub fn label_for(gravity: f64) -> &'static str {
        Self::matching(gravity).map_or("Custom", |env| env.name)
    }
}
