use super::params::ParameterSet;
use crate::dynamics::state::STANDARD_GRAVITY;

// ---------------------------------------------------------------------------
// Sample scenarios
// ---------------------------------------------------------------------------

/// A sample scenario: the free-text prompt offered to users and the
/// parameters an interpreter is expected to extract from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: &'static str,
    pub title: &'static str,
    pub prompt: &'static str,
    pub parameters: ParameterSet,
}

/// Ball kicked from the ground at 22 m/s, 45 degrees.
pub fn oblique() -> Category {
    Category {
        id: "oblique",
        title: "Oblique Motion",
        prompt: "Kick a ball from the ground at 22 m/s at a 45 degree angle.",
        parameters: ParameterSet::new(22.0, 45.0, STANDARD_GRAVITY),
    }
}

/// Cannonball fired level from a 30 m tower at 15 m/s.
pub fn horizontal() -> Category {
    Category {
        id: "horizontal",
        title: "Horizontal Fire",
        prompt: "A cannon fires a ball straight forward from a 30m tower at 15 m/s.",
        parameters: ParameterSet::new(15.0, 0.0, STANDARD_GRAVITY).with_initial_height(30.0),
    }
}

/// Object rolling off a 60 m cliff at 10 m/s.
pub fn cliff() -> Category {
    Category {
        id: "cliff",
        title: "Cliff Gravity",
        prompt: "An object rolls off a 60m cliff at a speed of 10 m/s.",
        parameters: ParameterSet::new(10.0, 0.0, STANDARD_GRAVITY).with_initial_height(60.0),
    }
}

pub fn all() -> Vec<Category> {
    vec![oblique(), horizontal(), cliff()]
}

pub fn by_id(id: &str) -> Option<Category> {
    all().into_iter().find(|c| c.id.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid_input() {
        for category in all() {
            assert!(category.parameters.validate().is_ok(), "{} invalid", category.id);
            assert!(!category.prompt.is_empty());
        }
    }

    #[test]
    fn level_fire_presets_start_elevated() {
        assert_eq!(horizontal().parameters.angle, 0.0);
        assert_eq!(cliff().parameters.initial_height, 60.0);
        assert_eq!(by_id("HORIZONTAL").map(|c| c.title), Some("Horizontal Fire"));
        assert!(by_id("vertical").is_none());
    }
}
