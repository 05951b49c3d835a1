//! Data-driven physics tuning
//!
//! Every per-tick constant the simulation reads lives here so a level or a
//! debug build can override a subset from JSON without touching code.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and resource constants for one simulation context
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    /// Horizontal velocity multiplier applied every tick
    pub friction: f32,
    pub accel: f32,
    /// Vertical velocity set on jump (negative is up)
    pub jump_force: f32,
    /// Maximum anchor distance for grapple acquisition
    pub grapple_radius: f32,
    pub grapple_spring: f32,
    pub grapple_damping: f32,
    pub heat_per_grapple: f64,
    pub heat_decay: f64,
    pub sky_rate: f32,
    pub sky_period: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            accel: ACCEL,
            jump_force: JUMP_FORCE,
            grapple_radius: GRAPPLE_RADIUS,
            grapple_spring: GRAPPLE_SPRING,
            grapple_damping: GRAPPLE_DAMPING,
            heat_per_grapple: HEAT_PER_GRAPPLE,
            heat_decay: HEAT_DECAY,
            sky_rate: SKY_RATE,
            sky_period: SKY_PERIOD,
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON; missing fields keep their defaults.
    ///
    /// Falls back to the defaults entirely if the JSON is malformed.
    pub fn from_json_or_default(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Ignoring malformed tuning overrides: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning = Tuning::from_json_or_default(r#"{ "gravity": 0.25 }"#);
        assert_eq!(tuning.gravity, 0.25);
        assert_eq!(tuning.friction, FRICTION);
        assert_eq!(tuning.grapple_radius, GRAPPLE_RADIUS);
    }

    #[test]
    fn test_malformed_override_falls_back() {
        let tuning = Tuning::from_json_or_default("{ gravity: ");
        assert_eq!(tuning, Tuning::default());
    }
}
