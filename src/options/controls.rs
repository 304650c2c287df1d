use serde::{Deserialize, Serialize};

/// Orbit control parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ControlOptions {
    /// Whether rotation input is smoothed with inertial damping.
    pub enable_damping: bool,
    /// Fraction of remaining velocity consumed per frame step.
    pub damping_factor: f32,
    /// Rotation sensitivity in radians per pixel of drag.
    pub rotate_speed: f32,
    /// Pan sensitivity in world units per pixel of drag.
    pub pan_speed: f32,
    /// Zoom sensitivity per scroll step.
    pub zoom_speed: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.05,
            rotate_speed: 0.005,
            pan_speed: 0.1,
            zoom_speed: 0.1,
        }
    }
}
