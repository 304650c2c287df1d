//! Camera system for viewing the scene.
//!
//! Provides a perspective camera and an orbital controller with damped
//! rotation, panning, and zoom.

/// Orbital camera controller managing input, damping, and GPU resources.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;

pub use controller::{CameraController, OrbitState};
pub use core::{Camera, CameraUniform};
