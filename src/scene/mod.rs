//! Scene container and mesh state.
//!
//! The scene holds exactly one wireframe sphere mesh. The mesh's rotation
//! and shader `time` uniform are both pure functions of the accumulated
//! clock milliseconds, so replaying the same tick sequence reproduces the
//! same scene state.

/// Wireframe sphere line-list geometry generation.
pub mod mesh_gen;

use glam::Mat4;

pub use mesh_gen::{wireframe_sphere, SphereGeometry};

/// Sphere radius in world units.
pub const SPHERE_RADIUS: f32 = 20.0;
/// Longitudinal subdivision count.
pub const SPHERE_WIDTH_SEGMENTS: u32 = 20;
/// Latitudinal subdivision count.
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 20;

/// Y rotation in radians per elapsed second.
const ROTATION_RATE: f64 = 0.0005;
/// Shader `time` uniform units per elapsed millisecond.
const TIME_UNIFORM_RATE: f64 = 0.000_25;

/// Mutable render state of the sphere mesh: Y rotation and the shader
/// `time` uniform, both derived from accumulated milliseconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SphereMeshState {
    rotation_y: f64,
    time: f64,
}

impl SphereMeshState {
    /// Recompute rotation and time uniform from the accumulated clock
    /// milliseconds.
    pub fn set_elapsed_ms(&mut self, elapsed_ms: f64) {
        let elapsed_seconds = elapsed_ms * 0.001;
        self.rotation_y = elapsed_seconds * ROTATION_RATE;
        self.time = elapsed_ms * TIME_UNIFORM_RATE;
    }

    /// Current Y rotation in radians (unbounded; rotation is periodic in
    /// rendering).
    #[must_use]
    pub fn rotation_y(&self) -> f64 {
        self.rotation_y
    }

    /// Current shader `time` uniform value.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Model matrix for the current rotation.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y as f32)
    }
}

/// Scene container holding exactly one mesh.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scene {
    /// The single wireframe sphere mesh.
    pub sphere: SphereMeshState,
}

impl Scene {
    /// Create a scene with the sphere at its initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Propagate the accumulated clock milliseconds into the mesh state.
    pub fn set_elapsed_ms(&mut self, elapsed_ms: f64) {
        self.sphere.set_elapsed_ms(elapsed_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::{Scene, SphereMeshState};

    #[test]
    fn one_second_tick_derives_all_values() {
        let mut scene = Scene::new();
        scene.set_elapsed_ms(1000.0);
        assert_eq!(scene.sphere.time(), 0.25);
        assert_eq!(scene.sphere.rotation_y(), 0.0005);
    }

    #[test]
    fn rotation_is_function_of_total_milliseconds() {
        // Replaying the same total through different tick sequences lands
        // on identical state.
        let mut many_small = SphereMeshState::default();
        let mut total = 0.0;
        for _ in 0..60 {
            total += 16.5;
            many_small.set_elapsed_ms(total);
        }

        let mut one_big = SphereMeshState::default();
        one_big.set_elapsed_ms(60.0 * 16.5);

        assert_eq!(many_small.rotation_y(), one_big.rotation_y());
        assert_eq!(many_small.time(), one_big.time());
    }

    #[test]
    fn time_uniform_scales_linearly() {
        let mut state = SphereMeshState::default();
        state.set_elapsed_ms(4000.0);
        assert!((state.time() - 1.0).abs() < 1e-12);
        state.set_elapsed_ms(8000.0);
        assert!((state.time() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn model_matrix_is_pure_y_rotation() {
        let mut state = SphereMeshState::default();
        state.set_elapsed_ms(1_000_000.0);
        let m = state.model_matrix();
        let rotated = m.transform_point3(glam::Vec3::new(1.0, 2.0, 0.0));
        // Y component untouched by a Y rotation, length preserved.
        assert!((rotated.y - 2.0).abs() < 1e-6);
        assert!((rotated.length() - (5.0_f32).sqrt()).abs() < 1e-5);
    }
}
