use glam::{Mat4, Vec3};

/// Perspective camera defined by eye position, target, and projection
/// parameters.
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Update the aspect ratio from new viewport dimensions. Zero-sized
    /// dimensions are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
        self.aspect = camera.aspect;
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::{Camera, CameraUniform};

    fn test_camera() -> Camera {
        Camera {
            eye: Vec3::new(0.0, 0.0, 100.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy: 40.0,
            znear: 0.0001,
            zfar: 1000.0,
        }
    }

    #[test]
    fn resize_sets_aspect_from_dimensions() {
        let mut camera = test_camera();
        camera.resize(800, 600);
        assert_eq!(camera.aspect, 800.0 / 600.0);

        // Numerically identical aspect after a proportional resize
        camera.resize(400, 300);
        assert_eq!(camera.aspect, 400.0 / 300.0);
        assert!((camera.aspect - 1.333_333_3).abs() < 1e-6);
    }

    #[test]
    fn resize_ignores_zero_dimensions() {
        let mut camera = test_camera();
        camera.resize(800, 600);
        camera.resize(0, 600);
        camera.resize(800, 0);
        assert_eq!(camera.aspect, 800.0 / 600.0);
    }

    #[test]
    fn uniform_tracks_camera_state() {
        let mut camera = test_camera();
        camera.resize(1920, 1080);
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);
        assert_eq!(uniform.position, [0.0, 0.0, 100.0]);
        assert_eq!(uniform.aspect, 1920.0 / 1080.0);
        assert!(uniform
            .view_proj
            .iter()
            .flatten()
            .all(|v| v.is_finite()));
    }
}
