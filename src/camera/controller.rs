use glam::{EulerRot, Quat, Vec2, Vec3};
use wgpu::util::DeviceExt;

use crate::camera::core::{Camera, CameraUniform};
use crate::gpu::render_context::RenderContext;
use crate::options::{CameraOptions, ControlOptions};

/// Velocities below this are snapped to zero to end the damping tail.
const VELOCITY_EPSILON: f32 = 1e-6;

/// Keep the pitch just short of the poles to avoid up-vector flips.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Orbit navigation state with inertial damping.
///
/// Pointer input feeds [`rotate`](Self::rotate), [`pan`](Self::pan), and
/// [`zoom`](Self::zoom); [`update`](Self::update) advances the damping by
/// one step and is called once per frame.
pub struct OrbitState {
    yaw: f32,
    pitch: f32,
    distance: f32,
    focus_point: Vec3,

    yaw_velocity: f32,
    pitch_velocity: f32,

    /// Whether rotation input is smoothed with inertial damping.
    pub enable_damping: bool,
    damping_factor: f32,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,

    /// Whether the primary mouse button is currently held.
    pub mouse_pressed: bool,
    /// Whether the shift modifier is currently held (drag pans instead of
    /// rotating).
    pub shift_pressed: bool,
}

impl OrbitState {
    /// Create orbit state at the given distance from the origin, facing
    /// down the +Z axis.
    #[must_use]
    pub fn new(options: &ControlOptions, distance: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance,
            focus_point: Vec3::ZERO,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            enable_damping: options.enable_damping,
            damping_factor: options.damping_factor,
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            mouse_pressed: false,
            shift_pressed: false,
        }
    }

    /// Re-apply control options (damping flag/factor and speeds).
    pub fn apply_options(&mut self, options: &ControlOptions) {
        self.enable_damping = options.enable_damping;
        self.damping_factor = options.damping_factor;
        self.rotate_speed = options.rotate_speed;
        self.pan_speed = options.pan_speed;
        self.zoom_speed = options.zoom_speed;
    }

    fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Camera eye position for the current orbit state.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.focus_point + self.orientation() * Vec3::Z * self.distance
    }

    /// Current look-at target.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.focus_point
    }

    /// Camera up vector for the current orbit state.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation() * Vec3::Y
    }

    /// Current yaw angle in radians.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch angle in radians.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current orbit distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    fn apply_rotation(&mut self, dyaw: f32, dpitch: f32) {
        self.yaw += dyaw;
        self.pitch = (self.pitch + dpitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Feed a pointer drag delta (pixels) into the orbit rotation.
    ///
    /// With damping enabled the input becomes angular velocity consumed by
    /// [`update`](Self::update); otherwise it is applied immediately. The
    /// velocity contribution is scaled so the total rotation over the
    /// damping tail equals the undamped rotation for the same input.
    pub fn rotate(&mut self, delta: Vec2) {
        let dyaw = -delta.x * self.rotate_speed;
        let dpitch = -delta.y * self.rotate_speed;
        if self.enable_damping {
            self.yaw_velocity += dyaw * self.damping_factor;
            self.pitch_velocity += dpitch * self.damping_factor;
        } else {
            self.apply_rotation(dyaw, dpitch);
        }
    }

    /// Advance the damping/inertia by one frame step.
    pub fn update(&mut self) {
        if !self.enable_damping {
            return;
        }
        self.apply_rotation(self.yaw_velocity, self.pitch_velocity);
        let retain = 1.0 - self.damping_factor;
        self.yaw_velocity *= retain;
        self.pitch_velocity *= retain;
        if self.yaw_velocity.abs() < VELOCITY_EPSILON {
            self.yaw_velocity = 0.0;
        }
        if self.pitch_velocity.abs() < VELOCITY_EPSILON {
            self.pitch_velocity = 0.0;
        }
    }

    /// Translate the focus point in the camera plane.
    pub fn pan(&mut self, delta: Vec2) {
        let orientation = self.orientation();
        let right = orientation * Vec3::X;
        let up = orientation * Vec3::Y;
        self.focus_point += right * (-delta.x * self.pan_speed)
            + up * (delta.y * self.pan_speed);
    }

    /// Zoom by scaling the orbit distance (positive delta zooms in).
    pub fn zoom(&mut self, delta: f32) {
        self.distance *= 1.0 - delta * self.zoom_speed;
        self.distance = self.distance.clamp(1.0, 1000.0);
    }

    /// `true` while damped rotation is still in flight.
    #[must_use]
    pub fn is_coasting(&self) -> bool {
        self.yaw_velocity != 0.0 || self.pitch_velocity != 0.0
    }
}

/// Orbital camera controller owning the camera, its GPU uniform buffer,
/// and the orbit navigation state.
pub struct CameraController {
    /// Orbit navigation state (rotation, pan, zoom, damping).
    pub orbit: OrbitState,
    /// The perspective camera driven by the orbit state.
    pub camera: Camera,
    /// CPU copy of the camera uniform.
    pub uniform: CameraUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout for the camera uniform (group 0).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group for the camera uniform.
    pub bind_group: wgpu::BindGroup,
}

impl CameraController {
    /// Initial orbit distance (camera starts at z = 100).
    pub const INITIAL_DISTANCE: f32 = 100.0;

    /// Create the controller and its GPU resources for the given context.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_options: &CameraOptions,
        control_options: &ControlOptions,
    ) -> Self {
        let orbit = OrbitState::new(control_options, Self::INITIAL_DISTANCE);

        let camera = Camera {
            eye: orbit.eye(),
            target: orbit.target(),
            up: orbit.up(),
            aspect: context.config.width as f32
                / context.config.height as f32,
            fovy: camera_options.fovy,
            znear: camera_options.znear,
            zfar: camera_options.zfar,
        };

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group = context.device.create_bind_group(
            &wgpu::BindGroupDescriptor {
                layout: &layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
                label: Some("Camera Bind Group"),
            },
        );

        Self {
            orbit,
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    fn sync_camera(&mut self) {
        self.camera.eye = self.orbit.eye();
        self.camera.target = self.orbit.target();
        self.camera.up = self.orbit.up();
    }

    /// Advance orbit damping by one frame step and sync the camera.
    pub fn update(&mut self) {
        self.orbit.update();
        self.sync_camera();
    }

    /// Feed a pointer drag delta into the orbit rotation.
    pub fn rotate(&mut self, delta: Vec2) {
        self.orbit.rotate(delta);
        self.sync_camera();
    }

    /// Translate the focus point in the camera plane.
    pub fn pan(&mut self, delta: Vec2) {
        self.orbit.pan(delta);
        self.sync_camera();
    }

    /// Zoom by scaling the orbit distance.
    pub fn zoom(&mut self, delta: f32) {
        self.orbit.zoom(delta);
        self.sync_camera();
    }

    /// Update the camera aspect ratio for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// Re-apply camera and control options.
    pub fn apply_options(
        &mut self,
        camera_options: &CameraOptions,
        control_options: &ControlOptions,
    ) {
        self.camera.fovy = camera_options.fovy;
        self.camera.znear = camera_options.znear;
        self.camera.zfar = camera_options.zfar;
        self.orbit.apply_options(control_options);
    }

    /// Upload the current camera state to the GPU uniform buffer.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update_view_proj(&self.camera);
        queue.write_buffer(
            &self.buffer,
            0,
            bytemuck::cast_slice(&[self.uniform]),
        );
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::{OrbitState, PITCH_LIMIT};
    use crate::options::ControlOptions;

    fn orbit(enable_damping: bool) -> OrbitState {
        let options = ControlOptions {
            enable_damping,
            ..ControlOptions::default()
        };
        OrbitState::new(&options, 100.0)
    }

    #[test]
    fn starts_on_positive_z_axis() {
        let state = orbit(true);
        assert!((state.eye() - Vec3::new(0.0, 0.0, 100.0)).length() < 1e-4);
        assert_eq!(state.target(), Vec3::ZERO);
    }

    #[test]
    fn undamped_rotation_applies_immediately() {
        let mut state = orbit(false);
        state.rotate(Vec2::new(10.0, 0.0));
        assert!(state.yaw() != 0.0);
        assert!(!state.is_coasting());
    }

    #[test]
    fn damped_rotation_needs_update_steps() {
        let mut state = orbit(true);
        state.rotate(Vec2::new(10.0, 0.0));
        // Input only produced velocity; nothing applied yet.
        assert_eq!(state.yaw(), 0.0);
        assert!(state.is_coasting());

        state.update();
        let after_one = state.yaw();
        assert!(after_one != 0.0);

        // Velocity decays toward zero across steps.
        for _ in 0..800 {
            state.update();
        }
        assert!(!state.is_coasting());
    }

    #[test]
    fn damped_total_matches_undamped_rotation() {
        let mut damped = orbit(true);
        let mut direct = orbit(false);
        let drag = Vec2::new(25.0, 0.0);
        damped.rotate(drag);
        direct.rotate(drag);
        for _ in 0..2000 {
            damped.update();
        }
        assert!((damped.yaw() - direct.yaw()).abs() < 1e-3);
    }

    #[test]
    fn pitch_clamped_short_of_poles() {
        let mut state = orbit(false);
        state.rotate(Vec2::new(0.0, 1e6));
        assert!(state.pitch().abs() <= PITCH_LIMIT);
    }

    #[test]
    fn zoom_scales_and_clamps_distance() {
        let mut state = orbit(false);
        state.zoom(1.0);
        assert!(state.distance() < 100.0);
        for _ in 0..200 {
            state.zoom(1.0);
        }
        assert!(state.distance() >= 1.0);
    }

    #[test]
    fn pan_moves_focus_point() {
        let mut state = orbit(false);
        state.pan(Vec2::new(10.0, 0.0));
        assert!(state.target() != Vec3::ZERO);
    }
}
