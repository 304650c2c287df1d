//! The sphere rendering engine.

use glam::Vec2;

use crate::camera::controller::CameraController;
use crate::error::WiresphereError;
use crate::gpu::render_context::RenderContext;
use crate::input::{InputEvent, MouseButton};
use crate::options::Options;
use crate::renderer::wire_sphere::WireSphereRenderer;
use crate::scene::Scene;
use crate::util::clock::SceneClock;

/// The core rendering engine for the animated wireframe sphere.
///
/// Owns exactly one render context, camera, scene, mesh renderer, and
/// clock, all created during initialization and living until the engine is
/// dropped (which releases the surface and device).
///
/// # Frame loop
///
/// Each frame, call [`update`](Self::update) to advance the clock, mesh
/// animation, and control damping, then [`render`](Self::render) to draw
/// and present. Call [`resize`](Self::resize) when the window size
/// changes. Input is forwarded via [`handle_input`](Self::handle_input).
pub struct SphereRenderEngine {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    /// Orbital camera controller with damped controls.
    pub camera_controller: CameraController,
    /// Scene holding the single sphere mesh.
    scene: Scene,
    /// Wireframe sphere pipeline and GPU buffers.
    renderer: WireSphereRenderer,
    /// Wall-clock accumulator driving the animation.
    clock: SceneClock,
    /// Runtime camera, control, and renderer options.
    options: Options,
    /// Last observed cursor position, if any.
    last_cursor_pos: Option<(f32, f32)>,
}

impl SphereRenderEngine {
    /// Engine with default options.
    ///
    /// # Errors
    ///
    /// Returns [`WiresphereError`] if GPU initialization fails (no
    /// adapter, device request rejected, or unsupported surface).
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        scale_factor: Option<f64>,
    ) -> Result<Self, WiresphereError> {
        Self::new_with_options(window, size, scale_factor, Options::default())
            .await
    }

    /// Engine with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`WiresphereError`] if GPU initialization fails.
    pub async fn new_with_options(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        scale_factor: Option<f64>,
        options: Options,
    ) -> Result<Self, WiresphereError> {
        let mut context = RenderContext::new(window, size).await?;
        context.set_pixel_ratio(scale_factor);
        Ok(Self::init_with_context(context, options))
    }

    fn init_with_context(context: RenderContext, options: Options) -> Self {
        let camera_controller = CameraController::new(
            &context,
            &options.camera,
            &options.controls,
        );
        let renderer = WireSphereRenderer::new(
            &context,
            &camera_controller.layout,
            &options.renderer,
        );
        log::info!(
            "engine initialized: {}x{} (pixel ratio {})",
            context.config.width,
            context.config.height,
            context.pixel_ratio
        );
        Self {
            context,
            camera_controller,
            scene: Scene::new(),
            renderer,
            clock: SceneClock::new(),
            options,
            last_cursor_pos: None,
        }
    }

    /// Advance the animation by the wall-clock delta since the previous
    /// frame: accumulate the clock, derive the mesh rotation and time
    /// uniform, and step the control damping.
    pub fn update(&mut self) {
        let _ = self.clock.tick();
        self.advance_state();
    }

    /// Deterministic variant of [`update`](Self::update): advance by an
    /// explicit delta in milliseconds instead of the wall clock.
    pub fn advance(&mut self, delta_ms: f64) {
        self.clock.advance(delta_ms);
        self.advance_state();
    }

    fn advance_state(&mut self) {
        self.scene.set_elapsed_ms(self.clock.elapsed_ms());
        self.camera_controller.update();
    }

    /// Execute one frame: upload uniforms, draw the sphere, and present.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain frame cannot be
    /// acquired; `Lost`/`Outdated` are recoverable by calling
    /// [`resize`](Self::resize) with the current window size.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.camera_controller.update_gpu(&self.context.queue);
        self.renderer.update(&self.context.queue, &self.scene.sphere);

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        self.renderer.encode(
            &mut encoder,
            &view,
            &self.camera_controller.bind_group,
        );
        self.context.submit(encoder);

        frame.present();
        Ok(())
    }

    /// Resize the surface, camera projection, and render targets to the
    /// new window size. Zero-sized dimensions are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.context.resize(width, height);
            self.camera_controller.resize(width, height);
            self.renderer.resize(&self.context);
        }
    }

    /// Process a platform-agnostic input event.
    ///
    /// Left-drag rotates the orbit (with damping), shift-drag pans the
    /// focus point, and scrolling zooms. Drag deltas arrive in physical
    /// pixels and are normalized by the pixel ratio so sensitivity matches
    /// across display densities.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let (dx, dy) = self.last_cursor_pos.map_or(
                    (0.0, 0.0),
                    |(lx, ly)| (x - lx, y - ly),
                );
                self.last_cursor_pos = Some((x, y));
                if self.camera_controller.orbit.mouse_pressed {
                    let delta = normalize_cursor_delta(
                        Vec2::new(dx, dy),
                        self.context.pixel_ratio,
                    );
                    if self.camera_controller.orbit.shift_pressed {
                        self.camera_controller.pan(delta);
                    } else {
                        self.camera_controller.rotate(delta);
                    }
                }
            }
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.camera_controller.orbit.mouse_pressed = pressed;
                }
            }
            InputEvent::Scroll { delta } => {
                self.camera_controller.zoom(delta);
            }
            InputEvent::ModifiersChanged { shift } => {
                self.camera_controller.orbit.shift_pressed = shift;
            }
        }
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options and re-apply them to the camera, controls, and
    /// renderer clear color. The MSAA sample count is fixed at
    /// initialization.
    pub fn set_options(&mut self, options: Options) {
        self.camera_controller
            .apply_options(&options.camera, &options.controls);
        self.renderer.apply_options(&options.renderer);
        self.options = options;
    }

    /// Scene state (the sphere's rotation and time uniform).
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Total accumulated animation time in seconds.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        self.clock.elapsed_seconds()
    }
}

/// Scale a pointer drag delta from physical pixels to DPI-independent
/// units.
fn normalize_cursor_delta(delta: Vec2, pixel_ratio: f64) -> Vec2 {
    delta / pixel_ratio as f32
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::normalize_cursor_delta;

    #[test]
    fn drag_deltas_scale_down_on_high_dpi() {
        let delta = normalize_cursor_delta(Vec2::new(10.0, -4.0), 2.0);
        assert_eq!(delta, Vec2::new(5.0, -2.0));
    }

    #[test]
    fn drag_deltas_unchanged_at_default_pixel_ratio() {
        let delta = normalize_cursor_delta(Vec2::new(10.0, -4.0), 1.0);
        assert_eq!(delta, Vec2::new(10.0, -4.0));
    }
}
