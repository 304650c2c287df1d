//! Core GPU resource management.

/// wgpu device, queue, surface, and configuration ownership.
pub mod render_context;

pub use render_context::{RenderContext, RenderContextError};
