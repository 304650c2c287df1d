//! GPU renderers for the scene's geometry.

/// Wireframe sphere line-list renderer.
pub mod wire_sphere;

pub use wire_sphere::WireSphereRenderer;
