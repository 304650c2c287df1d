// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// GPU / graphics allowances: casts are intentional and safe
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
// Float comparison: graphics math frequently compares against 0.0, 1.0, etc.
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::too_many_lines)]
// Tests are allowed to unwrap
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Animated 3D wireframe sphere viewer built on wgpu.
//!
//! Wiresphere opens a window, draws a single time-animated wireframe
//! sphere, and lets the user orbit the camera around it with damped
//! mouse controls.
//!
//! # Key entry points
//!
//! - [`viewer::Viewer`] - standalone window shell (requires the `viewer`
//!   feature)
//! - [`engine::SphereRenderEngine`] - the rendering engine, embeddable via
//!   any [`wgpu::SurfaceTarget`]
//! - [`options::Options`] - runtime configuration (camera, controls,
//!   renderer)
//!
//! # Architecture
//!
//! The engine owns exactly one render context, camera, scene, and mesh,
//! all created during initialization and dropped together when the event
//! loop exits. Each frame the window shell advances the scene clock,
//! which drives the mesh rotation and the shader `time` uniform, steps
//! the orbit-control damping, and issues one render of the scene.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::SphereRenderEngine;
pub use error::WiresphereError;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
