//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (camera projection, orbit controls, renderer
//! clear color and multisampling) are consolidated here. Options serialize
//! to/from TOML so presets can be stored on disk and passed to the binary.

mod camera;
mod controls;
mod renderer;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::ControlOptions;
pub use renderer::RendererOptions;
use serde::{Deserialize, Serialize};

use crate::error::WiresphereError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controls]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Orbit control parameters.
    pub controls: ControlOptions,
    /// Renderer clear color and multisampling.
    pub renderer: RendererOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`WiresphereError::Io`] if the file cannot be read and
    /// [`WiresphereError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, WiresphereError> {
        let content =
            std::fs::read_to_string(path).map_err(WiresphereError::Io)?;
        toml::from_str(&content)
            .map_err(|e| WiresphereError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`WiresphereError::OptionsParse`] on serialization failure
    /// and [`WiresphereError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), WiresphereError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WiresphereError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(WiresphereError::Io)?;
        }
        std::fs::write(path, content).map_err(WiresphereError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::Options;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[controls]
enable_damping = false
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert!(!opts.controls.enable_damping);
        // Everything else should be default
        assert_eq!(opts.controls.damping_factor, 0.05);
        assert_eq!(opts.camera.fovy, 40.0);
        assert_eq!(opts.renderer.sample_count, 4);
    }

    #[test]
    fn save_then_load_round_trips_through_disk() {
        let dir = std::env::temp_dir()
            .join(format!("wiresphere-options-{}", std::process::id()));
        let path = dir.join("preset.toml");

        let mut opts = Options::default();
        opts.controls.damping_factor = 0.2;
        opts.renderer.sample_count = 1;
        // Saving creates the missing parent directory
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(opts, loaded);

        std::fs::remove_file(&path).unwrap();
        std::fs::remove_dir(&dir).unwrap();
    }

    #[test]
    fn camera_defaults_match_projection_contract() {
        let opts = Options::default();
        assert_eq!(opts.camera.fovy, 40.0);
        assert_eq!(opts.camera.znear, 0.0001);
        assert_eq!(opts.camera.zfar, 1000.0);
    }

    #[test]
    fn renderer_defaults_dark_gray_half_alpha() {
        let opts = Options::default();
        let [r, g, b, a] = opts.renderer.clear_color;
        assert!((r - f32::from(0x29_u8) / 255.0).abs() < 1e-6);
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(a, 0.5);
    }
}
