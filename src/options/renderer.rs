use serde::{Deserialize, Serialize};

/// Renderer clear color and multisampling options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RendererOptions {
    /// Clear color as linear RGBA components in [0, 1].
    pub clear_color: [f32; 4],
    /// MSAA sample count (1 disables multisampling).
    pub sample_count: u32,
}

impl RendererOptions {
    /// The clear color as a [`wgpu::Color`].
    #[must_use]
    pub fn wgpu_clear_color(&self) -> wgpu::Color {
        wgpu::Color {
            r: f64::from(self.clear_color[0]),
            g: f64::from(self.clear_color[1]),
            b: f64::from(self.clear_color[2]),
            a: f64::from(self.clear_color[3]),
        }
    }
}

impl Default for RendererOptions {
    fn default() -> Self {
        // 0x292929 at 50% opacity
        let gray = f32::from(0x29_u8) / 255.0;
        Self {
            clear_color: [gray, gray, gray, 0.5],
            sample_count: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RendererOptions;

    #[test]
    fn clear_color_converts_to_wgpu() {
        let opts = RendererOptions::default();
        let color = opts.wgpu_clear_color();
        assert!((color.r - f64::from(0x29) / 255.0).abs() < 1e-6);
        assert_eq!(color.a, 0.5);
    }
}
