use std::f32::consts::PI;

use glam::Vec3;

/// CPU-side wireframe geometry: positions plus line-list index pairs.
pub struct SphereGeometry {
    /// Vertex positions on the sphere surface.
    pub positions: Vec<Vec3>,
    /// Line-list indices: every consecutive pair is one edge.
    pub indices: Vec<u32>,
}

impl SphereGeometry {
    /// Number of line segments in the geometry.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.indices.len() / 2
    }
}

/// Generate a UV sphere as wireframe line-list geometry.
///
/// The grid has `(width_segments + 1) * (height_segments + 1)` vertices.
/// Edges cover every quad's horizontal, vertical, and diagonal edge, i.e.
/// all edges of the triangulated sphere surface.
#[must_use]
pub fn wireframe_sphere(
    radius: f32,
    width_segments: u32,
    height_segments: u32,
) -> SphereGeometry {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let cols = w + 1;

    let mut positions =
        Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    for row in 0..=h {
        // phi sweeps pole to pole
        let phi = PI * row as f32 / h as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for col in 0..=w {
            let theta = 2.0 * PI * col as f32 / w as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            positions.push(Vec3::new(
                radius * sin_phi * cos_theta,
                radius * cos_phi,
                radius * sin_phi * sin_theta,
            ));
        }
    }

    let mut indices = Vec::new();
    let vertex = |row: u32, col: u32| row * cols + col;

    // Horizontal ring edges
    for row in 0..=h {
        for col in 0..w {
            indices.push(vertex(row, col));
            indices.push(vertex(row, col + 1));
        }
    }
    // Vertical meridian edges
    for row in 0..h {
        for col in 0..=w {
            indices.push(vertex(row, col));
            indices.push(vertex(row + 1, col));
        }
    }
    // Diagonal edges from the triangulation
    for row in 0..h {
        for col in 0..w {
            indices.push(vertex(row, col));
            indices.push(vertex(row + 1, col + 1));
        }
    }

    SphereGeometry { positions, indices }
}

#[cfg(test)]
mod tests {
    use super::wireframe_sphere;

    #[test]
    fn grid_dimensions() {
        let geo = wireframe_sphere(20.0, 20, 20);
        assert_eq!(geo.positions.len(), 21 * 21);
        // rings + meridians + diagonals
        assert_eq!(geo.edge_count(), 21 * 20 + 20 * 21 + 20 * 20);
    }

    #[test]
    fn all_vertices_on_the_sphere() {
        let geo = wireframe_sphere(20.0, 20, 20);
        for p in &geo.positions {
            assert!((p.length() - 20.0).abs() < 1e-4);
        }
    }

    #[test]
    fn indices_in_bounds_and_paired() {
        let geo = wireframe_sphere(5.0, 8, 6);
        assert_eq!(geo.indices.len() % 2, 0);
        let n = geo.positions.len() as u32;
        assert!(geo.indices.iter().all(|&i| i < n));
    }

    #[test]
    fn degenerate_segment_counts_are_clamped() {
        let geo = wireframe_sphere(1.0, 1, 1);
        // Clamped to the 3x2 minimum grid
        assert_eq!(geo.positions.len(), 4 * 3);
    }
}
