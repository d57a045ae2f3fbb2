//! Triplanar UV projection.
//!
//! Assigns texture coordinates per face from the two axes orthogonal to
//! the face's dominant normal direction. Because each face projects
//! independently (no deduplication across shared vertices), a single
//! connected component textures seam-free at the cost of UV
//! discontinuities between differently oriented faces.

use maquette_types::TriangleSoup;
use tracing::debug;

/// Default tiling factor applied to projected coordinates.
pub const UV_TILE_SCALE: f64 = 0.1;

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
    Z,
}

/// Project UVs with the default tiling scale.
///
/// See [`project_triplanar_scaled`]. The projection reads world
/// coordinates directly, so it must run after any final geometric
/// transform (translation, centering): projected UVs do not survive a
/// later move.
///
/// # Example
///
/// ```
/// use maquette_texture::project_triplanar;
/// use maquette_types::TriangleSoup;
///
/// let mut soup = TriangleSoup::from_positions(vec![
///     0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
/// ]);
/// project_triplanar(&mut soup);
///
/// let uvs = soup.uvs().unwrap();
/// assert_eq!(uvs, &[0.0, 0.0, 0.1, 0.0, 0.0, 0.1]);
/// ```
pub fn project_triplanar(soup: &mut TriangleSoup) {
    project_triplanar_scaled(soup, UV_TILE_SCALE);
}

/// Project UVs with an explicit tiling scale.
///
/// For each face the dominant axis is the one with the largest summed
/// normal magnitude across the three vertices (ties prefer X over Y over
/// Z). The two remaining coordinates become (u, v):
///
/// - X dominant: `(z, y)`
/// - Y dominant: `(x, z)`
/// - Z dominant: `(x, y)`
///
/// The written buffer holds two floats per vertex slot (`6 * F` total).
/// An empty soup gets an empty buffer.
#[allow(clippy::cast_possible_truncation)]
// Truncation: UV coordinates are consumed as f32 by renderers
pub fn project_triplanar_scaled(soup: &mut TriangleSoup, scale: f64) {
    let face_count = soup.face_count();
    let mut uvs = Vec::with_capacity(face_count * 6);

    for face in 0..face_count {
        let mut sums = [0.0_f64; 3];
        for vert in 0..3 {
            let normal = soup.vertex_normal(face, vert);
            sums[0] += normal.x.abs();
            sums[1] += normal.y.abs();
            sums[2] += normal.z.abs();
        }

        let axis = if sums[0] >= sums[1] && sums[0] >= sums[2] {
            Axis::X
        } else if sums[1] >= sums[2] {
            Axis::Y
        } else {
            Axis::Z
        };

        for vert in 0..3 {
            let p = soup.position(face, vert);
            let (u, v) = match axis {
                Axis::X => (p.z, p.y),
                Axis::Y => (p.x, p.z),
                Axis::Z => (p.x, p.y),
            };
            uvs.push((u * scale) as f32);
            uvs.push((v * scale) as f32);
        }
    }

    debug!(faces = face_count, scale, "projected triplanar UVs");
    let stored = soup.set_uvs(uvs);
    debug_assert!(stored, "projected UV buffer has the contract length");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use maquette_types::{TriangleSoup, unit_cube};

    #[test]
    fn upward_triangle_projects_xy() {
        let mut soup = TriangleSoup::from_positions(vec![
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0,
        ])
        .with_normals(vec![
            0.0, 0.0, 1.0, //
            0.0, 0.0, 1.0, //
            0.0, 0.0, 1.0,
        ]);

        project_triplanar(&mut soup);
        let uvs = soup.uvs().unwrap();

        let expected: [f32; 6] = [0.0, 0.0, 0.1, 0.0, 0.0, 0.1];
        for (got, want) in uvs.iter().zip(expected) {
            assert_relative_eq!(*got, want, epsilon = 1e-6);
        }
    }

    #[test]
    fn side_facing_triangle_projects_zy() {
        // Normal along +X: u from z, v from y
        let mut soup = TriangleSoup::from_positions(vec![
            0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 2.0,
        ]);

        project_triplanar(&mut soup);
        let uvs = soup.uvs().unwrap();

        // Vertex 2 sits at z=2: u = 0.2
        assert_relative_eq!(uvs[4], 0.2, epsilon = 1e-6);
        assert_relative_eq!(uvs[5], 0.0, epsilon = 1e-6);
        // Vertex 1 sits at y=1: v = 0.1
        assert_relative_eq!(uvs[2], 0.0, epsilon = 1e-6);
        assert_relative_eq!(uvs[3], 0.1, epsilon = 1e-6);
    }

    #[test]
    fn custom_scale() {
        let mut soup = TriangleSoup::from_positions(vec![
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0,
        ]);

        project_triplanar_scaled(&mut soup, 0.5);
        let uvs = soup.uvs().unwrap();
        assert_relative_eq!(uvs[2], 0.5, epsilon = 1e-6);
    }

    #[test]
    fn buffer_length_matches_vertex_slots() {
        let mut cube = unit_cube();
        project_triplanar(&mut cube);
        assert_eq!(cube.uvs().unwrap().len(), cube.vertex_count() * 2);
    }

    #[test]
    fn empty_soup_gets_empty_buffer() {
        let mut soup = TriangleSoup::new();
        project_triplanar(&mut soup);
        assert_eq!(soup.uvs().unwrap().len(), 0);
    }

    #[test]
    fn projection_is_deterministic() {
        let mut a = unit_cube();
        let mut b = unit_cube();
        project_triplanar(&mut a);
        project_triplanar(&mut b);
        assert_eq!(a.uvs().unwrap(), b.uvs().unwrap());
    }
}
