//! Unindexed triangle-soup mesh.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Aabb, Color3};

/// Spatial quantization grid step for approximate vertex identity.
///
/// Triangle soups duplicate vertex data across faces with no shared
/// indices, so exact float equality cannot recover shared edges. Vertices
/// whose coordinates land in the same `0.01` world-unit grid cell are
/// treated as the same point.
pub const VERTEX_EPSILON: f64 = 0.01;

/// Quantize a point onto the [`VERTEX_EPSILON`] grid.
///
/// Two points within the grid step of each other collapse to the same key.
///
/// # Example
///
/// ```
/// use maquette_types::{Point3, quantize_point};
///
/// let a = quantize_point(&Point3::new(1.0, 2.0, 3.0));
/// let b = quantize_point(&Point3::new(1.003, 2.001, 2.999));
/// assert_eq!(a, b);
/// ```
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
// Truncation: world coordinates beyond i64 grid range are out of scope
pub fn quantize_point(point: &Point3<f64>) -> (i64, i64, i64) {
    (
        (point.x / VERTEX_EPSILON).round() as i64,
        (point.y / VERTEX_EPSILON).round() as i64,
        (point.z / VERTEX_EPSILON).round() as i64,
    )
}

/// An unindexed triangle mesh backed by flat attribute buffers.
///
/// Layout follows the geometry compiler's output contract: `positions`
/// holds three `f64` coordinates per vertex and three vertices per face
/// (nine floats per face). The optional `normals` buffer has identical
/// length; the optional `colors` buffer has one 0-1 `f32` triple per
/// vertex. Vertex `v` of face `f` starts at float index `9*f + 3*v`.
///
/// The engine never mutates positions, normals, or colors; the only
/// attribute it appends is the UV buffer (two floats per vertex slot).
///
/// Buffers that violate the length contract are rejected at construction
/// time by producing an empty soup (or dropping the attribute), so
/// downstream passes see well-formed data or nothing. Partially loaded
/// previews stay renderable; nothing in this crate panics on bad input.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleSoup {
    positions: Vec<f64>,
    normals: Option<Vec<f64>>,
    colors: Option<Vec<f32>>,
    uvs: Option<Vec<f32>>,
}

impl TriangleSoup {
    /// Create an empty soup.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            normals: None,
            colors: None,
            uvs: None,
        }
    }

    /// Create a soup from a flat position buffer.
    ///
    /// The buffer must hold nine floats per face. A buffer whose length is
    /// not a multiple of nine yields an empty soup.
    ///
    /// # Example
    ///
    /// ```
    /// use maquette_types::TriangleSoup;
    ///
    /// let soup = TriangleSoup::from_positions(vec![0.0; 18]);
    /// assert_eq!(soup.face_count(), 2);
    ///
    /// let bad = TriangleSoup::from_positions(vec![0.0; 10]);
    /// assert!(bad.is_empty());
    /// ```
    #[must_use]
    pub fn from_positions(positions: Vec<f64>) -> Self {
        if positions.len() % 9 != 0 {
            return Self::new();
        }
        Self {
            positions,
            normals: None,
            colors: None,
            uvs: None,
        }
    }

    /// Attach a per-vertex normal buffer.
    ///
    /// The buffer must match the position buffer's length; a mismatched
    /// buffer is dropped and the soup keeps computing face normals from
    /// positions instead.
    #[must_use]
    pub fn with_normals(mut self, normals: Vec<f64>) -> Self {
        if normals.len() == self.positions.len() {
            self.normals = Some(normals);
        }
        self
    }

    /// Attach a per-vertex color buffer (0-1 channels).
    ///
    /// The buffer must hold one RGB triple per vertex (same element count
    /// as the position buffer); a mismatched buffer is dropped, which in
    /// turn makes color grouping produce an empty result.
    #[must_use]
    pub fn with_colors(mut self, colors: Vec<f32>) -> Self {
        if colors.len() == self.positions.len() {
            self.colors = Some(colors);
        }
        self
    }

    /// Number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.positions.len() / 9
    }

    /// Number of vertex slots (three per face, duplicates included).
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Check if the soup has no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether a per-vertex normal buffer is attached.
    #[inline]
    #[must_use]
    pub const fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// Whether a per-vertex color buffer is attached.
    #[inline]
    #[must_use]
    pub const fn has_colors(&self) -> bool {
        self.colors.is_some()
    }

    /// The raw position buffer.
    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// The UV buffer, if one has been written.
    #[inline]
    #[must_use]
    pub fn uvs(&self) -> Option<&[f32]> {
        self.uvs.as_deref()
    }

    /// Write the UV buffer.
    ///
    /// Returns `false` (and stores nothing) unless the buffer holds
    /// exactly two floats per vertex slot.
    pub fn set_uvs(&mut self, uvs: Vec<f32>) -> bool {
        if uvs.len() == self.vertex_count() * 2 {
            self.uvs = Some(uvs);
            true
        } else {
            false
        }
    }

    /// Position of vertex `vert` (0-2) of face `face`.
    ///
    /// # Panics
    ///
    /// Panics if `face >= face_count()` or `vert > 2`.
    #[inline]
    #[must_use]
    pub fn position(&self, face: usize, vert: usize) -> Point3<f64> {
        let base = face * 9 + vert * 3;
        Point3::new(
            self.positions[base],
            self.positions[base + 1],
            self.positions[base + 2],
        )
    }

    /// Color of vertex `vert` of face `face`, if a color buffer is attached.
    #[inline]
    #[must_use]
    pub fn color(&self, face: usize, vert: usize) -> Option<Color3> {
        let base = face * 9 + vert * 3;
        self.colors
            .as_ref()
            .map(|c| Color3::new(c[base], c[base + 1], c[base + 2]))
    }

    /// Representative color of a face: its first vertex's color.
    #[inline]
    #[must_use]
    pub fn face_color(&self, face: usize) -> Option<Color3> {
        self.color(face, 0)
    }

    /// Normal of vertex `vert` of face `face`.
    ///
    /// Reads the normal buffer when attached; otherwise every vertex of
    /// the face reports the computed face normal.
    #[must_use]
    pub fn vertex_normal(&self, face: usize, vert: usize) -> Vector3<f64> {
        if let Some(normals) = &self.normals {
            let base = face * 9 + vert * 3;
            Vector3::new(normals[base], normals[base + 1], normals[base + 2])
        } else {
            self.face_normal(face)
        }
    }

    /// Geometric face normal from the winding order.
    ///
    /// Degenerate faces (zero-length cross product) report `+Z`.
    #[must_use]
    pub fn face_normal(&self, face: usize) -> Vector3<f64> {
        let v0 = self.position(face, 0);
        let v1 = self.position(face, 1);
        let v2 = self.position(face, 2);
        let normal = (v1 - v0).cross(&(v2 - v0));
        normal.try_normalize(f64::EPSILON).unwrap_or(Vector3::z())
    }

    /// Centroid of a face.
    #[must_use]
    pub fn face_centroid(&self, face: usize) -> Point3<f64> {
        let v0 = self.position(face, 0);
        let v1 = self.position(face, 1);
        let v2 = self.position(face, 2);
        Point3::new(
            (v0.x + v1.x + v2.x) / 3.0,
            (v0.y + v1.y + v2.y) / 3.0,
            (v0.z + v1.z + v2.z) / 3.0,
        )
    }

    /// Area of a face.
    #[must_use]
    pub fn face_area(&self, face: usize) -> f64 {
        let v0 = self.position(face, 0);
        let v1 = self.position(face, 1);
        let v2 = self.position(face, 2);
        (v1 - v0).cross(&(v2 - v0)).norm() * 0.5
    }

    /// Whether a face collapses under quantization.
    ///
    /// A face is degenerate when fewer than three of its vertices survive
    /// as distinct [`VERTEX_EPSILON`] grid keys, or when its computed area
    /// is zero. Degenerate faces join no component, zone, or color group.
    ///
    /// # Example
    ///
    /// ```
    /// use maquette_types::TriangleSoup;
    ///
    /// // Two vertices within the grid step of each other
    /// let soup = TriangleSoup::from_positions(vec![
    ///     0.0, 0.0, 0.0,
    ///     0.001, 0.0, 0.0,
    ///     0.0, 1.0, 0.0,
    /// ]);
    /// assert!(soup.face_is_degenerate(0));
    /// ```
    #[must_use]
    pub fn face_is_degenerate(&self, face: usize) -> bool {
        let k0 = quantize_point(&self.position(face, 0));
        let k1 = quantize_point(&self.position(face, 1));
        let k2 = quantize_point(&self.position(face, 2));
        if k0 == k1 || k1 == k2 || k0 == k2 {
            return true;
        }
        self.face_area(face) <= f64::EPSILON
    }

    /// Bounding box over every vertex of every face.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let mut aabb = Aabb::empty();
        for chunk in self.positions.chunks_exact(3) {
            aabb.expand_to_include(&Point3::new(chunk[0], chunk[1], chunk[2]));
        }
        aabb
    }

    /// Append another soup's faces to this one.
    ///
    /// Optional attribute buffers survive only when both sides carry them;
    /// a one-sided attribute is dropped so the merged soup stays
    /// contract-consistent. Any previously written UV buffer is cleared.
    pub fn merge(&mut self, other: &Self) {
        self.positions.extend_from_slice(&other.positions);

        self.normals = match (self.normals.take(), &other.normals) {
            (Some(mut ours), Some(theirs)) => {
                ours.extend_from_slice(theirs);
                Some(ours)
            }
            _ => None,
        };

        self.colors = match (self.colors.take(), &other.colors) {
            (Some(mut ours), Some(theirs)) => {
                ours.extend_from_slice(theirs);
                Some(ours)
            }
            _ => None,
        };

        self.uvs = None;
    }
}

/// Build an axis-aligned box as a 12-triangle soup.
///
/// Winding is counter-clockwise viewed from outside, so normals point
/// outward.
///
/// # Example
///
/// ```
/// use maquette_types::{Point3, cuboid};
///
/// let soup = cuboid(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 1.0, 1.0));
/// assert_eq!(soup.face_count(), 12);
/// ```
#[must_use]
pub fn cuboid(min: Point3<f64>, max: Point3<f64>) -> TriangleSoup {
    let corners = [
        [min.x, min.y, min.z], // 0
        [max.x, min.y, min.z], // 1
        [max.x, max.y, min.z], // 2
        [min.x, max.y, min.z], // 3
        [min.x, min.y, max.z], // 4
        [max.x, min.y, max.z], // 5
        [max.x, max.y, max.z], // 6
        [min.x, max.y, max.z], // 7
    ];

    // Two triangles per side, CCW viewed from outside
    let faces: [[usize; 3]; 12] = [
        [0, 2, 1], // bottom, -Z
        [0, 3, 2],
        [4, 5, 6], // top, +Z
        [4, 6, 7],
        [0, 1, 5], // front, -Y
        [0, 5, 4],
        [3, 7, 6], // back, +Y
        [3, 6, 2],
        [0, 4, 7], // left, -X
        [0, 7, 3],
        [1, 2, 6], // right, +X
        [1, 6, 5],
    ];

    let mut positions = Vec::with_capacity(12 * 9);
    for face in &faces {
        for &corner in face {
            positions.extend_from_slice(&corners[corner]);
        }
    }
    TriangleSoup::from_positions(positions)
}

/// Build a unit cube soup from (0,0,0) to (1,1,1).
#[must_use]
pub fn unit_cube() -> TriangleSoup {
    cuboid(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0))
}
