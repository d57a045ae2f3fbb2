//! Face adjacency over quantized edges.
//!
//! A triangle soup carries no index buffer, so shared edges have to be
//! recovered geometrically: vertices are snapped onto the
//! [`VERTEX_EPSILON`](maquette_types::VERTEX_EPSILON) grid and an edge is
//! the order-independent pair of its endpoint grid keys.

use hashbrown::HashMap;
use maquette_types::{TriangleSoup, quantize_point};
use tracing::debug;

type VertexKey = (i64, i64, i64);
type EdgeKey = (VertexKey, VertexKey);

/// Face adjacency information for a triangle soup.
///
/// Two faces are adjacent when they share a quantized edge. Edges shared
/// by more than two faces (non-manifold junctions) connect every pair of
/// sharers. Built fresh per call; nothing is cached across invocations.
///
/// # Example
///
/// ```
/// use maquette_types::TriangleSoup;
/// use maquette_zones::FaceAdjacency;
///
/// // Two triangles sharing the edge (1,0,0)-(0,1,0)
/// let soup = TriangleSoup::from_positions(vec![
///     0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, //
///     1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0,
/// ]);
///
/// let adj = FaceAdjacency::from_soup(&soup);
/// assert!(adj.are_adjacent(0, 1));
/// ```
#[derive(Debug, Clone)]
pub struct FaceAdjacency {
    /// For each face, the sorted list of adjacent face indices.
    adjacent: Vec<Vec<usize>>,
    /// Faces that collapsed under quantization and contribute no edges.
    degenerate: Vec<bool>,
}

impl FaceAdjacency {
    /// Build face adjacency from a triangle soup.
    ///
    /// Each non-degenerate face contributes exactly three edge entries, so
    /// the build is O(F).
    #[must_use]
    pub fn from_soup(soup: &TriangleSoup) -> Self {
        let face_count = soup.face_count();
        let mut degenerate = vec![false; face_count];
        let mut edge_to_faces: HashMap<EdgeKey, Vec<usize>> = HashMap::new();

        for face in 0..face_count {
            if soup.face_is_degenerate(face) {
                degenerate[face] = true;
                continue;
            }

            let keys = [
                quantize_point(&soup.position(face, 0)),
                quantize_point(&soup.position(face, 1)),
                quantize_point(&soup.position(face, 2)),
            ];

            for i in 0..3 {
                let a = keys[i];
                let b = keys[(i + 1) % 3];
                // Canonical order so both directions hash alike
                let edge = if a < b { (a, b) } else { (b, a) };
                edge_to_faces.entry(edge).or_default().push(face);
            }
        }

        let mut adjacent: Vec<Vec<usize>> = vec![Vec::new(); face_count];

        for faces in edge_to_faces.values() {
            // Every pair of sharers becomes adjacent, which keeps
            // non-manifold junctions connected instead of splitting them
            for i in 0..faces.len() {
                for j in (i + 1)..faces.len() {
                    if faces[i] != faces[j] {
                        adjacent[faces[i]].push(faces[j]);
                        adjacent[faces[j]].push(faces[i]);
                    }
                }
            }
        }

        for list in &mut adjacent {
            list.sort_unstable();
            list.dedup();
        }

        debug!(
            faces = face_count,
            edges = edge_to_faces.len(),
            "built face adjacency"
        );

        Self {
            adjacent,
            degenerate,
        }
    }

    /// Neighbors of a face.
    ///
    /// Returns an empty slice for out-of-bounds indices.
    #[must_use]
    pub fn neighbors(&self, face: usize) -> &[usize] {
        self.adjacent.get(face).map_or(&[], Vec::as_slice)
    }

    /// Number of faces the adjacency was built over.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.adjacent.len()
    }

    /// Whether a face collapsed under quantization.
    ///
    /// Degenerate faces contribute no edges and join no component.
    #[must_use]
    pub fn is_degenerate(&self, face: usize) -> bool {
        self.degenerate.get(face).copied().unwrap_or(false)
    }

    /// Check if two faces share a quantized edge.
    #[must_use]
    pub fn are_adjacent(&self, face_a: usize, face_b: usize) -> bool {
        self.adjacent
            .get(face_a)
            .is_some_and(|n| n.contains(&face_b))
    }
}
