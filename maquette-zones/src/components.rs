//! Connected component traversal with inline statistics.

use std::collections::VecDeque;

use maquette_types::{Aabb, TriangleSoup};
use tracing::debug;

use crate::adjacency::FaceAdjacency;

/// Minimum face count for a component to reach classification.
///
/// Anything smaller is geometric debris from the compiler (stray slivers,
/// collapsed fragments) and is dropped before zone assignment.
pub const MIN_COMPONENT_FACES: usize = 3;

/// A maximal set of faces connected through shared quantized edges.
///
/// Statistics are accumulated while the traversal visits each face, not
/// in a second pass: the normal-Z sum takes three per-vertex contributions
/// per face, the height sum takes one face-centroid contribution per face,
/// and the bounding box grows around every vertex. A component is immutable
/// once the traversal finishes.
#[derive(Debug, Clone)]
pub struct Component {
    faces: Vec<usize>,
    normal_z_sum: f64,
    centroid_z_sum: f64,
    bounds: Aabb,
}

impl Component {
    /// Face indices in ascending order.
    #[must_use]
    pub fn faces(&self) -> &[usize] {
        &self.faces
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Average normal Z.
    ///
    /// The sum carries three per-vertex contributions per face while the
    /// denominator is the face count, so the value ranges over roughly
    /// ±3. The orientation thresholds downstream are calibrated to that
    /// scale.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    // Precision: face counts stay far below 2^52
    pub fn avg_normal_z(&self) -> f64 {
        self.normal_z_sum / self.faces.len() as f64
    }

    /// Average face-centroid height, in world units.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    // Precision: face counts stay far below 2^52
    pub fn avg_z(&self) -> f64 {
        self.centroid_z_sum / self.faces.len() as f64
    }

    /// Bounding box over every vertex of every member face.
    #[must_use]
    pub const fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// Whether this component is too small to classify.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.faces.len() < MIN_COMPONENT_FACES
    }
}

/// Partition the soup's non-degenerate faces into connected components.
///
/// Breadth-first traversal starting from the lowest unvisited face index
/// each time; every face reachable without crossing an unshared edge joins
/// the same component. Each face is visited exactly once, so the whole
/// pass is O(F). Degenerate faces join no component.
///
/// Components are returned in order of their lowest face index. Small
/// components are *included* here (so the partition is complete); the
/// classifier drops them via [`Component::is_degenerate`].
///
/// # Example
///
/// ```
/// use maquette_types::{Point3, cuboid};
/// use maquette_zones::{FaceAdjacency, find_components};
///
/// let mut soup = cuboid(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
/// soup.merge(&cuboid(Point3::new(5.0, 0.0, 0.0), Point3::new(6.0, 1.0, 1.0)));
///
/// let adjacency = FaceAdjacency::from_soup(&soup);
/// let components = find_components(&soup, &adjacency);
/// assert_eq!(components.len(), 2);
/// ```
#[must_use]
pub fn find_components(soup: &TriangleSoup, adjacency: &FaceAdjacency) -> Vec<Component> {
    let face_count = soup.face_count();
    let mut visited = vec![false; face_count];
    let mut components = Vec::new();

    for start in 0..face_count {
        if visited[start] || adjacency.is_degenerate(start) {
            continue;
        }

        let mut faces = Vec::new();
        let mut normal_z_sum = 0.0;
        let mut centroid_z_sum = 0.0;
        let mut bounds = Aabb::empty();

        let mut queue = VecDeque::new();
        queue.push_back(start);
        visited[start] = true;

        while let Some(face) = queue.pop_front() {
            for vert in 0..3 {
                normal_z_sum += soup.vertex_normal(face, vert).z;
                bounds.expand_to_include(&soup.position(face, vert));
            }
            centroid_z_sum += soup.face_centroid(face).z;
            faces.push(face);

            for &neighbor in adjacency.neighbors(face) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        faces.sort_unstable();
        components.push(Component {
            faces,
            normal_z_sum,
            centroid_z_sum,
            bounds,
        });
    }

    debug!(
        components = components.len(),
        faces = face_count,
        "found connected components"
    );

    components
}
