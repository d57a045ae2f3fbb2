//! Geometric feature extraction for zone classification.
//!
//! Features come in two layers: whole-mesh reference values computed once
//! per mesh ([`MeshContext`]), and per-component booleans derived against
//! that context ([`ComponentFeatures`]). The rule list in
//! [`classify`](crate::classify) reads only the flat feature struct, which
//! keeps every rule independently testable.

use maquette_types::{Aabb, TriangleSoup};

use crate::components::Component;

/// Orientation threshold on the averaged normal Z.
///
/// The average carries three per-vertex contributions per face over a
/// face-count denominator, so it ranges over roughly ±3; a component is
/// vertical when the magnitude stays under this value, upward above it,
/// downward below its negation. Fixed design constant, not tunable per
/// call.
pub const VERTICAL_NORMAL_THRESHOLD: f64 = 0.4;

/// Fraction of model height below the upper-half cutoff.
const UPPER_HALF_FRACTION: f64 = 0.35;

/// Fraction of total bounding volume under which a component is small.
const SMALL_VOLUME_FRACTION: f64 = 0.02;

/// Floor and fraction for the tiny-component face threshold.
const TINY_FACE_FLOOR: f64 = 6.0;
const TINY_FACE_FRACTION: f64 = 0.005;

/// Fraction of the largest component's face count above which a
/// component is large.
const LARGE_FACE_FRACTION: f64 = 0.15;

/// Fraction of model width under which a component's footprint is thin.
const THIN_EXTENT_FRACTION: f64 = 0.05;

/// Height-to-footprint ratio above which a component reads as a door.
const DOOR_ASPECT_FRACTION: f64 = 0.8;

/// Height-to-footprint ratio above which a small component reads as
/// vegetation.
const VEGETATION_ASPECT: f64 = 1.5;

/// Fraction of model height within which a component touches the ground.
const GROUND_TOLERANCE_FRACTION: f64 = 0.05;

/// Whole-mesh reference values, computed once per classification run.
#[derive(Debug, Clone)]
pub struct MeshContext {
    /// Overall bounding box.
    pub bounds: Aabb,
    /// Overall bounding volume.
    pub total_volume: f64,
    /// Upper-half cutoff height.
    pub mid_z: f64,
    /// Bounding-volume threshold for small components.
    pub small_volume_threshold: f64,
    /// Face-count threshold for tiny components.
    pub tiny_face_threshold: f64,
    /// Face-count threshold for large components.
    pub large_face_threshold: f64,
}

impl MeshContext {
    /// Compute reference values from the mesh and its components.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    // Precision: face counts stay far below 2^52
    pub fn new(soup: &TriangleSoup, components: &[Component]) -> Self {
        let bounds = soup.bounds();
        let total_volume = bounds.volume();
        let largest_faces = components
            .iter()
            .map(Component::face_count)
            .max()
            .unwrap_or(0);

        Self {
            bounds,
            total_volume,
            mid_z: UPPER_HALF_FRACTION.mul_add(bounds.height(), bounds.min.z),
            small_volume_threshold: SMALL_VOLUME_FRACTION * total_volume,
            tiny_face_threshold: TINY_FACE_FLOOR
                .max(TINY_FACE_FRACTION * soup.face_count() as f64),
            large_face_threshold: LARGE_FACE_FRACTION * largest_faces as f64,
        }
    }
}

/// Flat per-component feature record consumed by the rule list.
#[derive(Debug, Clone, Copy)]
pub struct ComponentFeatures {
    /// Averaged normal Z (±3 range, see [`VERTICAL_NORMAL_THRESHOLD`]).
    pub avg_normal_z: f64,
    /// Mean face-centroid height in world units.
    pub avg_z: f64,
    /// Component extent along X.
    pub width: f64,
    /// Component extent along Y.
    pub depth: f64,
    /// Component extent along Z.
    pub height: f64,
    /// Mostly side-facing.
    pub is_vertical: bool,
    /// Mostly up-facing.
    pub is_upward: bool,
    /// Mostly down-facing.
    pub is_downward: bool,
    /// Bounding volume below the small threshold.
    pub is_small: bool,
    /// Face count below the tiny threshold.
    pub is_tiny: bool,
    /// Face count at or above the large threshold.
    pub is_large: bool,
    /// Mean height above the upper-half cutoff.
    pub is_in_upper_half: bool,
    /// Footprint thin relative to the model.
    pub is_thin: bool,
    /// Bottom within ground tolerance of the model floor.
    pub touches_ground: bool,
    /// Tall, grounded proportions.
    pub is_door_like: bool,
    /// Taller than one and a half times both footprint extents.
    pub is_tall: bool,
}

impl ComponentFeatures {
    /// Derive the feature record for one component.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    // Precision: face counts stay far below 2^52
    pub fn extract(component: &Component, context: &MeshContext) -> Self {
        let avg_normal_z = component.avg_normal_z();
        let avg_z = component.avg_z();
        let bounds = component.bounds();
        let width = bounds.width();
        let depth = bounds.depth();
        let height = bounds.height();
        let face_count = component.face_count() as f64;

        let is_vertical = avg_normal_z.abs() < VERTICAL_NORMAL_THRESHOLD;
        let is_upward = avg_normal_z > VERTICAL_NORMAL_THRESHOLD;
        let is_downward = avg_normal_z < -VERTICAL_NORMAL_THRESHOLD;

        let volume = width * depth * height;
        let ground_cutoff = GROUND_TOLERANCE_FRACTION
            .mul_add(context.bounds.height(), context.bounds.min.z);
        let touches_ground = bounds.min.z <= ground_cutoff;

        Self {
            avg_normal_z,
            avg_z,
            width,
            depth,
            height,
            is_vertical,
            is_upward,
            is_downward,
            is_small: volume < context.small_volume_threshold,
            is_tiny: face_count < context.tiny_face_threshold,
            is_large: face_count >= context.large_face_threshold,
            is_in_upper_half: avg_z > context.mid_z,
            is_thin: width.min(depth) < THIN_EXTENT_FRACTION * context.bounds.width(),
            touches_ground,
            is_door_like: height > DOOR_ASPECT_FRACTION * width.max(depth) && touches_ground,
            is_tall: height > VEGETATION_ASPECT * width && height > VEGETATION_ASPECT * depth,
        }
    }
}
