//! Axis-aligned bounding box.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box.
///
/// Grows incrementally while a traversal visits vertices, then answers the
/// size/volume queries the zone classifier needs. Extents are named for the
/// engine's coordinate convention: width along X, depth along Y, height
/// along Z.
///
/// # Example
///
/// ```
/// use maquette_types::{Aabb, Point3};
///
/// let mut aabb = Aabb::empty();
/// aabb.expand_to_include(&Point3::new(0.0, 0.0, 0.0));
/// aabb.expand_to_include(&Point3::new(2.0, 3.0, 4.0));
///
/// assert_eq!(aabb.width(), 2.0);
/// assert_eq!(aabb.depth(), 3.0);
/// assert_eq!(aabb.height(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3<f64>,
    /// Maximum corner.
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create an AABB from minimum and maximum corners.
    ///
    /// Corners are swapped per axis if given out of order.
    #[must_use]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self {
            min: Point3::new(min.x.min(max.x), min.y.min(max.y), min.z.min(max.z)),
            max: Point3::new(min.x.max(max.x), min.y.max(max.y), min.z.max(max.z)),
        }
    }

    /// Create an empty (inverted) AABB, ready to expand around points.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Create an AABB enclosing an iterator of points.
    ///
    /// Returns an empty AABB for an empty iterator.
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        let mut aabb = Self::empty();
        for point in points {
            aabb.expand_to_include(point);
        }
        aabb
    }

    /// Check if the AABB is empty (min exceeds max on any axis).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grow the AABB to include a point.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Extents along each axis.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Extent along X.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along Y.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Extent along Z.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// Center point.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Volume, zero for empty AABBs.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let s = self.size();
        s.x * s.y * s.z
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_has_zero_volume() {
        let aabb = Aabb::empty();
        assert!(aabb.is_empty());
        assert_relative_eq!(aabb.volume(), 0.0);
    }

    #[test]
    fn expand_and_measure() {
        let mut aabb = Aabb::empty();
        aabb.expand_to_include(&Point3::new(-1.0, 0.0, 2.0));
        aabb.expand_to_include(&Point3::new(3.0, 5.0, 4.0));

        assert!(!aabb.is_empty());
        assert_relative_eq!(aabb.width(), 4.0);
        assert_relative_eq!(aabb.depth(), 5.0);
        assert_relative_eq!(aabb.height(), 2.0);
        assert_relative_eq!(aabb.volume(), 40.0);
    }

    #[test]
    fn new_corrects_swapped_corners() {
        let aabb = Aabb::new(Point3::new(5.0, 0.0, 0.0), Point3::new(0.0, 1.0, 1.0));
        assert_relative_eq!(aabb.min.x, 0.0);
        assert_relative_eq!(aabb.max.x, 5.0);
    }

    #[test]
    fn from_points() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 5.0, 3.0),
            Point3::new(-2.0, 8.0, 1.0),
        ];
        let aabb = Aabb::from_points(points.iter());
        assert_relative_eq!(aabb.min.x, -2.0);
        assert_relative_eq!(aabb.max.y, 8.0);
        assert_relative_eq!(aabb.max.z, 3.0);
    }

    #[test]
    fn center() {
        let aabb = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 4.0, 6.0));
        let c = aabb.center();
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 2.0);
        assert_relative_eq!(c.z, 3.0);
    }
}
