//! Core mesh types for maquette.
//!
//! This crate provides the foundational types for the segmentation and
//! material pipeline:
//!
//! - [`TriangleSoup`] - An unindexed triangle mesh backed by flat buffers
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`Color3`] - RGB color with 0-1 float channels
//!
//! # Triangle Soup
//!
//! The geometry compiler upstream of this engine emits triangles as a flat
//! coordinate buffer with no index buffer: every face carries its own three
//! vertices, and vertices shared between faces are duplicated. All
//! higher-level passes (adjacency, segmentation, texturing) work against
//! this representation directly.
//!
//! # Coordinate System
//!
//! Right-handed, Z up:
//! - X: width (left/right)
//! - Y: depth (front/back)
//! - Z: height (up/down)
//!
//! Face winding is counter-clockwise when viewed from outside; normals
//! point outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use maquette_types::TriangleSoup;
//!
//! let soup = TriangleSoup::from_positions(vec![
//!     0.0, 0.0, 0.0,
//!     1.0, 0.0, 0.0,
//!     0.0, 1.0, 0.0,
//! ]);
//!
//! assert_eq!(soup.face_count(), 1);
//! assert_eq!(soup.vertex_count(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod color;
mod soup;

pub use bounds::Aabb;
pub use color::Color3;
pub use soup::{TriangleSoup, VERTEX_EPSILON, cuboid, quantize_point, unit_cube};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
