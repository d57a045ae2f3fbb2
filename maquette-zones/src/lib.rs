//! Mesh segmentation and architectural zone classification.
//!
//! This crate turns an anonymous triangle soup into semantically labeled
//! zone groups. The pipeline runs in three passes, each O(F):
//!
//! 1. [`FaceAdjacency`] - quantized-edge face adjacency over the soup
//! 2. [`find_components`] - breadth-first connected components with
//!    statistics accumulated during the traversal
//! 3. [`classify_zones`] - geometric feature extraction plus an ordered
//!    first-match-wins rule list assigning one of eight zones
//!
//! All passes are pure functions over the input mesh: every map and visit
//! set is function-local, so concurrent invocations on independent meshes
//! need no locking, and identical input always yields identical zones.
//!
//! # Quick Start
//!
//! ```
//! use maquette_types::unit_cube;
//! use maquette_zones::classify_zones;
//!
//! let cube = unit_cube();
//! let groups = classify_zones(&cube);
//!
//! // A solid box is one component and lands in exactly one zone
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].faces.len(), 12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod adjacency;
mod classify;
mod components;
mod features;

pub use adjacency::FaceAdjacency;
pub use classify::{Zone, ZoneGroup, classify_component, classify_zones};
pub use components::{Component, MIN_COMPONENT_FACES, find_components};
pub use features::{ComponentFeatures, MeshContext, VERTICAL_NORMAL_THRESHOLD};
