//! Mesh segmentation and procedural material engine.
//!
//! maquette turns an anonymous triangle soup - the output of an external
//! geometry compiler, with no index buffer and no semantic tags - into
//! semantically labeled, materialized geometry:
//!
//! 1. recover face adjacency from quantized edges
//! 2. partition the faces into connected components
//! 3. classify each component into an architectural zone (roof, walls,
//!    windows, ...) with a default material binding
//! 4. group faces by quantized vertex color and match each group to the
//!    nearest material preset
//! 5. synthesize tileable diffuse and bump rasters per material pattern
//! 6. project triplanar UVs onto the mesh
//!
//! The member crates expose each stage separately; [`pipeline::process`]
//! runs the whole chain in one call.
//!
//! # Quick Start
//!
//! ```
//! use maquette::pipeline::{PipelineConfig, process};
//! use maquette::prelude::*;
//!
//! let mut soup = unit_cube();
//! let library = MaterialLibrary::builtin();
//! let output = process(&mut soup, &library, &PipelineConfig::default());
//!
//! assert_eq!(output.zone_groups.len(), 1);
//! assert!(soup.uvs().is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `TriangleSoup`, `Aabb`, `Color3`.
pub use maquette_types as types;

/// Face adjacency, connected components, zone classification.
pub use maquette_zones as zones;

/// Material presets and color matching.
pub use maquette_material as material;

/// Procedural textures and triplanar UVs.
pub use maquette_texture as texture;

pub mod pipeline;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for the full pipeline.
///
/// # Usage
///
/// ```
/// use maquette::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use maquette_types::{Aabb, Color3, Point3, TriangleSoup, Vector3, cuboid, unit_cube};

    // Segmentation
    pub use maquette_zones::{FaceAdjacency, Zone, ZoneGroup, classify_zones, find_components};

    // Materials
    pub use maquette_material::{ColorGroup, MaterialLibrary, MaterialPreset, group_by_color};

    // Textures
    pub use maquette_texture::{
        Pattern, TextureConfig, generate_bump, generate_diffuse, project_triplanar,
    };

    // Pipeline
    pub use crate::pipeline::{GeneratedTexture, PipelineConfig, PipelineOutput, process};
}
