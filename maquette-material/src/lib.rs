//! Material presets and vertex-color matching.
//!
//! Compiled geometry arrives with per-vertex colors chosen by the model
//! author; this crate bridges those colors to renderable materials:
//!
//! - [`MaterialPreset`] - a named bundle of PBR scalars, reference colors,
//!   and a procedural pattern key
//! - [`MaterialLibrary`] - an ordered preset collection with nearest-color
//!   matching; [`MaterialLibrary::builtin`] ships the default table
//! - [`group_by_color`] - partitions faces by quantized vertex color and
//!   binds each group to its closest preset
//!
//! The preset table is configuration data, not derived by the engine:
//! lookups go by name, and matching scans reference colors in declaration
//! order so ties resolve deterministically.
//!
//! # Example
//!
//! ```
//! use maquette_material::MaterialLibrary;
//! use maquette_types::Color3;
//!
//! let library = MaterialLibrary::builtin();
//! let matched = library.match_color(Color3::new(0.6, 0.28, 0.2)).unwrap();
//! assert_eq!(matched.preset, "brick");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod group;
mod preset;

pub use error::{MaterialError, MaterialResult};
pub use group::{ColorGroup, group_by_color};
pub use preset::{ColorMatch, MaterialLibrary, MaterialPreset};
