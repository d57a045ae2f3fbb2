//! Procedural surface textures and triplanar UV projection.
//!
//! The renderer downstream binds each zone or color group to a physically
//! based material; this crate synthesizes the raster half of that
//! material:
//!
//! - [`Raster`] - an owned RGBA buffer with simple loop-based drawing
//! - [`Pattern`] - the eight procedural surface patterns
//! - [`generate_diffuse`] / [`generate_bump`] - deterministic painters;
//!   the bump map raises and lowers the same structural features the
//!   diffuse map draws
//! - [`project_triplanar`] - per-face axis-dominant UV assignment
//!
//! All rasters tile seamlessly in both axes: structural frequencies are
//! integer multiples of the raster period and scattered detail wraps at
//! the borders.
//!
//! # Determinism
//!
//! Speckle and streak placement uses a pseudo-random source. With
//! [`TextureConfig::with_seed`] the output is bit-reproducible; without a
//! seed each call draws fresh entropy for visual variety. Tests assert
//! structural and statistical properties, never exact pixels of unseeded
//! output.
//!
//! # Example
//!
//! ```
//! use maquette_texture::{Pattern, TextureConfig, generate_diffuse};
//! use maquette_types::Color3;
//!
//! let config = TextureConfig::default().with_size(64).with_seed(7);
//! let raster = generate_diffuse(Pattern::Brick, Color3::new(0.6, 0.3, 0.2), &config).unwrap();
//! assert_eq!(raster.width(), 64);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bump;
mod diffuse;
mod error;
mod grid;
mod pattern;
mod raster;
mod triplanar;

pub use bump::generate_bump;
pub use diffuse::generate_diffuse;
pub use error::{TextureError, TextureResult};
pub use pattern::{Pattern, TextureConfig};
pub use raster::Raster;
pub use triplanar::{UV_TILE_SCALE, project_triplanar, project_triplanar_scaled};
