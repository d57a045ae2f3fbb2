//! Shared structural layouts for the patterned painters.
//!
//! The diffuse and bump generators must agree on where bricks, tiles, and
//! bands sit so the bump map's ridges line up with the diffuse map's
//! drawing; both read their geometry from here.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::pattern::TextureConfig;
use crate::raster::Raster;

/// Brick grid geometry for a square raster.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BrickLayout {
    /// Bricks per row.
    pub cols: u32,
    /// Brick rows.
    pub rows: u32,
    /// Brick cell width in pixels.
    pub brick_w: u32,
    /// Brick cell height in pixels.
    pub brick_h: u32,
    /// Mortar line thickness in pixels.
    pub mortar: u32,
}

pub(crate) fn brick_layout(size: u32) -> BrickLayout {
    let cols = 8;
    let rows = 16;
    BrickLayout {
        cols,
        rows,
        brick_w: (size / cols).max(1),
        brick_h: (size / rows).max(1),
        mortar: (size / 256).max(1),
    }
}

/// Tile grid geometry for a square raster.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TileLayout {
    /// Tiles per axis.
    pub tiles: u32,
    /// Tile cell edge in pixels.
    pub tile: u32,
    /// Grout line thickness in pixels.
    pub grout: u32,
}

pub(crate) fn tile_layout(size: u32) -> TileLayout {
    let tiles = 8;
    TileLayout {
        tiles,
        tile: (size / tiles).max(1),
        grout: (size / 256).max(1),
    }
}

/// Horizontal band count for the wood pattern.
pub(crate) const WOOD_BANDS: u32 = 16;

/// Build the synthesis RNG: seeded when the config asks for
/// reproducibility, fresh entropy otherwise.
pub(crate) fn make_rng(config: &TextureConfig) -> StdRng {
    config
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

/// A hairline crack: a jittered walk half the raster long, wrapped at the
/// borders so repeats stay seamless.
#[allow(clippy::cast_possible_truncation)]
// Truncation: walk coordinates stay within a few raster periods
pub(crate) fn draw_crack(raster: &mut Raster, rng: &mut StdRng, px: [u8; 4]) {
    let size = raster.width();
    let mut x = rng.gen_range(0.0..f64::from(size));
    let mut y = rng.gen_range(0.0..f64::from(size));
    let mut angle = rng.gen_range(0.0..TAU);

    for _ in 0..(size / 2) {
        raster.put_wrapped(x.round() as i64, y.round() as i64, px);
        angle += rng.gen_range(-0.3..0.3);
        x += angle.cos();
        y += angle.sin();
    }
}
