//! Procedural diffuse painters.

// Raster math converts freely between pixel indices and float coordinates
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

use std::f64::consts::TAU;

use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

use maquette_types::Color3;

use crate::error::TextureResult;
use crate::grid::{WOOD_BANDS, brick_layout, draw_crack, make_rng, tile_layout};
use crate::pattern::{Pattern, TextureConfig};
use crate::raster::Raster;

/// Synthesize the diffuse raster for a pattern and base color.
///
/// Output is square (`config.size` per edge) and tiles seamlessly in both
/// axes. With a seed the result is bit-reproducible; without one the
/// speckle placement varies per call while the structure (grids, bands,
/// veins) stays put.
///
/// # Errors
///
/// Returns [`TextureError::InvalidSize`](crate::TextureError::InvalidSize)
/// for a zero-pixel raster.
///
/// # Example
///
/// ```
/// use maquette_texture::{Pattern, TextureConfig, generate_diffuse};
/// use maquette_types::Color3;
///
/// let config = TextureConfig::default().with_size(64).with_seed(1);
/// let a = generate_diffuse(Pattern::Concrete, Color3::new(0.6, 0.6, 0.58), &config).unwrap();
/// let b = generate_diffuse(Pattern::Concrete, Color3::new(0.6, 0.6, 0.58), &config).unwrap();
/// assert_eq!(a.data(), b.data());
/// ```
pub fn generate_diffuse(
    pattern: Pattern,
    base: Color3,
    config: &TextureConfig,
) -> TextureResult<Raster> {
    config.validate()?;
    let mut rng = make_rng(config);
    let size = config.size;

    let raster = match pattern {
        Pattern::None => Raster::filled(size, size, base),
        Pattern::Concrete => speckled(size, base, &mut rng, 0.12, 0.06, 6),
        Pattern::Granite => granite(size, base, &mut rng),
        Pattern::Brick => brick(size, base, &mut rng),
        Pattern::Wood => wood(size, base, &mut rng),
        Pattern::Tile => tile(size, base, &mut rng),
        Pattern::Marble => marble(size, base),
        Pattern::Brushed => brushed(size, base, &mut rng),
    };

    debug!(pattern = %pattern, size, "synthesized diffuse raster");
    Ok(raster)
}

/// Speckle perturbation of the base plus a light crack network.
fn speckled(
    size: u32,
    base: Color3,
    rng: &mut StdRng,
    density: f32,
    amplitude: f32,
    cracks: u32,
) -> Raster {
    let mut raster = Raster::filled(size, size, base);

    for y in 0..size {
        for x in 0..size {
            if rng.r#gen::<f32>() < density {
                let delta = rng.gen_range(-amplitude..amplitude);
                raster.put(x, y, base.offset(delta).to_rgba8());
            }
        }
    }

    let crack_color = base.scaled(0.78);
    for _ in 0..cracks {
        draw_crack(&mut raster, rng, crack_color.to_rgba8());
    }

    raster
}

fn granite(size: u32, base: Color3, rng: &mut StdRng) -> Raster {
    let mut raster = speckled(size, base, rng, 0.35, 0.1, 4);

    // Bright mineral flecks
    let fleck = base.offset(0.18);
    for _ in 0..(size as usize * size as usize / 64) {
        let x = rng.gen_range(0..size);
        let y = rng.gen_range(0..size);
        raster.put(x, y, fleck.to_rgba8());
    }

    raster
}

fn brick(size: u32, base: Color3, rng: &mut StdRng) -> Raster {
    let layout = brick_layout(size);
    let mortar = base.scaled(0.55);
    let mut raster = Raster::filled(size, size, mortar);

    for row in 0..layout.rows {
        let y0 = i64::from(row * layout.brick_h);
        // Running bond: odd rows shift by half a brick
        let x_off = if row % 2 == 1 {
            i64::from(layout.brick_w / 2)
        } else {
            0
        };

        for col in 0..layout.cols {
            let x0 = i64::from(col * layout.brick_w) + x_off;
            let tint = rng.gen_range(0.88..1.08);
            let face = base.scaled(tint);
            let w = layout.brick_w.saturating_sub(layout.mortar);
            let h = layout.brick_h.saturating_sub(layout.mortar);
            raster.fill_rect_wrapped(
                x0 + i64::from(layout.mortar),
                y0 + i64::from(layout.mortar),
                w,
                h,
                face.to_rgba8(),
            );

            // Small per-brick noise texture
            for _ in 0..(w as usize * h as usize / 24) {
                let dx = rng.gen_range(0..w.max(1));
                let dy = rng.gen_range(0..h.max(1));
                let noisy = face.offset(rng.gen_range(-0.05..0.05));
                raster.put_wrapped(
                    x0 + i64::from(layout.mortar + dx),
                    y0 + i64::from(layout.mortar + dy),
                    noisy.to_rgba8(),
                );
            }
        }
    }

    raster
}

fn wood(size: u32, base: Color3, rng: &mut StdRng) -> Raster {
    let band_h = (size / WOOD_BANDS).max(1);
    let mut raster = Raster::filled(size, size, base);

    let band_tints: Vec<f32> = (0..WOOD_BANDS).map(|_| rng.gen_range(0.9..1.06)).collect();

    for y in 0..size {
        let band = (y / band_h) % WOOD_BANDS;
        let tint = band_tints[band as usize];
        for x in 0..size {
            // Three full waves across the width keeps both borders in phase
            let wobble =
                0.04 * (TAU * 3.0 * f64::from(x) / f64::from(size) + f64::from(band) * 1.7).sin();
            let color = base.scaled(tint + wobble as f32);
            raster.put(x, y, color.to_rgba8());
        }
    }

    // A handful of longer wavy grain lines
    let grain = base.scaled(0.72);
    for _ in 0..6 {
        let y0 = f64::from(rng.gen_range(0..size));
        let amp: f64 = rng.gen_range(1.5..4.0);
        let phase = rng.gen_range(0.0..TAU);
        for x in 0..size {
            let y = amp.mul_add(
                (TAU * 2.0 * f64::from(x) / f64::from(size) + phase).sin(),
                y0,
            );
            raster.put_wrapped(i64::from(x), y.round() as i64, grain.to_rgba8());
        }
    }

    raster
}

fn tile(size: u32, base: Color3, rng: &mut StdRng) -> Raster {
    let layout = tile_layout(size);
    let grout = base.scaled(0.5);
    let mut raster = Raster::filled(size, size, grout);

    for ty in 0..layout.tiles {
        for tx in 0..layout.tiles {
            let x0 = i64::from(tx * layout.tile + layout.grout);
            let y0 = i64::from(ty * layout.tile + layout.grout);
            let edge = layout.tile.saturating_sub(layout.grout);
            let tint = rng.gen_range(0.95..1.05);
            raster.fill_rect_wrapped(x0, y0, edge, edge, base.scaled(tint).to_rgba8());
        }
    }

    raster
}

fn marble(size: u32, base: Color3) -> Raster {
    let mut raster = Raster::filled(size, size, base);

    for y in 0..size {
        let v = TAU * f64::from(y) / f64::from(size);
        for x in 0..size {
            let u = TAU * f64::from(x) / f64::from(size);
            // Two layered sinusoidal fields; integer frequencies keep the
            // borders in phase
            let vein =
                ((2.0 * u + 3.0 * v.sin()).sin() + (3.0 * v + 2.0 * (2.0 * u).sin()).sin()) * 0.5;
            let factor = 1.0 - 0.18 * vein.abs() as f32;
            raster.put(x, y, base.scaled(factor).to_rgba8());
        }
    }

    raster
}

fn brushed(size: u32, base: Color3, rng: &mut StdRng) -> Raster {
    let mut raster = Raster::filled(size, size, base);
    let min_len = (size / 16).max(1);
    let max_len = (size / 4).max(2);

    for _ in 0..(size as usize * 2) {
        let y = i64::from(rng.gen_range(0..size));
        let x0 = i64::from(rng.gen_range(0..size));
        let len = rng.gen_range(min_len..max_len);
        let color = base.offset(rng.gen_range(-0.06..0.06));
        let px = color.to_rgba8();
        for dx in 0..i64::from(len) {
            raster.put_wrapped(x0 + dx, y, px);
        }
    }

    raster
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config(size: u32, seed: u64) -> TextureConfig {
        TextureConfig::default().with_size(size).with_seed(seed)
    }

    #[test]
    fn seeded_output_is_reproducible() {
        for pattern in Pattern::ALL {
            let base = Color3::new(0.6, 0.5, 0.4);
            let a = generate_diffuse(pattern, base, &config(64, 99)).unwrap();
            let b = generate_diffuse(pattern, base, &config(64, 99)).unwrap();
            assert_eq!(a.data(), b.data(), "pattern {pattern} not reproducible");
        }
    }

    #[test]
    fn different_seeds_vary_speckle() {
        let base = Color3::new(0.6, 0.6, 0.58);
        let a = generate_diffuse(Pattern::Concrete, base, &config(64, 1)).unwrap();
        let b = generate_diffuse(Pattern::Concrete, base, &config(64, 2)).unwrap();
        assert_ne!(a.data(), b.data());
    }

    #[test]
    fn zero_size_fails() {
        let bad = TextureConfig::default().with_size(0);
        assert!(generate_diffuse(Pattern::None, Color3::WHITE, &bad).is_err());
    }

    #[test]
    fn flat_pattern_is_uniform_base() {
        let base = Color3::new(0.2, 0.45, 0.2);
        let raster = generate_diffuse(Pattern::None, base, &config(16, 0)).unwrap();
        let expected = base.to_rgba8();
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(raster.pixel(x, y), expected);
            }
        }
    }

    #[test]
    fn concrete_mean_stays_near_base() {
        let base = Color3::new(0.6, 0.6, 0.58);
        let raster = generate_diffuse(Pattern::Concrete, base, &config(128, 5)).unwrap();
        let mean = raster.mean_color();
        assert!((mean.r - base.r).abs() < 0.05);
        assert!((mean.g - base.g).abs() < 0.05);
        assert!((mean.b - base.b).abs() < 0.05);
    }

    #[test]
    fn brick_has_mortar_at_origin() {
        let base = Color3::new(0.62, 0.28, 0.2);
        let raster = generate_diffuse(Pattern::Brick, base, &config(256, 3)).unwrap();
        // Row zero lies inside the first mortar line
        let mortar = base.scaled(0.55).to_rgba8();
        for x in 0..256 {
            assert_eq!(raster.pixel(x, 0), mortar);
        }
    }

    #[test]
    fn brick_faces_differ_from_mortar() {
        let base = Color3::new(0.62, 0.28, 0.2);
        let raster = generate_diffuse(Pattern::Brick, base, &config(256, 3)).unwrap();
        let mortar = base.scaled(0.55).to_rgba8();
        // Interior of the first brick
        let inside = raster.pixel(10, 10);
        assert_ne!(inside, mortar);
    }

    #[test]
    fn tile_grout_columns_are_periodic() {
        let base = Color3::new(0.8, 0.45, 0.3);
        let size = 256;
        let raster = generate_diffuse(Pattern::Tile, base, &config(size, 4)).unwrap();
        let grout = base.scaled(0.5).to_rgba8();
        let tile_edge = size / 8;
        // The first grout column of every tile survives untouched
        for k in 0..8 {
            for y in 0..size {
                assert_eq!(raster.pixel(k * tile_edge, y), grout);
            }
        }
    }

    #[test]
    fn wood_bands_vary_by_row() {
        let base = Color3::new(0.52, 0.37, 0.26);
        let raster = generate_diffuse(Pattern::Wood, base, &config(128, 8)).unwrap();
        let band_h = 128 / 16;
        let mut distinct = std::collections::HashSet::new();
        for band in 0..16 {
            distinct.insert(raster.pixel(0, band * band_h));
        }
        assert!(distinct.len() > 1, "wood bands are uniform");
    }

    #[test]
    fn marble_is_deterministic_without_a_seed() {
        let base = Color3::new(0.92, 0.92, 0.95);
        let plain = TextureConfig::default().with_size(64);
        let a = generate_diffuse(Pattern::Marble, base, &plain).unwrap();
        let b = generate_diffuse(Pattern::Marble, base, &plain).unwrap();
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn marble_wraps_smoothly_at_the_border() {
        let base = Color3::new(0.92, 0.92, 0.95);
        let size = 256;
        let raster =
            generate_diffuse(Pattern::Marble, base, &TextureConfig::default().with_size(size))
                .unwrap();
        for y in 0..size {
            let left = raster.pixel(0, y);
            let right = raster.pixel(size - 1, y);
            for c in 0..3 {
                let diff = i16::from(left[c]) - i16::from(right[c]);
                assert!(diff.abs() <= 8, "seam at row {y}: {left:?} vs {right:?}");
            }
        }
    }

    #[test]
    fn brushed_streaks_touch_most_rows() {
        let base = Color3::new(0.75, 0.77, 0.8);
        let raster = generate_diffuse(Pattern::Brushed, base, &config(64, 6)).unwrap();
        let plain = base.to_rgba8();
        let mut touched = 0;
        for y in 0..64 {
            if (0..64).any(|x| raster.pixel(x, y) != plain) {
                touched += 1;
            }
        }
        assert!(touched > 32, "only {touched} rows carry streaks");
    }
}
