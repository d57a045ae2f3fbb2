//! Procedural bump painters.
//!
//! Every bump map starts from neutral gray and raises or lowers the same
//! structural features its diffuse counterpart draws: mortar and grout
//! recess while brick and tile edges gain a ridge, wood gets a sinusoidal
//! channel along its bands, speckle patterns get matching height noise.

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

use crate::error::TextureResult;
use crate::grid::{WOOD_BANDS, brick_layout, draw_crack, make_rng, tile_layout};
use crate::pattern::{Pattern, TextureConfig};
use crate::raster::Raster;

/// Flat height of an unstructured surface.
const NEUTRAL: f32 = 128.0;

/// Convert a height value to a gray RGBA pixel.
fn gray(value: f32) -> [u8; 4] {
    let v = value.clamp(0.0, 255.0).round() as u8;
    [v, v, v, 255]
}

/// Synthesize the bump raster for a pattern.
///
/// The output shares its structural geometry with
/// [`generate_diffuse`](crate::generate_diffuse) for the same pattern and
/// size, and tiles seamlessly in both axes. Bump maps carry no base
/// color: height is a property of the pattern alone.
///
/// # Errors
///
/// Returns [`TextureError::InvalidSize`](crate::TextureError::InvalidSize)
/// for a zero-pixel raster.
pub fn generate_bump(pattern: Pattern, config: &TextureConfig) -> TextureResult<Raster> {
    config.validate()?;
    let mut rng = make_rng(config);
    let size = config.size;

    let raster = match pattern {
        Pattern::None => Raster::filled_gray(size, size, NEUTRAL as u8),
        Pattern::Concrete => speckle_bump(size, &mut rng, 0.12, 12.0, 6),
        Pattern::Granite => speckle_bump(size, &mut rng, 0.35, 18.0, 4),
        Pattern::Brick => brick_bump(size, &mut rng),
        Pattern::Wood => wood_bump(size),
        Pattern::Tile => tile_bump(size),
        Pattern::Marble => marble_bump(size),
        Pattern::Brushed => brushed_bump(size, &mut rng),
    };

    debug!(pattern = %pattern, size, "synthesized bump raster");
    Ok(raster)
}

/// Height noise matching the diffuse speckle, plus recessed cracks.
fn speckle_bump(size: u32, rng: &mut StdRng, density: f32, amplitude: f32, cracks: u32) -> Raster {
    let mut raster = Raster::filled_gray(size, size, NEUTRAL as u8);

    for y in 0..size {
        for x in 0..size {
            if rng.r#gen::<f32>() < density {
                let delta = rng.gen_range(-amplitude..amplitude);
                raster.put(x, y, gray(NEUTRAL + delta));
            }
        }
    }

    for _ in 0..cracks {
        draw_crack(&mut raster, rng, gray(100.0));
    }

    raster
}

fn brick_bump(size: u32, rng: &mut StdRng) -> Raster {
    let layout = brick_layout(size);
    // Mortar sits recessed below the brick faces
    let mut raster = Raster::filled_gray(size, size, 92);

    for row in 0..layout.rows {
        let y0 = i64::from(row * layout.brick_h);
        let x_off = if row % 2 == 1 {
            i64::from(layout.brick_w / 2)
        } else {
            0
        };

        for col in 0..layout.cols {
            let x0 = i64::from(col * layout.brick_w) + x_off + i64::from(layout.mortar);
            let y1 = y0 + i64::from(layout.mortar);
            let w = layout.brick_w.saturating_sub(layout.mortar);
            let h = layout.brick_h.saturating_sub(layout.mortar);

            raster.fill_rect_wrapped(x0, y1, w, h, gray(136.0));

            // Faint height noise across the face
            for _ in 0..(w as usize * h as usize / 24) {
                let dx = rng.gen_range(0..w.max(1));
                let dy = rng.gen_range(0..h.max(1));
                let delta = rng.gen_range(-6.0..6.0);
                raster.put_wrapped(x0 + i64::from(dx), y1 + i64::from(dy), gray(136.0 + delta));
            }

            // Ridge outline along the brick border
            outline_wrapped(&mut raster, x0, y1, w, h, gray(168.0));
        }
    }

    raster
}

fn tile_bump(size: u32) -> Raster {
    let layout = tile_layout(size);
    // Grout recessed, tile faces neutral
    let mut raster = Raster::filled_gray(size, size, 90);

    for ty in 0..layout.tiles {
        for tx in 0..layout.tiles {
            let x0 = i64::from(tx * layout.tile + layout.grout);
            let y0 = i64::from(ty * layout.tile + layout.grout);
            let edge = layout.tile.saturating_sub(layout.grout);

            raster.fill_rect_wrapped(x0, y0, edge, edge, gray(NEUTRAL));
            outline_wrapped(&mut raster, x0, y0, edge, edge, gray(160.0));
        }
    }

    raster
}

fn wood_bump(size: u32) -> Raster {
    let mut raster = Raster::filled_gray(size, size, NEUTRAL as u8);

    for y in 0..size {
        // One full channel wave per band keeps the vertical borders in phase
        let channel =
            18.0 * (TAU * f64::from(WOOD_BANDS) * f64::from(y) / f64::from(size)).sin() as f32;
        let px = gray(NEUTRAL + channel);
        for x in 0..size {
            raster.put(x, y, px);
        }
    }

    raster
}

fn marble_bump(size: u32) -> Raster {
    let mut raster = Raster::filled_gray(size, size, NEUTRAL as u8);

    for y in 0..size {
        let v = TAU * f64::from(y) / f64::from(size);
        for x in 0..size {
            let u = TAU * f64::from(x) / f64::from(size);
            // Same vein field as the diffuse painter, as a shallow channel
            let vein =
                ((2.0 * u + 3.0 * v.sin()).sin() + (3.0 * v + 2.0 * (2.0 * u).sin()).sin()) * 0.5;
            raster.put(x, y, gray(NEUTRAL - 12.0 * vein.abs() as f32));
        }
    }

    raster
}

fn brushed_bump(size: u32, rng: &mut StdRng) -> Raster {
    let mut raster = Raster::filled_gray(size, size, NEUTRAL as u8);
    let min_len = (size / 16).max(1);
    let max_len = (size / 4).max(2);

    for _ in 0..(size as usize * 2) {
        let y = i64::from(rng.gen_range(0..size));
        let x0 = i64::from(rng.gen_range(0..size));
        let len = rng.gen_range(min_len..max_len);
        let px = gray(NEUTRAL + rng.gen_range(-10.0..10.0));
        for dx in 0..i64::from(len) {
            raster.put_wrapped(x0 + dx, y, px);
        }
    }

    raster
}

/// Draw a one-pixel rectangle outline with wrapped coordinates.
fn outline_wrapped(raster: &mut Raster, x0: i64, y0: i64, w: u32, h: u32, px: [u8; 4]) {
    if w == 0 || h == 0 {
        return;
    }
    let w = i64::from(w);
    let h = i64::from(h);
    for dx in 0..w {
        raster.put_wrapped(x0 + dx, y0, px);
        raster.put_wrapped(x0 + dx, y0 + h - 1, px);
    }
    for dy in 0..h {
        raster.put_wrapped(x0, y0 + dy, px);
        raster.put_wrapped(x0 + w - 1, y0 + dy, px);
    }
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
            let a = generate_bump(pattern, &config(64, 11)).unwrap();
            let b = generate_bump(pattern, &config(64, 11)).unwrap();
            assert_eq!(a.data(), b.data(), "pattern {pattern} not reproducible");
        }
    }

    #[test]
    fn flat_pattern_is_neutral() {
        let raster = generate_bump(Pattern::None, &config(16, 0)).unwrap();
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(raster.pixel(x, y), [128, 128, 128, 255]);
            }
        }
    }

    #[test]
    fn zero_size_fails() {
        let bad = TextureConfig::default().with_size(0);
        assert!(generate_bump(Pattern::Brick, &bad).is_err());
    }

    #[test]
    fn brick_mortar_recessed_and_edges_raised() {
        let size = 256;
        let raster = generate_bump(Pattern::Brick, &config(size, 2)).unwrap();

        // Row zero lies in the mortar
        assert_eq!(raster.pixel(0, 0), [92, 92, 92, 255]);

        // The brick outline carries the ridge value somewhere on the first
        // brick border row
        let layout_border_y = 1;
        let found_ridge = (0..size).any(|x| raster.pixel(x, layout_border_y)[0] == 168);
        assert!(found_ridge, "no ridge outline on brick border");
    }

    #[test]
    fn brick_structure_matches_diffuse_geometry() {
        use maquette_types::Color3;

        let size = 256;
        let bump = generate_bump(Pattern::Brick, &config(size, 2)).unwrap();
        let diffuse = crate::generate_diffuse(
            Pattern::Brick,
            Color3::new(0.62, 0.28, 0.2),
            &config(size, 2),
        )
        .unwrap();

        // Wherever the diffuse map painted mortar rows, the bump map is
        // recessed: both derive row zero from the same layout
        let mortar_px = Color3::new(0.62, 0.28, 0.2).scaled(0.55).to_rgba8();
        for x in 0..size {
            assert_eq!(diffuse.pixel(x, 0), mortar_px);
            assert_eq!(bump.pixel(x, 0)[0], 92);
        }
    }

    #[test]
    fn tile_grout_recessed() {
        let size = 256;
        let raster = generate_bump(Pattern::Tile, &config(size, 3)).unwrap();
        let tile_edge = size / 8;
        for k in 0..8 {
            for y in 0..size {
                assert_eq!(raster.pixel(k * tile_edge, y)[0], 90);
            }
        }
    }

    #[test]
    fn wood_channel_oscillates() {
        let size = 128;
        let raster = generate_bump(Pattern::Wood, &config(size, 4)).unwrap();
        let mut min = 255;
        let mut max = 0;
        for y in 0..size {
            let v = raster.pixel(0, y)[0];
            min = min.min(v);
            max = max.max(v);
        }
        assert!(min < 120, "channel never dips: min {min}");
        assert!(max > 136, "channel never rises: max {max}");
    }

    #[test]
    fn concrete_noise_spreads_around_neutral() {
        let raster = generate_bump(Pattern::Concrete, &config(128, 5)).unwrap();
        let mean = raster.mean_color();
        // Mean height stays near neutral gray
        assert!((mean.r - 128.0 / 255.0).abs() < 0.05);
    }
}
