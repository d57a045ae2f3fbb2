//! RGB color with 0-1 float channels.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reciprocal of the color quantization step.
///
/// Channels are snapped to the nearest 1/50 before grouping, so colors
/// differing by rendering noise collapse to the same key while genuinely
/// different paint colors stay apart.
pub const COLOR_QUANT_STEPS: f32 = 50.0;

/// An RGB color with `f32` channels in the 0-1 range.
///
/// Vertex color buffers and material reference colors both use this
/// representation; the matcher measures plain Euclidean distance in RGB
/// space.
///
/// # Example
///
/// ```
/// use maquette_types::Color3;
///
/// let brick = Color3::new(0.65, 0.25, 0.2);
/// let key = brick.quantized_key();
/// assert_eq!(key, (33, 13, 10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color3 {
    /// Red channel (0-1).
    pub r: f32,
    /// Green channel (0-1).
    pub g: f32,
    /// Blue channel (0-1).
    pub b: f32,
}

impl Color3 {
    /// White (1, 1, 1).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a color from channels.
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Euclidean distance to another color in RGB space.
    ///
    /// # Example
    ///
    /// ```
    /// use maquette_types::Color3;
    ///
    /// let a = Color3::new(0.0, 0.0, 0.0);
    /// let b = Color3::new(1.0, 0.0, 0.0);
    /// assert!((a.distance_to(b) - 1.0).abs() < 1e-6);
    /// ```
    #[inline]
    #[must_use]
    pub fn distance_to(self, other: Self) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        db.mul_add(db, dr.mul_add(dr, dg * dg)).sqrt()
    }

    /// Integer grouping key on the 1/50 channel grid.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: channel values are 0-1, keys stay far inside i32 range
    pub fn quantized_key(self) -> (i32, i32, i32) {
        (
            (self.r * COLOR_QUANT_STEPS).round() as i32,
            (self.g * COLOR_QUANT_STEPS).round() as i32,
            (self.b * COLOR_QUANT_STEPS).round() as i32,
        )
    }

    /// Snap each channel to the nearest 1/50.
    #[inline]
    #[must_use]
    pub fn quantized(self) -> Self {
        let (r, g, b) = self.quantized_key();
        #[allow(clippy::cast_precision_loss)]
        // Precision: keys are small integers, exactly representable
        Self::new(
            r as f32 / COLOR_QUANT_STEPS,
            g as f32 / COLOR_QUANT_STEPS,
            b as f32 / COLOR_QUANT_STEPS,
        )
    }

    /// Multiply each channel by a factor, clamped to 0-1.
    ///
    /// Factors below one darken, above one lighten toward white.
    #[inline]
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(
            (self.r * factor).clamp(0.0, 1.0),
            (self.g * factor).clamp(0.0, 1.0),
            (self.b * factor).clamp(0.0, 1.0),
        )
    }

    /// Add a signed offset to every channel, clamped to 0-1.
    #[inline]
    #[must_use]
    pub fn offset(self, delta: f32) -> Self {
        Self::new(
            (self.r + delta).clamp(0.0, 1.0),
            (self.g + delta).clamp(0.0, 1.0),
            (self.b + delta).clamp(0.0, 1.0),
        )
    }

    /// Convert to 8-bit RGBA with full alpha.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Truncation and sign loss are safe: channels are clamped before * 255.0
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            255,
        ]
    }
}

impl From<[f32; 3]> for Color3 {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_symmetric() {
        let a = Color3::new(0.2, 0.4, 0.6);
        let b = Color3::new(0.5, 0.1, 0.9);
        assert!((a.distance_to(b) - b.distance_to(a)).abs() < 1e-7);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = Color3::new(0.3, 0.3, 0.3);
        assert!(a.distance_to(a).abs() < 1e-7);
    }

    #[test]
    fn nearby_colors_share_a_key() {
        // Less than half a grid step apart on every channel
        let a = Color3::new(0.500, 0.500, 0.500);
        let b = Color3::new(0.505, 0.496, 0.503);
        assert_eq!(a.quantized_key(), b.quantized_key());
    }

    #[test]
    fn colors_straddling_grid_boundary_split() {
        // The 1/50 grid has a boundary at 0.01 = half a step; 0.0099 rounds
        // down to key 0 while 0.0101 rounds up to key 1
        let below = Color3::new(0.0099, 0.0, 0.0);
        let above = Color3::new(0.0101, 0.0, 0.0);
        assert_ne!(below.quantized_key(), above.quantized_key());
    }

    #[test]
    fn quantized_snaps_channels() {
        let c = Color3::new(0.503, 0.247, 0.9);
        let q = c.quantized();
        assert!((q.r - 0.5).abs() < 1e-6);
        assert!((q.g - 0.24).abs() < 1e-6);
        assert!((q.b - 0.9).abs() < 1e-6);
    }

    #[test]
    fn scaled_clamps() {
        let c = Color3::new(0.8, 0.5, 0.1).scaled(2.0);
        assert!((c.r - 1.0).abs() < 1e-6);
        assert!((c.g - 1.0).abs() < 1e-6);
        assert!((c.b - 0.2).abs() < 1e-6);
    }

    #[test]
    fn rgba8_round_trip() {
        let c = Color3::new(1.0, 0.5, 0.0);
        let px = c.to_rgba8();
        assert_eq!(px, [255, 128, 0, 255]);
    }
}
