//! Pattern names and synthesis configuration.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{TextureError, TextureResult};

/// Default raster edge length in pixels.
pub const DEFAULT_TEXTURE_SIZE: u32 = 512;

/// The procedural surface patterns the synthesizer can paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Pattern {
    /// Speckled aggregate with hairline cracks.
    Concrete,
    /// Offset running-bond grid with mortar lines.
    Brick,
    /// Horizontal bands with sinusoidal grain.
    Wood,
    /// Square grid with grout lines.
    Tile,
    /// Layered sinusoidal veining.
    Marble,
    /// Dense speckle with bright flecks and cracks.
    Granite,
    /// Horizontal single-row streaks.
    Brushed,
    /// Flat base color, no structure.
    None,
}

impl Pattern {
    /// All patterns in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Concrete,
        Self::Brick,
        Self::Wood,
        Self::Tile,
        Self::Marble,
        Self::Granite,
        Self::Brushed,
        Self::None,
    ];

    /// Lowercase pattern name, matching preset configuration keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Concrete => "concrete",
            Self::Brick => "brick",
            Self::Wood => "wood",
            Self::Tile => "tile",
            Self::Marble => "marble",
            Self::Granite => "granite",
            Self::Brushed => "brushed",
            Self::None => "none",
        }
    }

    /// Resolve a pattern from its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl FromStr for Pattern {
    type Err = TextureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| TextureError::UnknownPattern(s.to_owned()))
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for texture synthesis.
///
/// # Example
///
/// ```
/// use maquette_texture::TextureConfig;
///
/// let config = TextureConfig::default().with_size(256).with_seed(42);
/// assert_eq!(config.size, 256);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextureConfig {
    /// Raster edge length in pixels (the output is square).
    pub size: u32,
    /// Optional seed for reproducible speckle and streak placement.
    ///
    /// `None` draws fresh entropy per call.
    pub seed: Option<u64>,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_TEXTURE_SIZE,
            seed: None,
        }
    }
}

impl TextureConfig {
    /// Set the raster edge length (builder pattern).
    #[must_use]
    pub const fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set a seed for reproducible output (builder pattern).
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`TextureError::InvalidSize`] for a zero-pixel raster.
    pub const fn validate(&self) -> TextureResult<()> {
        if self.size == 0 {
            return Err(TextureError::InvalidSize(self.size));
        }
        Ok(())
    }
}
