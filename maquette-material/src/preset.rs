//! Material presets and the preset library.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use maquette_types::Color3;

use crate::error::{MaterialError, MaterialResult};

/// A named bundle of physically based material parameters.
///
/// Presets pair PBR scalars with the reference colors a model author is
/// likely to paint for that material and the procedural pattern used to
/// synthesize its textures. They are static configuration: the engine
/// looks presets up by name and never derives them.
///
/// # Example
///
/// ```
/// use maquette_material::MaterialPreset;
///
/// let preset = MaterialPreset::new("chrome", "brushed")
///     .with_color(0.8, 0.8, 0.85)
///     .with_metalness(1.0)
///     .with_roughness(0.1);
///
/// assert_eq!(preset.name(), "chrome");
/// assert_eq!(preset.metalness(), 1.0);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialPreset {
    name: String,
    pattern: String,
    colors: Vec<Color3>,
    metalness: f32,
    roughness: f32,
    env_intensity: f32,
    transmission: Option<f32>,
    clearcoat: Option<f32>,
    opacity: Option<f32>,
}

impl MaterialPreset {
    /// Create a preset with default scalars (dielectric, fairly rough).
    #[must_use]
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            colors: Vec::new(),
            metalness: 0.0,
            roughness: 0.8,
            env_intensity: 1.0,
            transmission: None,
            clearcoat: None,
            opacity: None,
        }
    }

    /// Register a reference color (builder pattern).
    ///
    /// A preset may carry several reference colors; the matcher compares
    /// against every one of them.
    #[must_use]
    pub fn with_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.colors.push(Color3::new(r, g, b));
        self
    }

    /// Set metalness (builder pattern).
    #[must_use]
    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness.clamp(0.0, 1.0);
        self
    }

    /// Set roughness (builder pattern).
    #[must_use]
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness.clamp(0.0, 1.0);
        self
    }

    /// Set environment intensity (builder pattern).
    #[must_use]
    pub fn with_env_intensity(mut self, intensity: f32) -> Self {
        self.env_intensity = intensity.max(0.0);
        self
    }

    /// Set transmission for translucent materials (builder pattern).
    #[must_use]
    pub fn with_transmission(mut self, transmission: f32) -> Self {
        self.transmission = Some(transmission.clamp(0.0, 1.0));
        self
    }

    /// Set clearcoat (builder pattern).
    #[must_use]
    pub fn with_clearcoat(mut self, clearcoat: f32) -> Self {
        self.clearcoat = Some(clearcoat.clamp(0.0, 1.0));
        self
    }

    /// Set opacity for partially transparent materials (builder pattern).
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Preset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Procedural pattern key.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Registered reference colors.
    #[must_use]
    pub fn colors(&self) -> &[Color3] {
        &self.colors
    }

    /// The first reference color, used as the texture base.
    ///
    /// Presets without colors fall back to mid gray.
    #[must_use]
    pub fn base_color(&self) -> Color3 {
        self.colors
            .first()
            .copied()
            .unwrap_or(Color3::new(0.5, 0.5, 0.5))
    }

    /// Metalness (0-1).
    #[must_use]
    pub const fn metalness(&self) -> f32 {
        self.metalness
    }

    /// Roughness (0-1).
    #[must_use]
    pub const fn roughness(&self) -> f32 {
        self.roughness
    }

    /// Environment intensity.
    #[must_use]
    pub const fn env_intensity(&self) -> f32 {
        self.env_intensity
    }

    /// Transmission, if the material is translucent.
    #[must_use]
    pub const fn transmission(&self) -> Option<f32> {
        self.transmission
    }

    /// Clearcoat, if any.
    #[must_use]
    pub const fn clearcoat(&self) -> Option<f32> {
        self.clearcoat
    }

    /// Opacity, if the material is partially transparent.
    #[must_use]
    pub const fn opacity(&self) -> Option<f32> {
        self.opacity
    }
}

/// The closest preset for a color, with its RGB distance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorMatch {
    /// Name of the matched preset.
    pub preset: String,
    /// Euclidean RGB distance to the nearest reference color.
    pub distance: f32,
}

/// An ordered collection of material presets.
///
/// Declaration order is significant: nearest-color ties resolve to the
/// earliest preset, and lookups scan in order.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialLibrary {
    presets: Vec<MaterialPreset>,
}

impl MaterialLibrary {
    /// Create an empty library.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            presets: Vec::new(),
        }
    }

    /// The default preset table.
    ///
    /// Covers the zone default keys plus the common paint colors the
    /// geometry compiler's palette produces. Reference colors are in 0-1
    /// RGB.
    #[must_use]
    pub fn builtin() -> Self {
        let mut library = Self::new();

        library.add(
            MaterialPreset::new("plaster", "concrete")
                .with_color(0.95, 0.93, 0.88)
                .with_color(0.88, 0.87, 0.84)
                .with_roughness(0.9),
        );
        library.add(
            MaterialPreset::new("concrete", "concrete")
                .with_color(0.6, 0.6, 0.58)
                .with_color(0.5, 0.5, 0.5)
                .with_roughness(0.95),
        );
        library.add(
            MaterialPreset::new("brick", "brick")
                .with_color(0.62, 0.28, 0.2)
                .with_color(0.7, 0.35, 0.25)
                .with_roughness(0.85),
        );
        library.add(
            MaterialPreset::new("oak-wood", "wood")
                .with_color(0.52, 0.37, 0.26)
                .with_color(0.43, 0.29, 0.19)
                .with_roughness(0.7),
        );
        library.add(
            MaterialPreset::new("glass", "none")
                .with_color(0.7, 0.85, 0.9)
                .with_color(0.62, 0.78, 0.88)
                .with_roughness(0.05)
                .with_env_intensity(1.5)
                .with_transmission(0.9)
                .with_opacity(0.3),
        );
        library.add(
            MaterialPreset::new("granite", "granite")
                .with_color(0.35, 0.35, 0.37)
                .with_color(0.27, 0.27, 0.3)
                .with_roughness(0.6),
        );
        library.add(
            MaterialPreset::new("marble", "marble")
                .with_color(0.92, 0.92, 0.95)
                .with_color(0.85, 0.85, 0.9)
                .with_roughness(0.3)
                .with_env_intensity(1.2)
                .with_clearcoat(0.5),
        );
        library.add(
            MaterialPreset::new("steel", "brushed")
                .with_color(0.75, 0.77, 0.8)
                .with_metalness(1.0)
                .with_roughness(0.35)
                .with_env_intensity(1.3),
        );
        library.add(
            MaterialPreset::new("copper", "brushed")
                .with_color(0.72, 0.45, 0.2)
                .with_metalness(1.0)
                .with_roughness(0.45)
                .with_env_intensity(1.4),
        );
        library.add(
            MaterialPreset::new("terracotta", "tile")
                .with_color(0.8, 0.45, 0.3)
                .with_roughness(0.8),
        );
        library.add(
            MaterialPreset::new("slate", "tile")
                .with_color(0.25, 0.27, 0.3)
                .with_roughness(0.7),
        );
        library.add(
            MaterialPreset::new("hedge", "none")
                .with_color(0.2, 0.45, 0.2)
                .with_color(0.15, 0.35, 0.15)
                .with_roughness(1.0),
        );

        library
    }

    /// Add a preset at the end of the declaration order.
    pub fn add(&mut self, preset: MaterialPreset) {
        self.presets.push(preset);
    }

    /// Number of presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Check if the library has no presets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Iterate over presets in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &MaterialPreset> {
        self.presets.iter()
    }

    /// Look up a preset by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MaterialPreset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Look up a preset by name, or fail with a typed error.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::UnknownPreset`] when no preset carries
    /// the name.
    pub fn require(&self, name: &str) -> MaterialResult<&MaterialPreset> {
        self.get(name)
            .ok_or_else(|| MaterialError::UnknownPreset(name.to_owned()))
    }

    /// Find the preset whose reference color is nearest to `color`.
    ///
    /// Scans every reference color of every preset in declaration order,
    /// keeping the strictly smallest Euclidean RGB distance; ties keep
    /// the earlier preset. Pure: identical input always yields an
    /// identical result. Returns `None` when no preset carries a
    /// reference color.
    ///
    /// # Example
    ///
    /// ```
    /// use maquette_material::MaterialLibrary;
    /// use maquette_types::Color3;
    ///
    /// let library = MaterialLibrary::builtin();
    /// // An exact reference color matches at distance zero
    /// let m = library.match_color(Color3::new(0.35, 0.35, 0.37)).unwrap();
    /// assert_eq!(m.preset, "granite");
    /// assert_eq!(m.distance, 0.0);
    /// ```
    #[must_use]
    pub fn match_color(&self, color: Color3) -> Option<ColorMatch> {
        let mut best: Option<(usize, f32)> = None;

        for (index, preset) in self.presets.iter().enumerate() {
            for &reference in &preset.colors {
                let distance = color.distance_to(reference);
                let closer = best.is_none_or(|(_, d)| distance < d);
                if closer {
                    best = Some((index, distance));
                }
            }
        }

        best.map(|(index, distance)| ColorMatch {
            preset: self.presets[index].name.clone(),
            distance,
        })
    }
}

impl<'a> IntoIterator for &'a MaterialLibrary {
    type Item = &'a MaterialPreset;
    type IntoIter = std::slice::Iter<'a, MaterialPreset>;

    fn into_iter(self) -> Self::IntoIter {
        self.presets.iter()
    }
}

impl FromIterator<MaterialPreset> for MaterialLibrary {
    fn from_iter<I: IntoIterator<Item = MaterialPreset>>(iter: I) -> Self {
        let mut library = Self::new();
        for preset in iter {
            library.add(preset);
        }
        library
    }
}
