//! One-call orchestration of the full engine.
//!
//! The stages are usable on their own; this module runs them in the
//! order the original system does and gathers the combined output
//! contract: zone groups, color groups, synthesized textures, and the
//! UV buffer written onto the mesh.

use hashbrown::HashSet;
use tracing::{debug, warn};

use maquette_material::{ColorGroup, MaterialLibrary, group_by_color};
use maquette_texture::{
    Pattern, Raster, TextureConfig, UV_TILE_SCALE, generate_bump, generate_diffuse,
    project_triplanar_scaled,
};
use maquette_types::{Color3, TriangleSoup};
use maquette_zones::{ZoneGroup, classify_zones};

/// Configuration for a full pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    /// Texture synthesis settings (size, seed).
    pub texture: TextureConfig,
    /// Tiling factor for the triplanar projection.
    pub uv_scale: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            texture: TextureConfig::default(),
            uv_scale: UV_TILE_SCALE,
        }
    }
}

impl PipelineConfig {
    /// Set the texture config (builder pattern).
    #[must_use]
    pub const fn with_texture(mut self, texture: TextureConfig) -> Self {
        self.texture = texture;
        self
    }

    /// Set the UV tiling factor (builder pattern).
    #[must_use]
    pub const fn with_uv_scale(mut self, scale: f64) -> Self {
        self.uv_scale = scale;
        self
    }
}

/// A synthesized diffuse/bump raster pair.
///
/// Keyed by pattern plus quantized base color: groups sharing both reuse
/// one pair.
#[derive(Debug, Clone)]
pub struct GeneratedTexture {
    /// The procedural pattern.
    pub pattern: Pattern,
    /// Base color the diffuse raster was painted from.
    pub base_color: Color3,
    /// Diffuse raster.
    pub diffuse: Raster,
    /// Bump raster.
    pub bump: Raster,
}

/// Everything a pipeline run produces besides the UV buffer it writes
/// onto the mesh.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    /// Zone groups with default material bindings.
    pub zone_groups: Vec<ZoneGroup>,
    /// Color groups with matched presets (empty without a color buffer).
    pub color_groups: Vec<ColorGroup>,
    /// Deduplicated texture pairs for every referenced material.
    pub textures: Vec<GeneratedTexture>,
}

/// Run the whole engine over one mesh.
///
/// Classifies zones, groups colors when a color buffer is present,
/// synthesizes one diffuse/bump pair per distinct (pattern, base color),
/// and writes triplanar UVs onto the soup. Malformed or empty input
/// produces an empty output, never an error: callers keep rendering
/// partially loaded previews.
///
/// Texture base colors come from the matched preset's first reference
/// color for zone groups, and from the group's own representative color
/// for color groups.
#[must_use]
pub fn process(
    soup: &mut TriangleSoup,
    library: &MaterialLibrary,
    config: &PipelineConfig,
) -> PipelineOutput {
    let zone_groups = classify_zones(soup);
    let color_groups = group_by_color(soup, library);

    let mut requests: Vec<(Pattern, Color3)> = Vec::new();

    for group in &zone_groups {
        match library.get(&group.material) {
            Some(preset) => {
                let pattern = Pattern::from_name(preset.pattern()).unwrap_or(Pattern::None);
                requests.push((pattern, preset.base_color()));
            }
            None => warn!(material = %group.material, "zone default has no preset"),
        }
    }

    for group in &color_groups {
        if let Some(matched) = &group.matched {
            if let Some(preset) = library.get(&matched.preset) {
                let pattern = Pattern::from_name(preset.pattern()).unwrap_or(Pattern::None);
                requests.push((pattern, group.color));
            }
        }
    }

    let mut seen: HashSet<(Pattern, (i32, i32, i32))> = HashSet::new();
    let mut textures = Vec::new();

    for (pattern, base_color) in requests {
        if !seen.insert((pattern, base_color.quantized_key())) {
            continue;
        }
        let diffuse = generate_diffuse(pattern, base_color, &config.texture);
        let bump = generate_bump(pattern, &config.texture);
        match (diffuse, bump) {
            (Ok(diffuse), Ok(bump)) => textures.push(GeneratedTexture {
                pattern,
                base_color,
                diffuse,
                bump,
            }),
            _ => warn!(pattern = %pattern, "texture synthesis skipped"),
        }
    }

    project_triplanar_scaled(soup, config.uv_scale);

    debug!(
        zones = zone_groups.len(),
        color_groups = color_groups.len(),
        textures = textures.len(),
        "pipeline complete"
    );

    PipelineOutput {
        zone_groups,
        color_groups,
        textures,
    }
}
