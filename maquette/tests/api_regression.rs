//! API regression tests for the maquette crate family.
//!
//! A stability suite over the public surface, organized in tiers of
//! increasing depth:
//!
//! - Tier 1: Foundation (maquette-types)
//! - Tier 2: Segmentation (maquette-zones)
//! - Tier 3: Materials (maquette-material)
//! - Tier 4: Textures & UVs (maquette-texture)
//!
//! A failure here after an API change flags a breaking change that needs
//! a version bump.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use maquette::{material, prelude::*, texture, types, zones};

// =============================================================================
// TIER 1: Foundation - Soup, Bounds, Color
// =============================================================================

mod tier1_foundation {
    use super::*;

    #[test]
    fn soup_construction_and_access() {
        let soup = types::TriangleSoup::from_positions(vec![
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0,
        ]);
        assert_eq!(soup.face_count(), 1);
        assert_eq!(soup.vertex_count(), 3);

        let p = soup.position(0, 2);
        assert!((p.y - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn soup_attribute_builders() {
        let soup = types::TriangleSoup::from_positions(vec![0.0; 9])
            .with_normals(vec![0.0; 9])
            .with_colors(vec![0.5; 9]);
        assert!(soup.has_normals());
        assert!(soup.has_colors());
    }

    #[test]
    fn aabb_expansion() {
        let mut aabb = types::Aabb::empty();
        assert!(aabb.is_empty());
        aabb.expand_to_include(&Point3::new(1.0, 2.0, 3.0));
        assert!(!aabb.is_empty());
    }

    #[test]
    fn color_quantization_api() {
        let color = Color3::new(0.5, 0.5, 0.5);
        assert_eq!(color.quantized_key(), (25, 25, 25));
        assert!(color.distance_to(color) < 1e-7);
    }

    #[test]
    fn primitive_builders() {
        let cube = unit_cube();
        assert_eq!(cube.face_count(), 12);

        let box2 = cuboid(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 1.0, 1.0));
        assert!((box2.bounds().width() - 2.0).abs() < f64::EPSILON);
    }
}

// =============================================================================
// TIER 2: Segmentation - Adjacency, Components, Zones
// =============================================================================

mod tier2_segmentation {
    use super::*;

    #[test]
    fn adjacency_over_soup() {
        let cube = unit_cube();
        let adjacency = zones::FaceAdjacency::from_soup(&cube);
        assert_eq!(adjacency.face_count(), 12);
        // Every cube face touches at least one neighbor
        for face in 0..12 {
            assert!(!adjacency.neighbors(face).is_empty());
        }
    }

    #[test]
    fn component_statistics_api() {
        let cube = unit_cube();
        let adjacency = zones::FaceAdjacency::from_soup(&cube);
        let components = zones::find_components(&cube, &adjacency);
        assert_eq!(components.len(), 1);

        let component = &components[0];
        assert_eq!(component.face_count(), 12);
        assert!(!component.is_degenerate());
        assert!(component.avg_normal_z().abs() < 1e-9);
        assert!(!component.bounds().is_empty());
    }

    #[test]
    fn zone_enum_is_stable() {
        assert_eq!(Zone::ALL.len(), 8);
        for zone in Zone::ALL {
            assert!(!zone.name().is_empty());
            assert!(!zone.default_material().is_empty());
        }
    }

    #[test]
    fn classify_zones_output_contract() {
        let groups = classify_zones(&unit_cube());
        assert_eq!(groups.len(), 1);
        let group = &groups[0];
        assert!(group.faces.windows(2).all(|w| w[0] < w[1]), "faces sorted");
    }
}

// =============================================================================
// TIER 3: Materials - Presets, Library, Color Groups
// =============================================================================

mod tier3_materials {
    use super::*;

    #[test]
    fn preset_builder_api() {
        let preset = material::MaterialPreset::new("custom", "tile")
            .with_color(0.1, 0.2, 0.3)
            .with_metalness(0.2)
            .with_roughness(0.6);
        assert_eq!(preset.name(), "custom");
        assert_eq!(preset.pattern(), "tile");
        assert_eq!(preset.colors().len(), 1);
    }

    #[test]
    fn library_lookup_and_errors() {
        let library = MaterialLibrary::builtin();
        assert!(!library.is_empty());
        assert!(library.get("glass").is_some());

        let err = library.require("missing").unwrap_err();
        assert!(matches!(err, material::MaterialError::UnknownPreset(_)));
    }

    #[test]
    fn match_color_contract() {
        let library = MaterialLibrary::builtin();
        let m = library.match_color(Color3::new(0.75, 0.77, 0.8)).unwrap();
        assert_eq!(m.preset, "steel");
        assert_eq!(m.distance, 0.0);
    }

    #[test]
    fn color_grouping_over_soup() {
        let soup = types::TriangleSoup::from_positions(vec![
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
        ])
        .with_colors(vec![0.2, 0.45, 0.2, 0.2, 0.45, 0.2, 0.2, 0.45, 0.2]);

        let groups = group_by_color(&soup, &MaterialLibrary::builtin());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].matched.as_ref().unwrap().preset, "hedge");
    }
}

// =============================================================================
// TIER 4: Textures & UVs
// =============================================================================

mod tier4_textures {
    use super::*;

    #[test]
    fn pattern_names_are_stable() {
        assert_eq!(texture::Pattern::ALL.len(), 8);
        assert_eq!(texture::Pattern::from_name("brick"), Some(Pattern::Brick));
        assert_eq!(Pattern::Granite.name(), "granite");
    }

    #[test]
    fn texture_config_builder() {
        let config = TextureConfig::default().with_size(128).with_seed(7);
        assert_eq!(config.size, 128);
        assert_eq!(config.seed, Some(7));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn diffuse_and_bump_share_dimensions() {
        let config = TextureConfig::default().with_size(32).with_seed(1);
        let diffuse = generate_diffuse(Pattern::Tile, Color3::new(0.8, 0.45, 0.3), &config)
            .expect("valid config");
        let bump = generate_bump(Pattern::Tile, &config).expect("valid config");
        assert_eq!(diffuse.width(), bump.width());
        assert_eq!(diffuse.height(), bump.height());
    }

    #[test]
    fn triplanar_writes_uv_buffer() {
        let mut cube = unit_cube();
        project_triplanar(&mut cube);
        let uvs = cube.uvs().expect("projection writes uvs");
        assert_eq!(uvs.len(), cube.vertex_count() * 2);
    }

    #[test]
    fn triplanar_reference_example() {
        // The canonical projection example: an upward unit right triangle
        let mut soup = types::TriangleSoup::from_positions(vec![
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0,
        ])
        .with_normals(vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);

        project_triplanar(&mut soup);
        let uvs = soup.uvs().expect("projection writes uvs");
        let expected: [f32; 6] = [0.0, 0.0, 0.1, 0.0, 0.0, 0.1];
        for (got, want) in uvs.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6);
        }
    }
}
