//! Face grouping by quantized vertex color.

use hashbrown::HashMap;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use maquette_types::{Color3, TriangleSoup};

use crate::preset::{ColorMatch, MaterialLibrary};

/// Faces sharing one quantized vertex color, bound to the nearest preset.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorGroup {
    /// Integer key on the 1/50 channel grid.
    pub key: (i32, i32, i32),
    /// Representative color (the key snapped back to 0-1 channels).
    pub color: Color3,
    /// Member face indices in ascending order.
    pub faces: Vec<usize>,
    /// Nearest preset, absent only when the library has no colors.
    pub matched: Option<ColorMatch>,
}

/// Partition a soup's faces by quantized vertex color.
///
/// Each face is represented by its first vertex's color, snapped onto the
/// 1/50 channel grid; faces with exactly equal keys group together. Every
/// group is matched against the library's reference colors once.
///
/// Groups come back in order of first appearance (lowest first face),
/// which makes the output deterministic. A soup without a color buffer,
/// an empty soup, or an empty library with no reference colors all yield
/// empty/unmatched results rather than errors. Degenerate faces join no
/// group.
///
/// # Example
///
/// ```
/// use maquette_material::{MaterialLibrary, group_by_color};
/// use maquette_types::TriangleSoup;
///
/// let soup = TriangleSoup::from_positions(vec![
///     0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
/// ])
/// .with_colors(vec![0.62, 0.28, 0.2, 0.62, 0.28, 0.2, 0.62, 0.28, 0.2]);
///
/// let groups = group_by_color(&soup, &MaterialLibrary::builtin());
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].matched.as_ref().unwrap().preset, "brick");
/// ```
#[must_use]
pub fn group_by_color(soup: &TriangleSoup, library: &MaterialLibrary) -> Vec<ColorGroup> {
    if soup.is_empty() || !soup.has_colors() {
        return Vec::new();
    }

    let mut index_of: HashMap<(i32, i32, i32), usize> = HashMap::new();
    let mut groups: Vec<ColorGroup> = Vec::new();

    for face in 0..soup.face_count() {
        if soup.face_is_degenerate(face) {
            continue;
        }
        let Some(color) = soup.face_color(face) else {
            continue;
        };

        let key = color.quantized_key();
        let slot = *index_of.entry(key).or_insert_with(|| {
            let representative = color.quantized();
            groups.push(ColorGroup {
                key,
                color: representative,
                faces: Vec::new(),
                matched: library.match_color(representative),
            });
            groups.len() - 1
        });
        groups[slot].faces.push(face);
    }

    debug!(groups = groups.len(), "grouped faces by quantized color");

    groups
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn flat_quad_soup(colors: Vec<f32>) -> TriangleSoup {
        TriangleSoup::from_positions(vec![
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, //
            1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0,
        ])
        .with_colors(colors)
    }

    #[test]
    fn same_color_faces_share_a_group() {
        let mut colors = Vec::new();
        for _ in 0..6 {
            colors.extend_from_slice(&[0.5, 0.5, 0.5]);
        }
        let soup = flat_quad_soup(colors);

        let groups = group_by_color(&soup, &MaterialLibrary::builtin());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].faces, vec![0, 1]);
    }

    #[test]
    fn near_colors_collapse_to_one_key() {
        // 0.005 apart, well under half a 1/50 step
        let mut colors = Vec::new();
        for _ in 0..3 {
            colors.extend_from_slice(&[0.500, 0.5, 0.5]);
        }
        for _ in 0..3 {
            colors.extend_from_slice(&[0.505, 0.5, 0.5]);
        }
        let soup = flat_quad_soup(colors);

        let groups = group_by_color(&soup, &MaterialLibrary::builtin());
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn boundary_straddling_colors_split() {
        let mut colors = Vec::new();
        for _ in 0..3 {
            colors.extend_from_slice(&[0.0099, 0.5, 0.5]);
        }
        for _ in 0..3 {
            colors.extend_from_slice(&[0.0101, 0.5, 0.5]);
        }
        let soup = flat_quad_soup(colors);

        let groups = group_by_color(&soup, &MaterialLibrary::builtin());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].faces, vec![0]);
        assert_eq!(groups[1].faces, vec![1]);
    }

    #[test]
    fn no_color_buffer_yields_empty() {
        let soup = TriangleSoup::from_positions(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert!(group_by_color(&soup, &MaterialLibrary::builtin()).is_empty());
    }

    #[test]
    fn empty_soup_yields_empty() {
        let soup = TriangleSoup::new();
        assert!(group_by_color(&soup, &MaterialLibrary::builtin()).is_empty());
    }

    #[test]
    fn degenerate_faces_join_no_group() {
        let soup = TriangleSoup::from_positions(vec![
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, //
            // Collapses under quantization
            0.0, 0.0, 0.0, 0.001, 0.0, 0.0, 0.0, 1.0, 0.0,
        ])
        .with_colors(vec![0.5; 18]);

        let groups = group_by_color(&soup, &MaterialLibrary::builtin());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].faces, vec![0]);
    }

    #[test]
    fn representative_color_is_quantized() {
        let mut colors = Vec::new();
        for _ in 0..6 {
            colors.extend_from_slice(&[0.503, 0.247, 0.9]);
        }
        let soup = flat_quad_soup(colors);

        let groups = group_by_color(&soup, &MaterialLibrary::builtin());
        let c = groups[0].color;
        assert!((c.r - 0.5).abs() < 1e-6);
        assert!((c.g - 0.24).abs() < 1e-6);
    }

    #[test]
    fn empty_library_leaves_groups_unmatched() {
        let mut colors = Vec::new();
        for _ in 0..6 {
            colors.extend_from_slice(&[0.5, 0.5, 0.5]);
        }
        let soup = flat_quad_soup(colors);

        let groups = group_by_color(&soup, &MaterialLibrary::new());
        assert_eq!(groups.len(), 1);
        assert!(groups[0].matched.is_none());
    }
}
