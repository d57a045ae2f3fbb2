//! Ordered-rule zone classification.
//!
//! Each non-degenerate component is matched against a fixed, ordered list
//! of `(predicate, zone)` pairs; the first predicate that holds decides
//! the zone. Several predicates can be true at once, so the order is part
//! of the contract and must not be rearranged.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use maquette_types::TriangleSoup;

use crate::adjacency::FaceAdjacency;
use crate::components::find_components;
use crate::features::{ComponentFeatures, MeshContext};

/// Architectural zone assigned to a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Zone {
    /// Upward surfaces in the upper half of the model.
    Roof,
    /// Large side-facing surfaces.
    Walls,
    /// Small vertical openings.
    Windows,
    /// Tall, grounded vertical openings.
    Doors,
    /// Downward or low upward surfaces.
    Floor,
    /// Tiny vertical detail.
    Trim,
    /// Small, tall free-standing shapes.
    Vegetation,
    /// Small shapes with mixed orientation.
    Furniture,
}

impl Zone {
    /// All zones in presentation order.
    pub const ALL: [Self; 8] = [
        Self::Roof,
        Self::Walls,
        Self::Windows,
        Self::Doors,
        Self::Floor,
        Self::Trim,
        Self::Vegetation,
        Self::Furniture,
    ];

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Roof => "roof",
            Self::Walls => "walls",
            Self::Windows => "windows",
            Self::Doors => "doors",
            Self::Floor => "floor",
            Self::Trim => "trim",
            Self::Vegetation => "vegetation",
            Self::Furniture => "furniture",
        }
    }

    /// Default material key for the zone.
    ///
    /// Keys resolve against the material preset library; the caller may
    /// override the binding per zone, the engine only reports defaults.
    #[must_use]
    pub const fn default_material(self) -> &'static str {
        match self {
            Self::Roof => "granite",
            Self::Walls => "plaster",
            Self::Windows => "glass",
            Self::Doors => "oak-wood",
            Self::Floor => "concrete",
            Self::Trim => "steel",
            Self::Vegetation => "hedge",
            Self::Furniture => "oak-wood",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One classification rule.
struct Rule {
    zone: Zone,
    applies: fn(&ComponentFeatures) -> bool,
}

/// The ordered rule list. First match wins.
const RULES: &[Rule] = &[
    // 1. Up-facing, high, and dominant: the roof plane
    Rule {
        zone: Zone::Roof,
        applies: |f| f.is_upward && f.is_in_upper_half && f.is_large,
    },
    // 2. Down-facing low surfaces
    Rule {
        zone: Zone::Floor,
        applies: |f| f.is_downward && !f.is_in_upper_half,
    },
    // 3. Dominant vertical surfaces
    Rule {
        zone: Zone::Walls,
        applies: |f| f.is_vertical && f.is_large,
    },
    // 4. Tall grounded vertical openings
    Rule {
        zone: Zone::Doors,
        applies: |f| f.is_vertical && f.is_small && !f.is_tiny && f.is_door_like,
    },
    // 5. Thin vertical panes
    Rule {
        zone: Zone::Windows,
        applies: |f| f.is_vertical && f.is_small && !f.is_tiny && f.is_thin,
    },
    // 6. Remaining small vertical surfaces
    Rule {
        zone: Zone::Windows,
        applies: |f| f.is_vertical && f.is_small && !f.is_tiny,
    },
    // 7. Tiny vertical detail
    Rule {
        zone: Zone::Trim,
        applies: |f| f.is_tiny && f.is_vertical,
    },
    // 8. Small and markedly taller than its footprint
    Rule {
        zone: Zone::Vegetation,
        applies: |f| f.is_small && f.is_tall,
    },
    // 9. Small with mixed orientation
    Rule {
        zone: Zone::Furniture,
        applies: |f| f.is_small && !f.is_upward && !f.is_downward,
    },
    // 10. Small upward patches sit on the ground plane
    Rule {
        zone: Zone::Floor,
        applies: |f| f.is_upward && f.is_small,
    },
    // 11. Upward and high, whatever the size
    Rule {
        zone: Zone::Roof,
        applies: |f| f.is_upward && f.is_in_upper_half,
    },
    // 12. Any remaining down-facing surface
    Rule {
        zone: Zone::Floor,
        applies: |f| f.is_downward,
    },
    // 13. Everything else
    Rule {
        zone: Zone::Walls,
        applies: |_| true,
    },
];

/// Classify one component's features.
///
/// Pure: the same feature record always yields the same zone.
#[must_use]
pub fn classify_component(features: &ComponentFeatures) -> Zone {
    RULES
        .iter()
        .find(|rule| (rule.applies)(features))
        .map_or(Zone::Walls, |rule| rule.zone)
}

/// A zone with its member faces and default material binding.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ZoneGroup {
    /// The assigned zone.
    pub zone: Zone,
    /// Member face indices in ascending order.
    pub faces: Vec<usize>,
    /// Default material key for the zone.
    pub material: String,
}

/// Segment a soup and classify every component into a zone.
///
/// Runs adjacency, component traversal, feature extraction, and the rule
/// list, then gathers faces per zone. Groups are returned in [`Zone::ALL`]
/// order, only for zones with at least one face, with face lists sorted
/// ascending. Components below the minimum face count are dropped, as are
/// degenerate faces, so the groups partition exactly the classifiable
/// faces.
///
/// An empty or malformed soup yields an empty list rather than an error;
/// partially loaded previews must keep rendering.
///
/// # Example
///
/// ```
/// use maquette_types::unit_cube;
/// use maquette_zones::{Zone, classify_zones};
///
/// let groups = classify_zones(&unit_cube());
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].zone, Zone::Walls);
/// ```
#[must_use]
pub fn classify_zones(soup: &TriangleSoup) -> Vec<ZoneGroup> {
    if soup.is_empty() {
        return Vec::new();
    }

    let adjacency = FaceAdjacency::from_soup(soup);
    let components = find_components(soup, &adjacency);
    let context = MeshContext::new(soup, &components);

    let mut faces_by_zone: Vec<Vec<usize>> = vec![Vec::new(); Zone::ALL.len()];

    let mut classified = 0_usize;
    for component in &components {
        if component.is_degenerate() {
            continue;
        }
        let features = ComponentFeatures::extract(component, &context);
        let zone = classify_component(&features);
        let slot = Zone::ALL
            .iter()
            .position(|&z| z == zone)
            .unwrap_or_default();
        faces_by_zone[slot].extend_from_slice(component.faces());
        classified += 1;
    }

    debug!(
        components = components.len(),
        classified, "classified components into zones"
    );

    Zone::ALL
        .iter()
        .zip(faces_by_zone)
        .filter(|(_, faces)| !faces.is_empty())
        .map(|(&zone, mut faces)| {
            faces.sort_unstable();
            ZoneGroup {
                zone,
                faces,
                material: zone.default_material().to_owned(),
            }
        })
        .collect()
}
