use crate::models::{CategoryCard, Planet};

/// One browsable category: a named predicate over classified planets.
///
/// Definitions are plain value objects so card generation is a pure
/// function — no closures over UI state, fully unit-testable.
#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub name: &'static str,
    pub description: &'static str,
    /// Icon slug for the frontend icon set.
    pub icon: &'static str,
    /// Accent color tag for the frontend theme.
    pub color: &'static str,
    pub predicate: fn(&Planet) -> bool,
}

/// Habitability score at or above which a candidate makes the
/// "Potentially Habitable" card.
pub const HABITABLE_SCORE_MIN: u8 = 5;

/// The fixed category list, in display order. Categories overlap — they
/// are an exploratory faceting tool, not a partition.
pub const DEFAULT_CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        name: "Potentially Habitable",
        description: "Candidates clearing most habitability thresholds",
        icon: "globe",
        color: "green",
        predicate: |p| p.habitability_score >= HABITABLE_SCORE_MIN,
    },
    CategoryDef {
        name: "Water Worlds",
        description: "Insolation consistent with liquid surface water",
        icon: "droplet",
        color: "blue",
        predicate: |p| p.characteristics.water,
    },
    CategoryDef {
        name: "Rocky Planets",
        description: "Sub-Neptune radius, likely terrestrial composition",
        icon: "mountain",
        color: "amber",
        predicate: |p| p.characteristics.rocks,
    },
    CategoryDef {
        name: "Oxygen Candidates",
        description: "Equilibrium temperature in the oxygen-chemistry band",
        icon: "leaf",
        color: "emerald",
        predicate: |p| p.characteristics.oxygen,
    },
    CategoryDef {
        name: "Gas Giants",
        description: "Radius pointing to a hydrogen-dominated envelope",
        icon: "wind",
        color: "purple",
        predicate: |p| p.characteristics.hydrogen,
    },
    CategoryDef {
        name: "Atmosphere Detected",
        description: "Enough stellar flux to retain an atmosphere",
        icon: "cloud",
        color: "sky",
        predicate: |p| p.characteristics.atmosphere,
    },
    CategoryDef {
        name: "Magnetically Shielded",
        description: "Large enough for a dynamo-driven magnetic field",
        icon: "shield",
        color: "indigo",
        predicate: |p| p.characteristics.magnetic_field,
    },
    CategoryDef {
        name: "High Radiation",
        description: "Hot host star bathing the candidate in radiation",
        icon: "zap",
        color: "red",
        predicate: |p| p.characteristics.radiation,
    },
    CategoryDef {
        name: "Forest Worlds",
        description: "Top habitability scores, vegetation-capable conditions",
        icon: "trees",
        color: "teal",
        predicate: |p| p.characteristics.forest,
    },
];

/// Generate the full card set for one run.
///
/// A stable filter: each card lists matching planets in the input order,
/// no re-sort. Cards are regenerated wholesale per run.
pub fn classify(planets: &[Planet], definitions: &[CategoryDef]) -> Vec<CategoryCard> {
    definitions
        .iter()
        .map(|def| {
            let matching: Vec<Planet> = planets
                .iter()
                .filter(|p| (def.predicate)(p))
                .cloned()
                .collect();
            CategoryCard {
                name: def.name.to_string(),
                description: def.description.to_string(),
                icon: def.icon.to_string(),
                color: def.color.to_string(),
                count: matching.len(),
                planets: matching,
            }
        })
        .collect()
}

/// Exclusive category selection: picking the active category again clears
/// the filter, picking another replaces it.
pub fn toggle_selection(current: Option<&str>, chosen: &str) -> Option<String> {
    match current {
        Some(active) if active == chosen => None,
        _ => Some(chosen.to_string()),
    }
}
