use serde::{Deserialize, Serialize};

use super::planet::Planet;

/// A named, predicate-based view over the classified planet list.
///
/// Cards overlap by design — one planet can appear on several cards —
/// and `count` always equals `planets.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCard {
    pub name: String,
    pub description: String,
    /// Icon slug for the frontend icon set.
    pub icon: String,
    /// Accent color tag for the frontend theme.
    pub color: String,
    pub count: usize,
    pub planets: Vec<Planet>,
}
