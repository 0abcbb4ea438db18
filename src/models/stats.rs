use serde::{Deserialize, Serialize};

/// Headline numbers for the batch-analysis summary tiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Total rows analyzed.
    pub total: usize,
    /// Rows with probability above the detection threshold.
    pub detected: usize,
    /// Mean probability across the batch, 0 when empty.
    pub confidence: f64,
}

/// One row of the prediction table and the CSV export.
///
/// `row` is the 1-based position in the classified list, assigned before
/// any probability sort so a row keeps its identity across views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRow {
    pub row: usize,
    pub name: String,
    pub probability: f64,
    pub orbital_period: f64,
    pub transit_duration: f64,
    pub planet_radius: f64,
    pub stellar_mass: f64,
}
