use crate::models::{BatchStats, Planet, PredictionRow};

/// Probability above which a row counts as a detected exoplanet.
pub const DETECTION_THRESHOLD: f64 = 0.5;

/// Headline numbers for the summary tiles.
pub fn batch_stats(planets: &[Planet]) -> BatchStats {
    let total = planets.len();
    let detected = planets
        .iter()
        .filter(|p| p.probability > DETECTION_THRESHOLD)
        .count();
    let confidence = if total == 0 {
        0.0
    } else {
        planets.iter().map(|p| p.probability).sum::<f64>() / total as f64
    };
    BatchStats {
        total,
        detected,
        confidence,
    }
}

/// The prediction table: rows numbered in classification order, then
/// sorted by probability descending for display. Display-only — the
/// classification order itself is never re-sorted.
pub fn top_predictions(planets: &[Planet], limit: usize) -> Vec<PredictionRow> {
    let mut rows: Vec<PredictionRow> = planets
        .iter()
        .enumerate()
        .map(|(i, p)| PredictionRow {
            row: i + 1,
            name: p.name.clone(),
            probability: p.probability,
            orbital_period: p.data.orbital_period,
            transit_duration: p.data.transit_duration,
            planet_radius: p.data.planet_radius,
            stellar_mass: p.data.stellar_mass,
        })
        .collect();
    rows.sort_by(|a, b| b.probability.total_cmp(&a.probability));
    rows.truncate(limit);
    rows
}
