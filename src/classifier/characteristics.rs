use crate::models::{PlanetCharacteristics, RawRecord};

use super::score::thresholds::{TEMPERATE_MAX_K, TEMPERATE_MIN_K};

/// Single-field thresholds behind the characteristic flags.
pub mod thresholds {
    /// Insolation above which liquid surface water is plausible.
    pub const WATER_FLUX_MIN: f64 = 0.5;

    /// Insolation above which a retained atmosphere is plausible.
    pub const ATMOSPHERE_FLUX_MIN: f64 = 0.3;

    /// Radius above which the envelope is assumed hydrogen-dominated (Earth radii).
    pub const HYDROGEN_RADIUS_MIN: f64 = 3.0;

    /// Radius above which a dynamo-driven magnetic field is assumed (Earth radii).
    pub const MAGNETIC_RADIUS_MIN: f64 = 0.8;

    /// Stellar temperature above which the candidate is flagged high-radiation (K).
    pub const RADIATION_STELLAR_TEMP_MIN: f64 = 6000.0;

    /// Habitability score above which vegetation-capable conditions are flagged.
    pub const FOREST_SCORE_MIN: u8 = 6;
}

/// Derive the boolean characteristic set for one record.
///
/// Every predicate is false when its field is absent. Unlike the score's
/// temperature band, the oxygen band is exclusive at both ends.
pub fn derive_characteristics(record: &RawRecord, habitability_score: u8) -> PlanetCharacteristics {
    use thresholds::*;

    PlanetCharacteristics {
        water: record.insolation_flux.is_some_and(|f| f > WATER_FLUX_MIN),
        oxygen: record
            .equilibrium_temp
            .is_some_and(|t| t > TEMPERATE_MIN_K && t < TEMPERATE_MAX_K),
        rocks: record
            .planet_radius
            .is_some_and(|r| r < super::score::thresholds::ROCKY_RADIUS_MAX),
        forest: habitability_score > FOREST_SCORE_MIN,
        hydrogen: record.planet_radius.is_some_and(|r| r > HYDROGEN_RADIUS_MIN),
        radiation: record
            .stellar_temp
            .is_some_and(|t| t > RADIATION_STELLAR_TEMP_MIN),
        atmosphere: record
            .insolation_flux
            .is_some_and(|f| f > ATMOSPHERE_FLUX_MIN),
        magnetic_field: record
            .planet_radius
            .is_some_and(|r| r > MAGNETIC_RADIUS_MIN),
    }
}
