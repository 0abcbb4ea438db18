use crate::models::{Planet, PlanetMeasurements, RawRecord};

use super::characteristics::derive_characteristics;
use super::score::{habitability_score, resolve_probability};
use super::spectral::{classify_stellar_type, energy_budget};

/// Decimal places for physical quantities.
const PRECISION_PHYSICAL: u32 = 2;
/// Decimal places for sky coordinates.
const PRECISION_COORD: u32 = 6;
/// Decimal places for transit depth (a small flux fraction).
const PRECISION_DEPTH: u32 = 4;

/// Round half away from zero to `decimals` places.
pub fn round(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Turn one named raw record into a classified planet.
///
/// Deterministic: score and characteristic thresholds are evaluated on
/// the raw optional fields, then the display measurements are
/// zero-defaulted and rounded. Same record in, identical planet out.
pub fn normalize(name: &str, record: &RawRecord) -> Planet {
    let score = habitability_score(record);

    Planet {
        name: name.to_string(),
        probability: resolve_probability(record, score),
        habitability_score: score,
        characteristics: derive_characteristics(record, score),
        data: PlanetMeasurements {
            orbital_period: round(record.orbital_period.unwrap_or(0.0), PRECISION_PHYSICAL),
            transit_duration: round(record.transit_duration.unwrap_or(0.0), PRECISION_PHYSICAL),
            transit_depth: round(record.transit_depth.unwrap_or(0.0), PRECISION_DEPTH),
            planet_radius: round(record.planet_radius.unwrap_or(0.0), PRECISION_PHYSICAL),
            stellar_temp: round(record.stellar_temp.unwrap_or(0.0), PRECISION_PHYSICAL),
            stellar_radius: round(record.stellar_radius.unwrap_or(0.0), PRECISION_PHYSICAL),
            stellar_mass: round(record.stellar_mass.unwrap_or(0.0), PRECISION_PHYSICAL),
            equilibrium_temp: round(record.equilibrium_temp.unwrap_or(0.0), PRECISION_PHYSICAL),
            insolation_flux: round(record.insolation_flux.unwrap_or(0.0), PRECISION_PHYSICAL),
            koi_model_snr: round(record.koi_model_snr.unwrap_or(0.0), PRECISION_PHYSICAL),
            ra: round(record.ra.unwrap_or(0.0), PRECISION_COORD),
            dec: round(record.dec.unwrap_or(0.0), PRECISION_COORD),
            planet_radius_missing: record.planet_radius_missing,
            stellar_type: classify_stellar_type(record.stellar_temp),
            energy_budget: energy_budget(record.insolation_flux),
        },
    }
}
