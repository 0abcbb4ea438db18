use crate::models::RawRecord;

/// Habitability point thresholds used by scoring and the card UI.
///
/// Points are only awarded when the field is present — thresholds are
/// evaluated on the raw optional values, never on zero-defaulted ones,
/// so a record with no measurements scores 0.
pub mod thresholds {
    /// Equilibrium temperature band for liquid-water chemistry, inclusive (K).
    pub const TEMPERATE_MIN_K: f64 = 200.0;
    pub const TEMPERATE_MAX_K: f64 = 350.0;

    /// Insolation flux band around Earth's, inclusive (Earth-flux units).
    pub const FLUX_MIN: f64 = 0.3;
    pub const FLUX_MAX: f64 = 2.0;

    /// Below this radius a candidate is treated as terrestrial (Earth radii).
    pub const ROCKY_RADIUS_MAX: f64 = 2.0;

    /// Transit signal strong enough to trust the measurements.
    pub const SNR_MIN: f64 = 10.0;

    /// Orbital period band for a temperate orbit, exclusive (days).
    pub const PERIOD_MIN_DAYS: f64 = 30.0;
    pub const PERIOD_MAX_DAYS: f64 = 500.0;

    /// Maximum attainable habitability score.
    pub const MAX_SCORE: u8 = 8;
}

/// Composite habitability score in [0, 8].
///
/// +2 temperate equilibrium temperature, +2 Earth-like insolation,
/// +2 sub-Neptune radius, +1 strong signal, +1 temperate orbital period.
pub fn habitability_score(record: &RawRecord) -> u8 {
    use thresholds::*;

    let mut score = 0u8;

    if record
        .equilibrium_temp
        .is_some_and(|t| (TEMPERATE_MIN_K..=TEMPERATE_MAX_K).contains(&t))
    {
        score += 2;
    }
    if record
        .insolation_flux
        .is_some_and(|f| (FLUX_MIN..=FLUX_MAX).contains(&f))
    {
        score += 2;
    }
    if record.planet_radius.is_some_and(|r| r < ROCKY_RADIUS_MAX) {
        score += 2;
    }
    if record.koi_model_snr.is_some_and(|s| s > SNR_MIN) {
        score += 1;
    }
    if record
        .orbital_period
        .is_some_and(|p| p > PERIOD_MIN_DAYS && p < PERIOD_MAX_DAYS)
    {
        score += 1;
    }

    score
}

/// Probability for a candidate: backend-supplied when present, otherwise
/// derived from the score and capped at 0.9 — a score alone never claims
/// model-grade confidence.
pub fn resolve_probability(record: &RawRecord, score: u8) -> f64 {
    match record.probability {
        Some(p) => p,
        None => derived_probability(score),
    }
}

/// `min(0.9, score/8 + 0.3)`.
pub fn derived_probability(score: u8) -> f64 {
    (f64::from(score) / f64::from(thresholds::MAX_SCORE) + 0.3).min(0.9)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RawRecord {
        RawRecord::default()
    }

    #[test]
    fn empty_record_scores_zero() {
        assert_eq!(habitability_score(&record()), 0);
    }

    #[test]
    fn temperate_equilibrium_temp_scores_two() {
        let r = RawRecord {
            equilibrium_temp: Some(288.0),
            ..record()
        };
        assert_eq!(habitability_score(&r), 2);
    }

    #[test]
    fn equilibrium_temp_band_is_inclusive() {
        for t in [200.0, 350.0] {
            let r = RawRecord {
                equilibrium_temp: Some(t),
                ..record()
            };
            assert_eq!(habitability_score(&r), 2, "boundary {t} should score");
        }
        for t in [199.9, 350.1] {
            let r = RawRecord {
                equilibrium_temp: Some(t),
                ..record()
            };
            assert_eq!(habitability_score(&r), 0, "outside {t} should not score");
        }
    }

    #[test]
    fn earth_flux_scores_two() {
        let r = RawRecord {
            insolation_flux: Some(1.0),
            ..record()
        };
        assert_eq!(habitability_score(&r), 2);
    }

    #[test]
    fn flux_band_is_inclusive() {
        for f in [0.3, 2.0] {
            let r = RawRecord {
                insolation_flux: Some(f),
                ..record()
            };
            assert_eq!(habitability_score(&r), 2);
        }
        let r = RawRecord {
            insolation_flux: Some(2.01),
            ..record()
        };
        assert_eq!(habitability_score(&r), 0);
    }

    #[test]
    fn small_radius_scores_two_and_boundary_excluded() {
        let r = RawRecord {
            planet_radius: Some(1.0),
            ..record()
        };
        assert_eq!(habitability_score(&r), 2);
        let r = RawRecord {
            planet_radius: Some(2.0),
            ..record()
        };
        assert_eq!(habitability_score(&r), 0);
    }

    #[test]
    fn absent_radius_does_not_score() {
        // Zero-defaulting before the threshold would wrongly award the
        // radius points to a record with no radius at all.
        let r = record();
        assert_eq!(habitability_score(&r), 0);
    }

    #[test]
    fn snr_scores_one_above_ten_exclusive() {
        let r = RawRecord {
            koi_model_snr: Some(10.0),
            ..record()
        };
        assert_eq!(habitability_score(&r), 0);
        let r = RawRecord {
            koi_model_snr: Some(10.1),
            ..record()
        };
        assert_eq!(habitability_score(&r), 1);
    }

    #[test]
    fn period_band_is_exclusive() {
        for p in [30.0, 500.0] {
            let r = RawRecord {
                orbital_period: Some(p),
                ..record()
            };
            assert_eq!(habitability_score(&r), 0, "boundary {p} excluded");
        }
        let r = RawRecord {
            orbital_period: Some(365.25),
            ..record()
        };
        assert_eq!(habitability_score(&r), 1);
    }

    #[test]
    fn full_house_scores_max() {
        let r = RawRecord {
            equilibrium_temp: Some(288.0),
            insolation_flux: Some(1.0),
            planet_radius: Some(1.0),
            koi_model_snr: Some(25.0),
            orbital_period: Some(365.25),
            ..record()
        };
        assert_eq!(habitability_score(&r), thresholds::MAX_SCORE);
    }

    #[test]
    fn derived_probability_floor_and_cap() {
        assert_eq!(derived_probability(0), 0.3);
        assert_eq!(derived_probability(8), 0.9);
        // 5/8 + 0.3 = 0.925, capped
        assert_eq!(derived_probability(5), 0.9);
        assert!((derived_probability(2) - 0.55).abs() < 1e-12);
    }

    #[test]
    fn supplied_probability_passes_through_verbatim() {
        let r = RawRecord {
            probability: Some(0.8),
            ..record()
        };
        assert_eq!(resolve_probability(&r, 8), 0.8);
    }

    #[test]
    fn missing_probability_is_derived() {
        assert_eq!(resolve_probability(&record(), 0), 0.3);
    }
}
