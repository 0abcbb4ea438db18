use serde::{Deserialize, Deserializer, Serialize};

/// One backend-supplied observation, keyed by candidate name in the
/// retrain response. Every measurement is optional: the training sets
/// users upload are ragged, and a missing or unparseable cell must never
/// reject the whole batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Orbital period in days.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub orbital_period: Option<f64>,
    /// Transit duration in hours.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub transit_duration: Option<f64>,
    /// Transit depth as a fraction of stellar flux.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub transit_depth: Option<f64>,
    /// Planet radius in Earth radii.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub planet_radius: Option<f64>,
    /// Stellar effective temperature in Kelvin.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub stellar_temp: Option<f64>,
    /// Stellar radius in Solar radii.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub stellar_radius: Option<f64>,
    /// Stellar mass in Solar masses.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub stellar_mass: Option<f64>,
    /// Planetary equilibrium temperature in Kelvin.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub equilibrium_temp: Option<f64>,
    /// Insolation flux in Earth-flux units.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub insolation_flux: Option<f64>,
    /// Transit signal-to-noise ratio.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub koi_model_snr: Option<f64>,
    /// Right ascension in degrees.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ra: Option<f64>,
    /// Declination in degrees.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub dec: Option<f64>,
    /// Whether the radius column was absent from the source row.
    #[serde(default)]
    pub planet_radius_missing: bool,
    /// Model probability, when the backend already scored this row.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub probability: Option<f64>,
}

/// Accept a number, a numeric string, or anything else as `None`.
///
/// The backend serializes pandas frames, so a cell can arrive as `1.5`,
/// `"1.5"`, `"NaN"`, `null`, or a stray label. A field-level failure
/// degrades to "absent" rather than aborting the record.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    })
}
