use serde::{Deserialize, Serialize};

/// Surface/environment flags derived from measurement thresholds.
/// Field names are part of the IPC contract with the card UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetCharacteristics {
    pub water: bool,
    pub oxygen: bool,
    pub rocks: bool,
    pub forest: bool,
    pub hydrogen: bool,
    pub radiation: bool,
    pub atmosphere: bool,
    pub magnetic_field: bool,
}

/// Morgan–Keenan spectral class of the host star, binned from its
/// effective temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StellarType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    #[serde(rename = "unknown")]
    Unknown,
}

impl StellarType {
    pub fn as_str(self) -> &'static str {
        match self {
            StellarType::O => "O",
            StellarType::B => "B",
            StellarType::A => "A",
            StellarType::F => "F",
            StellarType::G => "G",
            StellarType::K => "K",
            StellarType::M => "M",
            StellarType::Unknown => "unknown",
        }
    }
}

/// Normalized measurements for display: physical quantities rounded to
/// 2 decimals, sky coordinates to 6, transit depth to 4. Missing inputs
/// are zero-defaulted (the deterministic policy — see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetMeasurements {
    pub orbital_period: f64,
    pub transit_duration: f64,
    pub transit_depth: f64,
    pub planet_radius: f64,
    pub stellar_temp: f64,
    pub stellar_radius: f64,
    pub stellar_mass: f64,
    pub equilibrium_temp: f64,
    pub insolation_flux: f64,
    pub koi_model_snr: f64,
    pub ra: f64,
    pub dec: f64,
    pub planet_radius_missing: bool,
    pub stellar_type: StellarType,
    /// Stellar flux at the planet in W/m².
    pub energy_budget: f64,
}

/// One classified candidate — the unit the category cards, prediction
/// table, and CSV export all operate on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// Unique within one classification run (the retrain response map key).
    pub name: String,
    /// In [0, 1]: backend-supplied when present, otherwise derived.
    pub probability: f64,
    /// Composite favorability score in [0, 8].
    pub habitability_score: u8,
    pub characteristics: PlanetCharacteristics,
    pub data: PlanetMeasurements,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stellar_type_serializes_class_letter() {
        assert_eq!(serde_json::to_string(&StellarType::G).unwrap(), "\"G\"");
        assert_eq!(
            serde_json::to_string(&StellarType::Unknown).unwrap(),
            "\"unknown\""
        );
    }

    #[test]
    fn characteristics_default_to_all_false() {
        let c = PlanetCharacteristics::default();
        assert!(!c.water && !c.oxygen && !c.rocks && !c.forest);
        assert!(!c.hydrogen && !c.radiation && !c.atmosphere && !c.magnetic_field);
    }

    #[test]
    fn planet_serializes_ipc_shape() {
        let planet = Planet {
            name: "K2-18b".into(),
            probability: 0.82,
            habitability_score: 6,
            characteristics: PlanetCharacteristics {
                water: true,
                ..Default::default()
            },
            data: PlanetMeasurements {
                orbital_period: 32.94,
                transit_duration: 2.68,
                transit_depth: 0.0029,
                planet_radius: 2.61,
                stellar_temp: 3457.0,
                stellar_radius: 0.41,
                stellar_mass: 0.36,
                equilibrium_temp: 284.0,
                insolation_flux: 1.33,
                koi_model_snr: 28.4,
                ra: 172.560141,
                dec: 7.588391,
                planet_radius_missing: false,
                stellar_type: StellarType::M,
                energy_budget: 1810.13,
            },
        };
        let json = serde_json::to_string(&planet).unwrap();
        assert!(json.contains("\"name\":\"K2-18b\""));
        assert!(json.contains("\"habitability_score\":6"));
        assert!(json.contains("\"water\":true"));
        assert!(json.contains("\"stellar_type\":\"M\""));
    }
}
