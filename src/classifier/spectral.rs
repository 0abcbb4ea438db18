use crate::models::StellarType;

/// Solar constant in W/m² — converts Earth-relative insolation flux to an
/// absolute energy budget.
pub const SOLAR_CONSTANT_W_M2: f64 = 1361.0;

/// Bin a stellar effective temperature into its Morgan–Keenan class.
///
/// Standard main-sequence bins; anything below the M-dwarf floor is not a
/// star the model trains on and maps to `Unknown`, as does an absent
/// temperature.
pub fn classify_stellar_type(stellar_temp: Option<f64>) -> StellarType {
    let Some(temp) = stellar_temp else {
        return StellarType::Unknown;
    };
    match temp {
        t if t >= 30_000.0 => StellarType::O,
        t if t >= 10_000.0 => StellarType::B,
        t if t >= 7_500.0 => StellarType::A,
        t if t >= 6_000.0 => StellarType::F,
        t if t >= 5_200.0 => StellarType::G,
        t if t >= 3_700.0 => StellarType::K,
        t if t >= 2_400.0 => StellarType::M,
        _ => StellarType::Unknown,
    }
}

/// Stellar flux at the planet in W/m², from Earth-relative insolation.
/// Absent flux zero-defaults like every display measurement.
pub fn energy_budget(insolation_flux: Option<f64>) -> f64 {
    super::normalize::round(insolation_flux.unwrap_or(0.0) * SOLAR_CONSTANT_W_M2, 2)
}
