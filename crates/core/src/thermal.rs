//! Thermal radiation model: nominal burn radii and a per-point fluence
//! function with Beer-Lambert atmospheric attenuation.

use crate::constants::{THERMAL_CALIBRATION, THERMAL_FRACTION};
use crate::effects::EffectTier;
use crate::scaling;
use std::f64::consts::PI;
use tracing::debug;

/// Severe burns radius coefficient (m per MT^0.4).
const SEVERE_COEFF: f64 = 1200.0;
/// Moderate burns radius coefficient.
const MODERATE_COEFF: f64 = 1800.0;
/// Light burns radius coefficient.
const LIGHT_COEFF: f64 = 2400.0;

/// Beer-Lambert extinction coefficient for a clear atmosphere (per km).
const EXTINCTION_PER_KM: f64 = 0.17;

/// Atmospheric scale height for the burst altitude correction (m).
const SCALE_HEIGHT_M: f64 = 7400.0;

/// Nominal thermal damage tiers.
///
/// These are not damped by burst height; the obliquity term in
/// `fluence_at` carries the height dependence for point queries.
pub fn nominal_tier(yield_mt: f64) -> EffectTier {
    let s = scaling::thermal_scaling(yield_mt);
    EffectTier::from_radii(SEVERE_COEFF * s, MODERATE_COEFF * s, LIGHT_COEFF * s)
}

/// Thermal fluence at ground range `distance_m` from a burst of
/// `yield_mt` at altitude `height_m`.
///
/// Inverse-square spreading of the thermal fraction of the yield,
/// attenuated by Beer-Lambert transmission. An airburst is further
/// reduced by slant-angle obliquity and the exponential density falloff
/// with altitude.
pub fn fluence_at(distance_m: f64, yield_mt: f64, height_m: f64) -> f64 {
    let thermal_energy = scaling::yield_to_joules(yield_mt) * THERMAL_FRACTION;
    let mut fluence = THERMAL_CALIBRATION * thermal_energy / (4.0 * PI * distance_m.powi(2));

    if height_m > 0.0 {
        let angle_factor = (1.0 - (height_m / (distance_m + height_m)).powi(2)).sqrt();
        fluence *= angle_factor * (-height_m / SCALE_HEIGHT_M).exp();
    }

    let transmission = (-EXTINCTION_PER_KM * distance_m / 1000.0).exp();
    debug!(distance_m, transmission, "thermal fluence query");

    fluence * transmission
}

/// Effective fireball surface temperature in kelvin.
pub fn fireball_temperature(yield_mt: f64) -> f64 {
    6000.0 + 1000.0 * yield_mt.log10()
}
