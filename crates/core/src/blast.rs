//! Blast wave model: nominal damage radii plus a modified Brode
//! overpressure curve with Sachs scaling and Mach-stem enhancement.
//!
//! The nominal radii and the overpressure function are independent
//! surfaces. The radii feed the damage report; `overpressure_at` exists
//! for point queries and model validation and is not cross-calibrated
//! against the radii, so results from the two should not be mixed.

use crate::constants::ATMOSPHERIC_PRESSURE;
use crate::core_types::Pascals;
use crate::effects::EffectTier;
use crate::scaling;
use tracing::debug;

/// Severe damage radius coefficient (m per MT^(1/3)), ~20 psi analog.
const SEVERE_COEFF: f64 = 2000.0;
/// Moderate damage radius coefficient, ~10 psi analog.
const MODERATE_COEFF: f64 = 3000.0;
/// Light damage radius coefficient, ~5 psi analog.
const LIGHT_COEFF: f64 = 4500.0;

/// Nominal blast damage tiers before height-of-burst adjustment.
pub fn nominal_tier(yield_mt: f64) -> EffectTier {
    let s = scaling::blast_scaling(yield_mt);
    EffectTier::from_radii(SEVERE_COEFF * s, MODERATE_COEFF * s, LIGHT_COEFF * s)
}

/// Peak overpressure at ground range `distance_m` from a burst of
/// `yield_mt` at altitude `height_m`.
///
/// Sachs scaling reduces the distance to dimensionless form via
/// (E/P₀)^(1/3); the Brode polynomial then gives the pressure ratio. An
/// airburst picks up a Mach-stem factor that decays with scaled height,
/// with an extra 25% inside the triple-point region.
pub fn overpressure_at(distance_m: f64, yield_mt: f64, height_m: f64) -> Pascals {
    let energy = scaling::yield_to_joules(yield_mt);
    let scaled_distance = distance_m / (energy / ATMOSPHERIC_PRESSURE).powf(1.0 / 3.0);

    let mut mach_stem_factor = 1.0;
    if height_m > 0.0 {
        let scaled_height = height_m / scaling::blast_scaling(yield_mt);
        mach_stem_factor = 1.0 + 0.1 * (-scaled_height / 100.0).exp();

        // Triple-point region where the Mach stem forms near the surface
        let triple_point_height = 83.0 * yield_mt.powf(0.4);
        if height_m < triple_point_height {
            mach_stem_factor *= 1.25;
        }
    }

    let pressure_ratio = 1.0
        + 0.076 / scaled_distance
        + 0.255 / scaled_distance.powi(2)
        + 0.536 / scaled_distance.powi(3);

    debug!(
        distance_m,
        scaled_distance, mach_stem_factor, "blast overpressure query"
    );

    Pascals::new(ATMOSPHERIC_PRESSURE * pressure_ratio * mach_stem_factor)
}
