//! Initial ionizing radiation model.
//!
//! Prompt neutron and gamma ranges grow only slowly with yield because
//! air absorption dominates, hence the shallow Y^0.19 exponent.

use crate::effects::EffectTier;
use crate::scaling;

/// Lethal dose radius coefficient (m per MT^0.19).
const SEVERE_COEFF: f64 = 800.0;
/// Severe radiation sickness radius coefficient.
const MODERATE_COEFF: f64 = 1200.0;
/// Light dose radius coefficient.
const LIGHT_COEFF: f64 = 1600.0;

/// Nominal initial-radiation tiers before height-of-burst adjustment.
pub fn nominal_tier(yield_mt: f64) -> EffectTier {
    let s = scaling::radiation_scaling(yield_mt);
    EffectTier::from_radii(SEVERE_COEFF * s, MODERATE_COEFF * s, LIGHT_COEFF * s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_yield_gives_base_radii() {
        let tier = nominal_tier(1.0);
        assert_eq!(*tier.severe_radius, 800.0);
        assert_eq!(*tier.moderate_radius, 1200.0);
        assert_eq!(*tier.light_radius, 1600.0);
    }

    #[test]
    fn radii_barely_move_across_three_decades() {
        let small = nominal_tier(0.05);
        let large = nominal_tier(50.0);
        let ratio = *large.severe_radius / *small.severe_radius;
        // 1000^0.19 ≈ 3.72: radiation range is nearly yield-insensitive
        assert!(ratio > 3.0 && ratio < 4.0);
    }
}
