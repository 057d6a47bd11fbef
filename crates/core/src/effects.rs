//! Scenario inputs, effect tiers and the result aggregator.
//!
//! `calculate` is a pure function of the `Scenario`: channel models run
//! first, the height-of-burst damping is applied to blast and radiation,
//! the fallout footprint is computed, and finally the casualty integrator
//! runs against the target city's density profile.

use crate::casualties::{self, CasualtyEstimate};
use crate::city::CityRecord;
use crate::core_types::{KilometersPerHour, Megatons, Meters, SquareKilometers};
use crate::fallout::{self, FalloutFootprint};
use crate::{blast, burst, radiation, scaling, thermal};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Immutable detonation scenario, built from shell input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub yield_mt: Megatons,
    pub height_m: Meters,
    /// Derived: any height above ground level is an airburst.
    pub airburst: bool,
    pub wind_kmh: KilometersPerHour,
    pub city: CityRecord,
}

impl Scenario {
    pub fn new(
        yield_mt: Megatons,
        height_m: Meters,
        wind_kmh: KilometersPerHour,
        city: CityRecord,
    ) -> Self {
        let airburst = *height_m > 0.0;
        Self {
            yield_mt,
            height_m,
            airburst,
            wind_kmh,
            city,
        }
    }
}

/// Radii and footprint areas for one effect channel's three damage
/// tiers. Areas are always derived from the radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectTier {
    pub severe_radius: Meters,
    pub moderate_radius: Meters,
    pub light_radius: Meters,
    pub severe_area: SquareKilometers,
    pub moderate_area: SquareKilometers,
    pub light_area: SquareKilometers,
}

impl EffectTier {
    /// Build a tier from radii in meters, deriving the areas.
    pub fn from_radii(severe_m: f64, moderate_m: f64, light_m: f64) -> Self {
        Self {
            severe_radius: Meters::new(severe_m),
            moderate_radius: Meters::new(moderate_m),
            light_radius: Meters::new(light_m),
            severe_area: SquareKilometers::new(scaling::area_km2(severe_m)),
            moderate_area: SquareKilometers::new(scaling::area_km2(moderate_m)),
            light_area: SquareKilometers::new(scaling::area_km2(light_m)),
        }
    }

    /// Scale all radii by `factor` and re-derive the areas.
    pub fn scale_radii(&self, factor: f64) -> Self {
        Self::from_radii(
            *self.severe_radius * factor,
            *self.moderate_radius * factor,
            *self.light_radius * factor,
        )
    }
}

/// Per-channel damage tiers plus the fallout footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponEffects {
    pub blast: EffectTier,
    pub thermal: EffectTier,
    pub radiation: EffectTier,
    pub fallout: FalloutFootprint,
}

/// Full result for a scenario: physical effects and casualties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetonationReport {
    pub effects: WeaponEffects,
    pub casualties: CasualtyEstimate,
}

/// Compute the per-channel damage tiers and the fallout footprint.
pub fn calculate_effects(scenario: &Scenario) -> WeaponEffects {
    let yield_mt = *scenario.yield_mt;
    let height_m = *scenario.height_m;

    info!(
        yield_mt,
        height_m,
        airburst = scenario.airburst,
        wind_kmh = *scenario.wind_kmh,
        city = %scenario.city.name,
        "computing detonation effects"
    );

    let mut blast_tier = blast::nominal_tier(yield_mt);
    let thermal_tier = thermal::nominal_tier(yield_mt);
    let mut radiation_tier = radiation::nominal_tier(yield_mt);

    // Blast and radiation radii shrink with burst altitude; thermal radii
    // stay nominal (the fluence model owns the height dependence there)
    if height_m > 0.0 {
        let height_factor = burst::height_factor(height_m);
        debug!(height_factor, "applying height-of-burst damping");
        blast_tier = blast_tier.scale_radii(height_factor);
        radiation_tier = radiation_tier.scale_radii(height_factor);
    }

    let fallout = fallout::compute(yield_mt, height_m, scenario.airburst, *scenario.wind_kmh);

    WeaponEffects {
        blast: blast_tier,
        thermal: thermal_tier,
        radiation: radiation_tier,
        fallout,
    }
}

/// Compute effects and integrate casualties for the scenario's city.
pub fn calculate(scenario: &Scenario) -> DetonationReport {
    let effects = calculate_effects(scenario);
    let casualties = casualties::estimate(&effects, &scenario.city);
    DetonationReport {
        effects,
        casualties,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn test_scenario(yield_mt: f64, height_m: f64, wind_kmh: f64) -> Scenario {
        Scenario::new(
            Megatons::new(yield_mt),
            Meters::new(height_m),
            KilometersPerHour::new(wind_kmh),
            CityRecord::by_name("Berlin").unwrap(),
        )
    }

    #[test]
    fn airburst_flag_derived_from_height() {
        assert!(!test_scenario(1.0, 0.0, 0.0).airburst);
        assert!(test_scenario(1.0, 1.0, 0.0).airburst);
    }

    #[test]
    fn tier_areas_follow_radii() {
        let tier = EffectTier::from_radii(500.0, 1500.0, 2500.0);
        assert_relative_eq!(
            *tier.moderate_area,
            PI * 1.5_f64.powi(2),
            max_relative = 1e-12
        );
    }

    #[test]
    fn scaling_radii_rescales_areas_quadratically() {
        let tier = EffectTier::from_radii(1000.0, 2000.0, 3000.0);
        let scaled = tier.scale_radii(0.5);
        assert_relative_eq!(*scaled.severe_radius, 500.0, max_relative = 1e-12);
        assert_relative_eq!(
            *scaled.severe_area,
            *tier.severe_area * 0.25,
            max_relative = 1e-12
        );
    }

    #[test]
    fn surface_burst_keeps_nominal_blast_radii() {
        let effects = calculate_effects(&test_scenario(1.0, 0.0, 0.0));
        assert_relative_eq!(*effects.blast.severe_radius, 2000.0, max_relative = 1e-12);
    }

    #[test]
    fn report_is_deterministic() {
        let scenario = test_scenario(0.3, 300.0, 15.0);
        assert_eq!(calculate(&scenario), calculate(&scenario));
    }
}
