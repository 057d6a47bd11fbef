//! Fallout footprint model.
//!
//! Sizes the dangerous deposition zone from the stabilized cloud height,
//! the fraction of debris drawn up into the cloud, and the wind. Calm
//! conditions give a circular pattern around ground zero; any appreciable
//! wind stretches it into an elongated downwind plume.

use crate::constants::GRAVITY;
use crate::core_types::{Degrees, Kilometers, SquareKilometers};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// Below this wind speed (km/h) the pattern is treated as circular.
pub const CALM_WIND_THRESHOLD: f64 = 0.1;

/// Activity fraction clamp bounds; sub-kiloton yields push the log10
/// term strongly negative otherwise.
const ACTIVITY_FRACTION_MIN: f64 = 0.05;
const ACTIVITY_FRACTION_MAX: f64 = 1.0;

/// Computed fallout deposition pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FalloutFootprint {
    /// Maximum distance fallout travels downwind.
    pub max_downwind_distance: Kilometers,
    /// Maximum cross-wind width of the pattern.
    pub max_width: Kilometers,
    /// Total area above the hazard threshold.
    pub dangerous_zone_area: SquareKilometers,
    /// Angular spread of the pattern (360° when calm).
    pub fallout_angle: Degrees,
}

/// Compute the fallout footprint for a burst.
///
/// `height_m` of zero means a ground burst, which lofts the full debris
/// load; an airburst keeps only an exponentially decaying particle
/// fraction and its dangerous zone is further scaled down to 30%.
pub fn compute(yield_mt: f64, height_m: f64, airburst: bool, wind_kmh: f64) -> FalloutFootprint {
    // Stabilized cloud height; ground bursts loft debris slightly higher
    let stabilized_height = if height_m == 0.0 {
        212.0 * yield_mt.powf(0.375)
    } else {
        188.0 * yield_mt.powf(0.375)
    };

    let particle_fraction = if airburst {
        0.3 * (-height_m / (stabilized_height * 0.7)).exp()
    } else {
        1.0
    };
    let activity_fraction =
        (0.6 + 0.2 * yield_mt.log10()).clamp(ACTIVITY_FRACTION_MIN, ACTIVITY_FRACTION_MAX);
    let effective_yield = yield_mt * particle_fraction * activity_fraction;

    // Base radius from mushroom cloud spread alone
    let base_radius = 1000.0 * effective_yield.powf(0.4);

    debug!(
        stabilized_height,
        particle_fraction, activity_fraction, effective_yield, "fallout cloud parameters"
    );

    let (max_downwind_distance, max_width, fallout_angle) = if wind_kmh < CALM_WIND_THRESHOLD {
        let radius_km = base_radius / 1000.0;
        (radius_km, radius_km, 360.0)
    } else {
        let downwind = (base_radius / 1000.0).max(
            wind_kmh * 3600.0 * (effective_yield.powf(0.4) / GRAVITY)
                * (1.0 + 0.15 * yield_mt.log10()),
        );
        // Cross-wind growth from turbulent diffusion
        let width = downwind * (0.14 + 0.02 * yield_mt.log10()) * (stabilized_height / 1000.0).sqrt();
        let angle = 40.0
            * (-height_m / (stabilized_height * 2.0)).exp()
            * (1.0 - 0.1 * wind_kmh.max(1.0).log10());
        (downwind, width, angle)
    };

    let mut dangerous_zone_area = if wind_kmh < CALM_WIND_THRESHOLD {
        PI * max_downwind_distance.powi(2)
    } else {
        let airburst_reduction = if airburst { 0.8 } else { 1.0 };
        0.5 * max_downwind_distance * max_width * particle_fraction * airburst_reduction
    };

    // Ground bursts deposit far more activity than airbursts
    let fallout_scale = if height_m == 0.0 { 1.0 } else { 0.3 };
    dangerous_zone_area *= fallout_scale;

    FalloutFootprint {
        max_downwind_distance: Kilometers::new(max_downwind_distance),
        max_width: Kilometers::new(max_width),
        dangerous_zone_area: SquareKilometers::new(dangerous_zone_area),
        fallout_angle: Degrees::new(fallout_angle),
    }
}
