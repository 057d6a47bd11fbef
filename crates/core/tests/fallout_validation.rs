//! Fallout model validation suite.
//!
//! Covers the calm circular branch, the wind-driven plume branch, the
//! activity-fraction clamp at small yields, and the ground-vs-airburst
//! deposition scaling.
//!
//! Run with: `cargo test --test fallout_validation`

use approx::assert_relative_eq;
use nuke_effects_core::fallout;
use std::f64::consts::PI;

/// Calm 1 MT ground burst: circular pattern sized by the effective yield.
/// fp = 1, fa = 0.6 + 0.2·log10(1) = 0.6, Ye = 0.6, r₀ = 1000·0.6^0.4 m.
#[test]
fn calm_one_megaton_ground_burst() {
    let footprint = fallout::compute(1.0, 0.0, false, 0.0);
    let expected_km = 0.6_f64.powf(0.4);
    assert_relative_eq!(*footprint.max_downwind_distance, expected_km, max_relative = 0.01);
    assert_eq!(*footprint.max_downwind_distance, *footprint.max_width);
    assert_eq!(*footprint.fallout_angle, 360.0);
    assert_relative_eq!(
        *footprint.dangerous_zone_area,
        PI * expected_km * expected_km,
        max_relative = 0.01
    );
}

/// Sub-threshold wind (0.05 km/h) takes the calm branch: 100 kt ground
/// burst with fa = 0.6 + 0.2·log10(0.1) = 0.4 and Ye = 0.1·0.4 = 0.04
/// gives r₀ = 1000·0.04^0.4 ≈ 276 m.
#[test]
fn near_calm_wind_uses_circular_branch() {
    let footprint = fallout::compute(0.1, 0.0, false, 0.05);
    let expected_km = 0.04_f64.powf(0.4);
    assert_relative_eq!(*footprint.max_downwind_distance, expected_km, max_relative = 0.01);
    assert_eq!(*footprint.max_width, *footprint.max_downwind_distance);
    assert_eq!(*footprint.fallout_angle, 360.0);
}

/// 500 kt at 200 m in a 50 km/h wind: the wind term dominates the
/// cloud-spread minimum and the pattern is a narrow plume.
#[test]
fn strong_wind_drives_the_plume() {
    let windy = fallout::compute(0.5, 200.0, true, 50.0);
    let calm = fallout::compute(0.5, 200.0, true, 0.0);
    assert!(*windy.max_downwind_distance > *calm.max_downwind_distance);
    assert!(*windy.max_width <= *windy.max_downwind_distance);
    assert!(*windy.fallout_angle < 360.0);
}

#[test]
fn windy_pattern_always_narrower_than_long() {
    let cases = [(0.015, 580.0, 15.0), (1.0, 0.0, 20.0), (15.0, 2000.0, 40.0)];
    for (yield_mt, height_m, wind_kmh) in cases {
        let footprint = fallout::compute(yield_mt, height_m, height_m > 0.0, wind_kmh);
        assert!(
            *footprint.max_width <= *footprint.max_downwind_distance,
            "width exceeded downwind reach at Y={yield_mt}"
        );
        assert!(*footprint.fallout_angle < 360.0);
    }
}

/// Ground bursts deposit more than airbursts for the same yield and wind
/// (full particle fraction plus the 1.0 vs 0.3 deposition scale).
#[test]
fn ground_burst_out_deposits_airburst() {
    for wind_kmh in [0.0, 10.0, 40.0] {
        let ground = fallout::compute(1.0, 0.0, false, wind_kmh);
        let air = fallout::compute(1.0, 500.0, true, wind_kmh);
        assert!(
            *ground.dangerous_zone_area >= *air.dangerous_zone_area,
            "airburst out-deposited ground burst at wind={wind_kmh}"
        );
    }
}

/// The activity fraction clamp keeps sub-kiloton yields meaningful
/// instead of letting log10 drive the effective yield negative.
#[test]
fn activity_fraction_clamped_for_tiny_yields() {
    let footprint = fallout::compute(1.0e-4, 0.0, false, 0.0);
    assert!(*footprint.max_downwind_distance > 0.0);
    assert!(*footprint.dangerous_zone_area > 0.0);
    // Clamp floor of 0.05: Ye = 1e-4 · 0.05, r₀ = 1000·Ye^0.4
    let expected_km = (1.0e-4 * 0.05_f64).powf(0.4);
    assert_relative_eq!(*footprint.max_downwind_distance, expected_km, max_relative = 0.01);
}

/// Higher bursts hold back more particles and tighten the plume angle.
#[test]
fn higher_burst_means_less_fallout() {
    let low = fallout::compute(1.0, 200.0, true, 20.0);
    let high = fallout::compute(1.0, 2000.0, true, 20.0);
    assert!(*high.dangerous_zone_area < *low.dangerous_zone_area);
    assert!(*high.fallout_angle < *low.fallout_angle);
}
