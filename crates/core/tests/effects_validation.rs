//! Effect model validation suite.
//!
//! Checks the per-channel damage tiers against hand-computed expectations
//! for historic detonations, plus the structural invariants every
//! scenario must satisfy: tier ordering, area/radius consistency, and
//! monotonicity in yield and burst height.
//!
//! Run with: `cargo test --test effects_validation`

use approx::assert_relative_eq;
use nuke_effects_core::{
    calculate_effects, CityRecord, EffectTier, KilometersPerHour, Megatons, Meters, Scenario,
};
use std::f64::consts::PI;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn scenario(yield_mt: f64, height_m: f64, wind_kmh: f64, city: &str) -> Scenario {
    Scenario::new(
        Megatons::new(yield_mt),
        Meters::new(height_m),
        KilometersPerHour::new(wind_kmh),
        CityRecord::by_name(city).expect("city in built-in table"),
    )
}

fn assert_tier_invariants(tier: &EffectTier) {
    assert!(*tier.severe_radius <= *tier.moderate_radius);
    assert!(*tier.moderate_radius <= *tier.light_radius);
    assert_relative_eq!(
        *tier.severe_area,
        PI * (*tier.severe_radius / 1000.0).powi(2),
        max_relative = 1e-9
    );
    assert_relative_eq!(
        *tier.moderate_area,
        PI * (*tier.moderate_radius / 1000.0).powi(2),
        max_relative = 1e-9
    );
    assert_relative_eq!(
        *tier.light_area,
        PI * (*tier.light_radius / 1000.0).powi(2),
        max_relative = 1e-9
    );
}

// ───────────────────────────────────────────────────────────────────────
// Historic scenario characterizations (1% tolerance)
// ───────────────────────────────────────────────────────────────────────

/// Little Boy analog: 15 kt airburst at 580 m over London.
#[test]
fn little_boy_over_london() {
    let effects = calculate_effects(&scenario(0.015, 580.0, 0.0, "London"));
    // 2000 · 0.015^(1/3) · (1 − 580/10000) ≈ 464.6 m
    assert_relative_eq!(*effects.blast.severe_radius, 464.6, max_relative = 0.01);
    assert_eq!(*effects.fallout.fallout_angle, 360.0);
}

/// 1 MT surface burst over Moscow: severe blast radius is exactly the
/// 2000 m coefficient, undamped.
#[test]
fn one_megaton_surface_over_moscow() {
    let effects = calculate_effects(&scenario(1.0, 0.0, 0.0, "Moscow"));
    assert_relative_eq!(*effects.blast.severe_radius, 2000.0, max_relative = 1e-12);
}

/// Castle Bravo analog: 15 MT at 2000 m over Paris.
#[test]
fn castle_bravo_over_paris() {
    let effects = calculate_effects(&scenario(15.0, 2000.0, 20.0, "Paris"));
    // 2000 · 15^(1/3) · 0.8 ≈ 3946 m
    assert_relative_eq!(*effects.blast.severe_radius, 3945.9, max_relative = 0.01);
}

/// Tsar Bomba analog: 50 MT at 4000 m over Berlin. Thermal radii are not
/// damped by burst height.
#[test]
fn tsar_bomba_over_berlin() {
    let effects = calculate_effects(&scenario(50.0, 4000.0, 10.0, "Berlin"));
    // 2400 · 50^0.4 ≈ 11476 m, regardless of the 4 km burst height
    assert_relative_eq!(*effects.thermal.light_radius, 11476.0, max_relative = 0.01);
    let nominal = nuke_effects_core::thermal::nominal_tier(50.0);
    assert_eq!(*effects.thermal.light_radius, *nominal.light_radius);
}

// ───────────────────────────────────────────────────────────────────────
// Structural invariants
// ───────────────────────────────────────────────────────────────────────

#[test]
fn tiers_are_ordered_and_areas_consistent() {
    let cases = [
        (0.015, 580.0, 0.0),
        (0.1, 250.0, 10.0),
        (1.0, 0.0, 0.0),
        (15.0, 2000.0, 20.0),
        (50.0, 4000.0, 10.0),
    ];
    for (yield_mt, height_m, wind_kmh) in cases {
        let effects = calculate_effects(&scenario(yield_mt, height_m, wind_kmh, "Vienna"));
        assert_tier_invariants(&effects.blast);
        assert_tier_invariants(&effects.thermal);
        assert_tier_invariants(&effects.radiation);
    }
}

#[test]
fn blast_radius_non_increasing_with_height() {
    let mut previous = f64::INFINITY;
    let mut height = 0.0;
    while height <= 10000.0 {
        let effects = calculate_effects(&scenario(1.0, height, 0.0, "Madrid"));
        let severe = *effects.blast.severe_radius;
        assert!(
            severe <= previous,
            "blast radius grew from {previous} to {severe} at h={height}"
        );
        previous = severe;
        height += 500.0;
    }
    // At ground level the damping factor is exactly one
    let ground = calculate_effects(&scenario(1.0, 0.0, 0.0, "Madrid"));
    assert_eq!(*ground.blast.severe_radius, 2000.0);
}

#[test]
fn severe_radii_strictly_increase_with_yield() {
    let yields = [0.015, 0.05, 0.3, 1.0, 5.0, 15.0, 50.0];
    let mut previous = (0.0, 0.0, 0.0);
    for yield_mt in yields {
        let effects = calculate_effects(&scenario(yield_mt, 300.0, 10.0, "Rome"));
        let current = (
            *effects.blast.severe_radius,
            *effects.thermal.severe_radius,
            *effects.radiation.severe_radius,
        );
        assert!(current.0 > previous.0, "blast not monotone at {yield_mt}");
        assert!(current.1 > previous.1, "thermal not monotone at {yield_mt}");
        assert!(current.2 > previous.2, "radiation not monotone at {yield_mt}");
        previous = current;
    }
}

#[test]
fn radiation_is_damped_like_blast() {
    let surface = calculate_effects(&scenario(1.0, 0.0, 0.0, "Dublin"));
    let air = calculate_effects(&scenario(1.0, 3000.0, 0.0, "Dublin"));
    assert_relative_eq!(
        *air.radiation.severe_radius,
        *surface.radiation.severe_radius * 0.7,
        max_relative = 1e-9
    );
}
