//! Yield scaling primitives shared by the effect models.
//!
//! Blast dimensions grow with the cube root of yield, thermal effects with
//! a slightly steeper exponent (atmospheric attenuation eats into the
//! inverse-square advantage), and initial radiation with a very shallow
//! exponent (air absorption dominates).

use crate::constants::JOULES_PER_MEGATON;
use std::f64::consts::PI;

/// Circular footprint area in km² for a radius given in meters.
pub fn area_km2(radius_m: f64) -> f64 {
    PI * (radius_m / 1000.0).powi(2)
}

/// Total energy release in joules for a yield in megatons.
pub fn yield_to_joules(yield_mt: f64) -> f64 {
    yield_mt * JOULES_PER_MEGATON
}

/// Cube-root scaling used for blast dimensions and burst heights.
pub fn blast_scaling(yield_mt: f64) -> f64 {
    yield_mt.powf(1.0 / 3.0)
}

/// Thermal radiation scaling, Y^0.4.
pub fn thermal_scaling(yield_mt: f64) -> f64 {
    yield_mt.powf(0.4)
}

/// Initial nuclear radiation scaling, Y^0.19.
pub fn radiation_scaling(yield_mt: f64) -> f64 {
    yield_mt.powf(0.19)
}
