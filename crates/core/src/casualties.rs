//! Casualty integrator.
//!
//! Approximates the radial population integral with twenty concentric
//! rings out to the largest light-damage radius, applying per-channel
//! severity fractions against the city density at each ring's midpoint.
//! Moderate and light thermal and radiation bands contribute nothing;
//! the severity table below carries only the bands the model commits to.

use crate::city::CityRecord;
use crate::effects::WeaponEffects;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// Number of integration rings.
const RING_COUNT: usize = 20;

/// Mortality inside the severe blast radius.
const BLAST_SEVERE_MORTALITY: f64 = 0.9;
/// Severe injury fraction in the moderate blast band.
const BLAST_MODERATE_INJURY: f64 = 0.5;
/// Light injury fraction in the light blast band.
const BLAST_LIGHT_INJURY: f64 = 0.3;
/// Mortality inside the severe thermal radius.
const THERMAL_SEVERE_MORTALITY: f64 = 0.7;
/// Severe injury fraction inside the severe radiation radius.
const RADIATION_SEVERE_INJURY: f64 = 0.8;

/// Long-term mortality fractions of the exposed population.
const LONG_TERM_1YR: f64 = 0.1;
const LONG_TERM_5YR: f64 = 0.2;
const LONG_TERM_10YR: f64 = 0.3;
const LONG_TERM_20YR: f64 = 0.4;

/// Casualty estimate. Counts are fractional people; the integrator does
/// not round.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CasualtyEstimate {
    pub deaths: f64,
    pub severe_injuries: f64,
    pub light_injuries: f64,
    pub long_term_deaths_1yr: f64,
    pub long_term_deaths_5yr: f64,
    pub long_term_deaths_10yr: f64,
    pub long_term_deaths_20yr: f64,
}

impl CasualtyEstimate {
    /// Prompt deaths plus injuries.
    pub fn total_prompt(&self) -> f64 {
        self.deaths + self.severe_injuries + self.light_injuries
    }
}

/// Integrate casualties for the given effects against a city's density
/// profile.
pub fn estimate(effects: &WeaponEffects, city: &CityRecord) -> CasualtyEstimate {
    // Band thresholds as ground ranges in km, recovered from the areas
    let blast_severe = band_radius_km(*effects.blast.severe_area);
    let blast_moderate = band_radius_km(*effects.blast.moderate_area);
    let blast_light = band_radius_km(*effects.blast.light_area);
    let thermal_severe = band_radius_km(*effects.thermal.severe_area);
    let thermal_light = band_radius_km(*effects.thermal.light_area);
    let radiation_severe = band_radius_km(*effects.radiation.severe_area);
    let radiation_light = band_radius_km(*effects.radiation.light_area);

    let max_radius = blast_light.max(thermal_light).max(radiation_light);

    let mut casualties = CasualtyEstimate::default();
    for ring in 0..RING_COUNT {
        let inner = ring as f64 * max_radius / RING_COUNT as f64;
        let outer = (ring + 1) as f64 * max_radius / RING_COUNT as f64;
        let ring_area = PI * (outer * outer - inner * inner);
        let mid = (inner + outer) / 2.0;
        let people = ring_area * city.density_at(mid);

        if mid <= blast_severe {
            casualties.deaths += people * BLAST_SEVERE_MORTALITY;
        } else if mid <= blast_moderate {
            casualties.severe_injuries += people * BLAST_MODERATE_INJURY;
        } else if mid <= blast_light {
            casualties.light_injuries += people * BLAST_LIGHT_INJURY;
        }

        if mid <= thermal_severe {
            casualties.deaths += people * THERMAL_SEVERE_MORTALITY;
        }

        if mid <= radiation_severe {
            casualties.severe_injuries += people * RADIATION_SEVERE_INJURY;
        }
    }

    // Long-term mortality scales off everyone who survived with injuries
    let total_exposed = casualties.severe_injuries + casualties.light_injuries;
    casualties.long_term_deaths_1yr = total_exposed * LONG_TERM_1YR;
    casualties.long_term_deaths_5yr = total_exposed * LONG_TERM_5YR;
    casualties.long_term_deaths_10yr = total_exposed * LONG_TERM_10YR;
    casualties.long_term_deaths_20yr = total_exposed * LONG_TERM_20YR;

    debug!(
        deaths = casualties.deaths,
        severe_injuries = casualties.severe_injuries,
        light_injuries = casualties.light_injuries,
        "casualty integration complete"
    );

    casualties
}

/// Equivalent circular radius (km) of a band area (km²).
fn band_radius_km(area_km2: f64) -> f64 {
    (area_km2 / PI).sqrt()
}
