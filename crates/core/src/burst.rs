//! Burst geometry: optimal burst heights, the tagged burst-type variants
//! the shell offers, the linear height-of-burst damping applied to blast
//! and radiation, and the burst-type reference presets.

use crate::core_types::Meters;
use crate::scaling;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Optimal burst heights for a given yield, cube-root scaled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimalHeights {
    /// Height maximizing thermal radiation coverage.
    pub thermal: Meters,
    /// Height maximizing blast overpressure coverage.
    pub blast: Meters,
    /// Compromise height between the two.
    pub combined: Meters,
}

impl OptimalHeights {
    pub fn for_yield(yield_mt: f64) -> Self {
        let yield_factor = scaling::blast_scaling(yield_mt);
        Self {
            thermal: Meters::new(220.0 * yield_factor),
            blast: Meters::new(180.0 * yield_factor),
            combined: Meters::new(200.0 * yield_factor),
        }
    }
}

/// Burst type selected by the shell. Height resolution is a pure
/// function of the variant and the yield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BurstType {
    /// Ground-level detonation, maximum fallout.
    Surface,
    /// Combined optimum air burst.
    OptimalAir,
    /// 0.7 × combined optimum.
    LowAir,
    /// 1.5 × combined optimum.
    HighAir,
    /// Thermal-optimized height.
    ThermalOptimized,
    /// Blast-optimized height.
    BlastOptimized,
    /// User-supplied height, clamped to ≥ 0.
    Custom(Meters),
}

impl BurstType {
    /// Burst altitude in meters for this variant at the given yield.
    pub fn resolve_height(self, yield_mt: f64) -> Meters {
        let oh = OptimalHeights::for_yield(yield_mt);
        match self {
            BurstType::Surface => Meters::new(0.0),
            BurstType::OptimalAir => oh.combined,
            BurstType::LowAir => Meters::new(*oh.combined * 0.7),
            BurstType::HighAir => Meters::new(*oh.combined * 1.5),
            BurstType::ThermalOptimized => oh.thermal,
            BurstType::BlastOptimized => oh.blast,
            BurstType::Custom(h) => Meters::new(h.max(0.0)),
        }
    }

    /// True when the resolved height is above ground level.
    pub fn is_airburst(self, yield_mt: f64) -> bool {
        *self.resolve_height(yield_mt) > 0.0
    }
}

/// Heights beyond three times the combined optimum waste most of the
/// weapon's output; the shell warns but still computes.
pub fn exceeds_practical_height(height_m: f64, yield_mt: f64) -> bool {
    height_m > 3.0 * *OptimalHeights::for_yield(yield_mt).combined
}

/// Linear height-of-burst damping for blast and radiation radii,
/// clamped to a 30% floor. Thermal radii are deliberately not damped;
/// the fluence model carries the height dependence instead.
pub fn height_factor(height_m: f64) -> f64 {
    (1.0 - height_m / 10000.0).clamp(0.3, 1.0)
}

/// Lookup key for the burst-type reference presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BurstKey {
    Surface,
    Optimum,
    Low,
    High,
}

/// Reference record describing a burst type for the shell. The fallout
/// and radiation factors are descriptive data and are not wired into
/// the effect formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurstTypePreset {
    pub name: &'static str,
    pub fallout_factor: f64,
    pub radiation_factor: f64,
    pub description: &'static str,
}

/// The four burst-type reference presets, keyed for shell lookup.
pub fn burst_type_presets() -> FxHashMap<BurstKey, BurstTypePreset> {
    let mut presets = FxHashMap::default();
    presets.insert(
        BurstKey::Surface,
        BurstTypePreset {
            name: "Surface Burst",
            fallout_factor: 1.0,
            radiation_factor: 1.0,
            description: "Maximum fallout, reduced blast radius",
        },
    );
    presets.insert(
        BurstKey::Optimum,
        BurstTypePreset {
            name: "Optimal Air Burst",
            fallout_factor: 0.5,
            radiation_factor: 0.7,
            description: "Best blast/thermal effects",
        },
    );
    presets.insert(
        BurstKey::Low,
        BurstTypePreset {
            name: "Low Air Burst",
            fallout_factor: 0.7,
            radiation_factor: 0.8,
            description: "Balanced effects",
        },
    );
    presets.insert(
        BurstKey::High,
        BurstTypePreset {
            name: "High Air Burst",
            fallout_factor: 0.3,
            radiation_factor: 0.5,
            description: "Minimum fallout, reduced blast",
        },
    );
    presets
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn optimal_heights_scale_with_cube_root() {
        let oh = OptimalHeights::for_yield(8.0);
        assert_relative_eq!(*oh.thermal, 440.0, max_relative = 1e-12);
        assert_relative_eq!(*oh.blast, 360.0, max_relative = 1e-12);
        assert_relative_eq!(*oh.combined, 400.0, max_relative = 1e-12);
    }

    #[test]
    fn burst_variants_resolve_expected_heights() {
        let y = 1.0;
        assert_eq!(*BurstType::Surface.resolve_height(y), 0.0);
        assert_relative_eq!(*BurstType::OptimalAir.resolve_height(y), 200.0, max_relative = 1e-12);
        assert_relative_eq!(*BurstType::LowAir.resolve_height(y), 140.0, max_relative = 1e-12);
        assert_relative_eq!(*BurstType::HighAir.resolve_height(y), 300.0, max_relative = 1e-12);
        assert_relative_eq!(*BurstType::ThermalOptimized.resolve_height(y), 220.0, max_relative = 1e-12);
        assert_relative_eq!(*BurstType::BlastOptimized.resolve_height(y), 180.0, max_relative = 1e-12);
    }

    #[test]
    fn custom_height_clamps_negative_to_ground() {
        let burst = BurstType::Custom(Meters::new(-50.0));
        assert_eq!(*burst.resolve_height(1.0), 0.0);
        assert!(!burst.is_airburst(1.0));
    }

    #[test]
    fn surface_is_never_airburst() {
        assert!(!BurstType::Surface.is_airburst(50.0));
        assert!(BurstType::OptimalAir.is_airburst(50.0));
    }

    #[test]
    fn height_factor_clamps() {
        assert_eq!(height_factor(0.0), 1.0);
        assert_relative_eq!(height_factor(2000.0), 0.8, max_relative = 1e-12);
        // 30% floor above 7 km
        assert_eq!(height_factor(10000.0), 0.3);
        assert_eq!(height_factor(50000.0), 0.3);
    }

    #[test]
    fn practical_height_warning_threshold() {
        // combined optimum at 1 MT is 200 m
        assert!(!exceeds_practical_height(600.0, 1.0));
        assert!(exceeds_practical_height(601.0, 1.0));
    }

    #[test]
    fn preset_table_has_four_entries_with_sane_factors() {
        let presets = burst_type_presets();
        assert_eq!(presets.len(), 4);
        for preset in presets.values() {
            assert!(preset.fallout_factor > 0.0 && preset.fallout_factor <= 1.0);
            assert!(preset.radiation_factor > 0.0 && preset.radiation_factor <= 1.0);
        }
        assert_eq!(presets[&BurstKey::Surface].fallout_factor, 1.0);
        assert_eq!(presets[&BurstKey::High].radiation_factor, 0.5);
    }
}
