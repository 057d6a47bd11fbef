//! Nuclear Weapon Effects Core Library
//!
//! Closed-form models for the prompt effects of a nuclear detonation and
//! the resulting casualties over a populated area:
//! - Blast overpressure (modified Brode equation with Sachs scaling and
//!   Mach-stem enhancement) and nominal damage radii
//! - Thermal radiation with Beer-Lambert atmospheric attenuation
//! - Initial ionizing radiation
//! - Fallout footprint (stabilized cloud height, wind-driven plume)
//! - Concentric-ring casualty integration against a two-regime city
//!   density profile
//!
//! The engine is pure and single-threaded: given a [`Scenario`] and the
//! built-in reference tables it produces a [`DetonationReport`] with no
//! I/O. Interactive menus and formatting live in the front-end crates.

// Core types and utilities
pub mod core_types;

// Reference data
pub mod city;
pub mod constants;
pub mod weapons;

// Effect models
pub mod blast;
pub mod burst;
pub mod fallout;
pub mod radiation;
pub mod scaling;
pub mod thermal;

// Aggregation
pub mod casualties;
pub mod effects;

// Re-export core types
pub use core_types::{Degrees, Kilometers, KilometersPerHour, Megatons, Meters, Pascals, SquareKilometers};

// Re-export the engine surface
pub use burst::{burst_type_presets, BurstKey, BurstType, BurstTypePreset, OptimalHeights};
pub use casualties::CasualtyEstimate;
pub use city::CityRecord;
pub use effects::{calculate, calculate_effects, DetonationReport, EffectTier, Scenario, WeaponEffects};
pub use fallout::FalloutFootprint;
pub use weapons::{WeaponGroup, WeaponPreset};
