//! Semantic unit types for physical quantities.
//!
//! Newtype wrappers over `f64` keep megatons, meters and kilometers from
//! being mixed by accident at the API boundary. All effect models work in
//! `f64` internally; the wrappers deref to the raw value.
//!
//! # Usage
//! ```
//! use nuke_effects_core::core_types::units::{Megatons, Meters};
//!
//! let y = Megatons::new(1.2);
//! let h = Meters::new(300.0);
//! assert!(*y > 1.0 && *h > 0.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Weapon yield in megatons of TNT equivalent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Megatons(f64);

impl Megatons {
    pub fn new(value: f64) -> Self {
        Self(value)
    }
}

impl Deref for Megatons {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl fmt::Display for Megatons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} MT", self.0)
    }
}

/// Distance or altitude in meters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Meters(f64);

impl Meters {
    pub fn new(value: f64) -> Self {
        Self(value)
    }
}

impl Deref for Meters {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} m", self.0)
    }
}

/// Horizontal ground distance in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kilometers(f64);

impl Kilometers {
    pub fn new(value: f64) -> Self {
        Self(value)
    }
}

impl Deref for Kilometers {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} km", self.0)
    }
}

/// Footprint area in square kilometers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SquareKilometers(f64);

impl SquareKilometers {
    pub fn new(value: f64) -> Self {
        Self(value)
    }
}

impl Deref for SquareKilometers {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl fmt::Display for SquareKilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} km²", self.0)
    }
}

/// Wind speed in kilometers per hour.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct KilometersPerHour(f64);

impl KilometersPerHour {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Convert to meters per second.
    pub fn as_ms(&self) -> f64 {
        self.0 / 3.6
    }
}

impl Deref for KilometersPerHour {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl fmt::Display for KilometersPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} km/h", self.0)
    }
}

/// Angular spread in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Degrees(f64);

impl Degrees {
    pub fn new(value: f64) -> Self {
        Self(value)
    }
}

impl Deref for Degrees {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

/// Overpressure in pascals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Pascals(f64);

impl Pascals {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Convert to pounds per square inch.
    pub fn as_psi(&self) -> f64 {
        self.0 / 6894.757
    }
}

impl Deref for Pascals {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl fmt::Display for Pascals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} Pa", self.0)
    }
}
