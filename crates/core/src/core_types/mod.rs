//! Core types and utilities

pub mod units;

pub use units::{Degrees, Kilometers, KilometersPerHour, Megatons, Meters, Pascals, SquareKilometers};
