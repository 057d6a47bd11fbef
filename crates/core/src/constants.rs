//! Physical constants and model calibration parameters.

/// Standard air density at sea level (kg/m³).
pub const AIR_DENSITY: f64 = 1.225;

/// Speed of sound in air at 15 °C (m/s).
pub const SPEED_OF_SOUND: f64 = 340.29;

/// Standard gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.80665;

/// Sea-level atmospheric pressure (Pa).
pub const ATMOSPHERIC_PRESSURE: f64 = 101325.0;

/// Stefan-Boltzmann constant (W/(m²·K⁴)).
pub const STEFAN_BOLTZMANN: f64 = 5.670374419e-8;

/// Planck constant (J·s).
pub const PLANCK_CONSTANT: f64 = 6.62607015e-34;

/// Boltzmann constant (J/K).
pub const BOLTZMANN_CONSTANT: f64 = 1.380649e-23;

/// Speed of light in vacuum (m/s).
pub const LIGHT_SPEED: f64 = 299792458.0;

/// Energy release per megaton of TNT equivalent (J).
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Fraction of total yield emitted as thermal radiation.
pub const THERMAL_FRACTION: f64 = 0.35;

/// Calibration constant for the thermal fluence model.
pub const THERMAL_CALIBRATION: f64 = 10000.0;
