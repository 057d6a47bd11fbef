//! Target city reference data and the radial population density model.
//!
//! Density follows a two-regime exponential: a decaying urban core out to
//! the nominal city radius, then a suburban tail with a half-radius
//! e-folding distance. The core regime intentionally starts its decay at
//! the center, so `density_at(0)` equals the headline density.

use serde::{Deserialize, Serialize};

/// Reference record for a target city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub country: String,
    /// Metro population in millions.
    pub population_millions: f64,
    /// Administrative area (km²).
    pub area_km2: f64,
    /// Core population density (people/km²).
    pub density: f64,
    /// Nominal city radius (km).
    pub radius_km: f64,
    /// Suburban population density (people/km²).
    pub suburban_density: f64,
}

impl CityRecord {
    /// Population density (people/km²) at `distance_km` from the center.
    pub fn density_at(&self, distance_km: f64) -> f64 {
        if distance_km <= self.radius_km {
            self.density * (-distance_km / self.radius_km).exp()
        } else {
            self.suburban_density * (-(distance_km - self.radius_km) / (self.radius_km * 0.5)).exp()
        }
    }

    /// The built-in city table.
    pub fn table() -> Vec<CityRecord> {
        CITY_ROWS
            .iter()
            .map(
                |&(name, country, population_millions, area_km2, density, radius_km, suburban_density)| {
                    CityRecord {
                        name: name.to_string(),
                        country: country.to_string(),
                        population_millions,
                        area_km2,
                        density,
                        radius_km,
                        suburban_density,
                    }
                },
            )
            .collect()
    }

    /// Case-insensitive lookup in the built-in table.
    pub fn by_name(name: &str) -> Option<CityRecord> {
        Self::table()
            .into_iter()
            .find(|city| city.name.eq_ignore_ascii_case(name))
    }
}

// Name, country, population (M), area (km²), density (people/km²),
// radius (km), suburban density (people/km²)
const CITY_ROWS: [(&str, &str, f64, f64, f64, f64, f64); 31] = [
    ("Amsterdam", "Netherlands", 1.1, 219.0, 5023.0, 9.2, 2100.0),
    ("Athens", "Greece", 3.2, 412.0, 7767.0, 15.2, 2200.0),
    ("Barcelona", "Spain", 1.6, 101.0, 15842.0, 5.8, 3500.0),
    ("Belgrade", "Serbia", 1.7, 360.0, 4722.0, 10.7, 1200.0),
    ("Berlin", "Germany", 3.7, 892.0, 4147.0, 16.8, 1800.0),
    ("Brussels", "Belgium", 2.1, 161.0, 13043.0, 7.2, 3200.0),
    ("Bucharest", "Romania", 2.1, 228.0, 9210.0, 8.5, 1500.0),
    ("Budapest", "Hungary", 1.8, 525.0, 3428.0, 12.9, 1100.0),
    ("Copenhagen", "Denmark", 0.8, 180.0, 4444.0, 7.5, 1800.0),
    ("Dublin", "Ireland", 1.4, 115.0, 12174.0, 6.1, 2500.0),
    ("Graz", "Austria", 0.29, 127.0, 2283.0, 6.4, 800.0),
    ("Hamburg", "Germany", 1.9, 755.0, 2517.0, 15.5, 1200.0),
    ("Helsinki", "Finland", 0.66, 215.0, 3070.0, 8.2, 1400.0),
    ("Kiev", "Ukraine", 3.0, 839.0, 3575.0, 16.3, 900.0),
    ("Linz", "Austria", 0.21, 96.0, 2187.0, 5.5, 700.0),
    ("Lisbon", "Portugal", 2.9, 100.0, 29000.0, 5.6, 4200.0),
    ("London", "UK", 9.0, 1572.0, 5724.0, 22.5, 3500.0),
    ("Madrid", "Spain", 3.3, 604.0, 5464.0, 13.8, 2200.0),
    ("Milan", "Italy", 1.4, 182.0, 7692.0, 7.6, 2800.0),
    ("Moscow", "Russia", 12.5, 2511.0, 4978.0, 28.1, 2000.0),
    ("Munich", "Germany", 1.5, 310.0, 4839.0, 9.9, 1900.0),
    ("Oslo", "Norway", 0.7, 454.0, 1542.0, 12.0, 800.0),
    ("Paris", "France", 2.2, 105.0, 20952.0, 5.8, 5500.0),
    ("Prague", "Czech Rep.", 1.3, 496.0, 2621.0, 12.5, 1100.0),
    ("Rome", "Italy", 4.3, 1285.0, 3345.0, 20.2, 1600.0),
    ("Sofia", "Bulgaria", 1.3, 492.0, 2642.0, 12.5, 900.0),
    ("Stockholm", "Sweden", 1.0, 188.0, 5319.0, 7.7, 1700.0),
    ("Vienna", "Austria", 1.9, 415.0, 4579.0, 11.5, 1600.0),
    ("Warsaw", "Poland", 1.8, 517.0, 3483.0, 12.8, 1400.0),
    ("Zagreb", "Croatia", 0.8, 641.0, 1248.0, 14.2, 600.0),
    ("Zurich", "Switzerland", 0.43, 88.0, 4886.0, 5.3, 2200.0),
];
