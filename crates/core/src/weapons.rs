//! Weapon preset reference data.

use serde::{Deserialize, Serialize};

/// Preset describing a deployed or historic weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponPreset {
    pub name: String,
    pub weapon_type: String,
    /// Yield in megatons.
    pub yield_mt: f64,
    /// Typical delivery is an airburst.
    pub airburst: bool,
    /// Typical height of burst (m).
    pub typical_height_m: f64,
}

/// Preset grouping used by the shells when listing weapons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponGroup {
    Historic,
    UnitedStates,
    Russia,
    China,
    OtherPowers,
}

impl WeaponGroup {
    pub fn label(self) -> &'static str {
        match self {
            WeaponGroup::Historic => "Historic Weapons",
            WeaponGroup::UnitedStates => "United States",
            WeaponGroup::Russia => "Russia",
            WeaponGroup::China => "China",
            WeaponGroup::OtherPowers => "Other Nuclear Powers",
        }
    }

    /// Index range of this group within the preset table.
    pub fn range(self) -> std::ops::Range<usize> {
        match self {
            WeaponGroup::Historic => 0..5,
            WeaponGroup::UnitedStates => 5..12,
            WeaponGroup::Russia => 12..18,
            WeaponGroup::China => 18..24,
            WeaponGroup::OtherPowers => 24..35,
        }
    }

    pub fn all() -> [WeaponGroup; 5] {
        [
            WeaponGroup::Historic,
            WeaponGroup::UnitedStates,
            WeaponGroup::Russia,
            WeaponGroup::China,
            WeaponGroup::OtherPowers,
        ]
    }
}

impl WeaponPreset {
    /// The built-in weapon preset table, grouped per `WeaponGroup`.
    pub fn table() -> Vec<WeaponPreset> {
        WEAPON_ROWS
            .iter()
            .map(|&(name, weapon_type, yield_mt, airburst, typical_height_m)| WeaponPreset {
                name: name.to_string(),
                weapon_type: weapon_type.to_string(),
                yield_mt,
                airburst,
                typical_height_m,
            })
            .collect()
    }

    /// Case-insensitive lookup in the built-in table.
    pub fn by_name(name: &str) -> Option<WeaponPreset> {
        Self::table()
            .into_iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    }
}

// Name, type, yield (MT), airburst, typical height (m)
const WEAPON_ROWS: [(&str, &str, f64, bool, f64); 35] = [
    // Historic
    ("Little Boy (US)", "Uranium Gun-Type", 0.015, true, 580.0),
    ("Fat Man (US)", "Plutonium Implosion", 0.021, true, 503.0),
    ("Ivy King (US)", "Fission", 0.500, true, 450.0),
    ("Castle Bravo (US)", "Thermonuclear", 15.0, true, 2000.0),
    ("Tsar Bomba (USSR)", "Thermonuclear", 50.0, true, 4000.0),
    // United States
    ("W88", "SLBM Thermonuclear", 0.475, true, 300.0),
    ("W87", "ICBM Thermonuclear", 0.300, true, 300.0),
    ("W76-1", "SLBM Thermonuclear", 0.100, true, 250.0),
    ("W78", "ICBM Thermonuclear", 0.350, true, 300.0),
    ("B61-12", "Variable Yield", 0.050, true, 200.0),
    ("W80", "Cruise Missile", 0.150, true, 250.0),
    ("B83", "Strategic Bomb", 1.200, true, 300.0),
    // Russia
    ("RS-28 Sarmat", "MIRV Thermonuclear", 0.800, true, 350.0),
    ("R-36M2 Voevoda", "MIRV Thermonuclear", 0.750, true, 300.0),
    ("RT-2PM2 Topol-M", "Thermonuclear", 0.550, true, 300.0),
    ("RSM-56 Bulava", "SLBM MIRV", 0.150, true, 250.0),
    ("9K720 Iskander", "Enhanced Radiation", 0.050, true, 200.0),
    ("RS-24 Yars", "Mobile ICBM", 0.300, true, 300.0),
    // China
    ("DF-5B", "MIRV Thermonuclear", 0.500, true, 300.0),
    ("DF-41", "Mobile MIRV", 0.350, true, 250.0),
    ("JL-2", "SLBM", 0.250, true, 250.0),
    ("DF-31AG", "Mobile ICBM", 0.250, true, 300.0),
    ("DF-26", "IRB Thermonuclear", 0.150, true, 200.0),
    ("DF-21", "Medium Range", 0.300, true, 250.0),
    // Other nuclear powers
    ("Trident D5", "UK SLBM", 0.100, true, 250.0),
    ("M51", "French SLBM", 0.150, true, 250.0),
    ("ASMP-A", "French Cruise", 0.300, true, 200.0),
    ("Jericho III", "Israeli IRBM", 0.400, true, 250.0),
    ("Agni-V", "Indian ICBM", 0.250, true, 300.0),
    ("K-15 Sagarika", "Indian SLBM", 0.200, true, 250.0),
    ("Shaheen-III", "Pakistani MRBM", 0.200, true, 250.0),
    ("Babur", "Pakistani Cruise", 0.050, true, 200.0),
    ("Hwasong-15", "NK ICBM", 0.200, true, 250.0),
    ("Hwasong-14", "NK ICBM", 0.150, true, 250.0),
    ("Pukguksong-2", "NK MRBM", 0.050, true, 200.0),
];
