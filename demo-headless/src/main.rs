//! One-shot nuclear effects report for scripted use.
//!
//! ```bash
//! cargo run --package demo-headless -- --weapon "Castle Bravo (US)" --city Paris --wind 20
//! cargo run --package demo-headless -- --yield-mt 1.2 --burst optimum --city Berlin
//! ```

use clap::Parser;
use nuke_effects_core::{
    burst, calculate, BurstType, CityRecord, DetonationReport, KilometersPerHour, Megatons,
    Meters, Scenario, WeaponPreset,
};

/// Nuclear weapon effects and casualty estimator
#[derive(Parser, Debug)]
#[command(name = "nuke-effects")]
#[command(about = "Estimate detonation effects and casualties over a city", long_about = None)]
struct Args {
    /// Weapon yield in megatons (ignored when --weapon is given)
    #[arg(short = 'y', long, default_value_t = 1.0)]
    yield_mt: f64,

    /// Take yield and typical burst height from a named weapon preset
    #[arg(short, long)]
    weapon: Option<String>,

    /// Burst type: surface, optimum, low, high, thermal, blast or custom
    #[arg(short, long)]
    burst: Option<String>,

    /// Burst height in meters (required with --burst custom)
    #[arg(long)]
    height: Option<f64>,

    /// Target city from the built-in table
    #[arg(short, long, default_value = "London")]
    city: String,

    /// Wind speed in km/h
    #[arg(long, default_value_t = 0.0)]
    wind: f64,

    /// List the weapon presets and exit
    #[arg(long)]
    list_weapons: bool,

    /// List the target cities and exit
    #[arg(long)]
    list_cities: bool,
}

fn main() {
    let args = Args::parse();

    if args.list_weapons {
        for preset in WeaponPreset::table() {
            println!(
                "{:<20} {:<22} {:>7.3} MT  h={:.0} m",
                preset.name, preset.weapon_type, preset.yield_mt, preset.typical_height_m
            );
        }
        return;
    }
    if args.list_cities {
        for city in CityRecord::table() {
            println!(
                "{:<12} {:<12} pop {:>5.2} M  density {:>6.0}/km²",
                city.name, city.country, city.population_millions, city.density
            );
        }
        return;
    }

    let preset = args.weapon.as_deref().map(|name| {
        WeaponPreset::by_name(name).unwrap_or_else(|| {
            eprintln!("unknown weapon '{name}'; try --list-weapons");
            std::process::exit(2);
        })
    });

    let yield_mt = preset.as_ref().map_or(args.yield_mt, |p| p.yield_mt);
    if yield_mt <= 0.0 {
        eprintln!("yield must be positive (got {yield_mt} MT)");
        std::process::exit(2);
    }

    let height_m = match (&args.burst, &preset) {
        (Some(name), _) => match parse_burst(name, args.height) {
            Ok(burst_type) => *burst_type.resolve_height(yield_mt),
            Err(message) => {
                eprintln!("{message}");
                std::process::exit(2);
            }
        },
        (None, Some(p)) => p.typical_height_m,
        (None, None) => 0.0,
    };
    if burst::exceeds_practical_height(height_m, yield_mt) {
        eprintln!("warning: {height_m:.0} m is above three times the combined optimum height");
    }

    let Some(city) = CityRecord::by_name(&args.city) else {
        eprintln!("unknown city '{}'; try --list-cities", args.city);
        std::process::exit(2);
    };

    let wind = args.wind.max(0.0);
    let scenario = Scenario::new(
        Megatons::new(yield_mt),
        Meters::new(height_m),
        KilometersPerHour::new(wind),
        city,
    );
    let report = calculate(&scenario);
    print_report(&scenario, &report);
}

fn parse_burst(name: &str, height: Option<f64>) -> Result<BurstType, String> {
    match name.to_ascii_lowercase().as_str() {
        "surface" => Ok(BurstType::Surface),
        "optimum" => Ok(BurstType::OptimalAir),
        "low" => Ok(BurstType::LowAir),
        "high" => Ok(BurstType::HighAir),
        "thermal" => Ok(BurstType::ThermalOptimized),
        "blast" => Ok(BurstType::BlastOptimized),
        "custom" => height
            .map(|h| BurstType::Custom(Meters::new(h)))
            .ok_or_else(|| "--burst custom requires --height".to_string()),
        other => Err(format!(
            "unknown burst type '{other}' (surface, optimum, low, high, thermal, blast, custom)"
        )),
    }
}

fn format_distance(meters: f64) -> String {
    if meters < 1.0 {
        "< 1 m".to_string()
    } else if meters >= 1000.0 {
        format!("{:.1} km", meters / 1000.0)
    } else {
        format!("{meters:.0} m")
    }
}

fn print_tier(name: &str, tier: &nuke_effects_core::EffectTier) {
    println!(
        "{name:<10} | Severe: {:>9} ({:.2} km²) | Moderate: {:>9} ({:.2} km²) | Light: {:>9} ({:.2} km²)",
        format_distance(*tier.severe_radius),
        *tier.severe_area,
        format_distance(*tier.moderate_radius),
        *tier.moderate_area,
        format_distance(*tier.light_radius),
        *tier.light_area,
    );
}

fn print_report(scenario: &Scenario, report: &DetonationReport) {
    let divider = "-".repeat(78);
    println!("{}", "=".repeat(78));
    print!(
        "Weapon Data | Yield: {} | Type: {}",
        scenario.yield_mt,
        if scenario.airburst { "Air burst" } else { "Ground burst" }
    );
    if scenario.airburst {
        print!(" | Height: {}", scenario.height_m);
    }
    println!();
    println!("{divider}");

    print_tier("Thermal", &report.effects.thermal);
    print_tier("Blast", &report.effects.blast);
    print_tier("Radiation", &report.effects.radiation);
    println!("{divider}");

    let fallout = &report.effects.fallout;
    println!(
        "Fallout     | Wind: {} | Max distance: {} | Width: {}",
        scenario.wind_kmh, fallout.max_downwind_distance, fallout.max_width
    );
    println!(
        "            | Dangerous zone: {} | Angular spread: {}",
        fallout.dangerous_zone_area, fallout.fallout_angle
    );
    println!("{divider}");

    let c = &report.casualties;
    println!("Estimated casualties in {}:", scenario.city.name);
    println!("  Fatalities:                  {:>14.0}", c.deaths);
    println!("  Severe injuries:             {:>14.0}", c.severe_injuries);
    println!("  Light injuries:              {:>14.0}", c.light_injuries);
    println!("  Total prompt casualties:     {:>14.0}", c.total_prompt());
    println!("  Long-term deaths (1 year):   {:>14.0}", c.long_term_deaths_1yr);
    println!("  Long-term deaths (5 years):  {:>14.0}", c.long_term_deaths_5yr);
    println!("  Long-term deaths (10 years): {:>14.0}", c.long_term_deaths_10yr);
    println!("  Long-term deaths (20 years): {:>14.0}", c.long_term_deaths_20yr);
    println!("{}", "=".repeat(78));
}
