//! Interactive Nuclear Effects Calculator
//!
//! A terminal wizard over the effects core: pick a weapon (or enter a
//! custom yield), choose a burst type, pick a target city, set the wind,
//! and read the effects and casualty report.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-interactive
//! ```
//!
//! All selection steps accept a number; Ctrl-C or Ctrl-D exits cleanly.

use nuke_effects_core::{
    burst, burst_type_presets, calculate, BurstKey, BurstType, CityRecord, DetonationReport,
    KilometersPerHour, Megatons, Meters, OptimalHeights, Scenario, WeaponGroup, WeaponPreset,
};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::info;

const DIVIDER_WIDTH: usize = 78;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║          Nuclear Weapons Effects Calculator                ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    println!();

    let Ok(mut rl) = DefaultEditor::new() else {
        eprintln!("failed to initialize terminal input");
        return;
    };

    let Some(yield_mt) = select_weapon(&mut rl) else {
        return;
    };
    let Some(height_m) = select_burst(&mut rl, yield_mt) else {
        return;
    };
    let Some(city) = select_city(&mut rl) else {
        return;
    };
    let Some(wind_kmh) = prompt_wind(&mut rl) else {
        return;
    };

    let scenario = Scenario::new(
        Megatons::new(yield_mt),
        Meters::new(height_m),
        KilometersPerHour::new(wind_kmh),
        city,
    );
    info!(yield_mt, height_m, wind_kmh, "running calculation");
    let report = calculate(&scenario);
    print_report(&scenario, &report);
}

/// Read one trimmed line; `None` means the user asked to leave.
fn read_line(rl: &mut DefaultEditor, prompt: &str) -> Option<String> {
    match rl.readline(prompt) {
        Ok(line) => Some(line.trim().to_string()),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => None,
        Err(e) => {
            eprintln!("input error: {e}");
            None
        }
    }
}

/// Prompt until the input parses as f64 within `[min, ∞)`.
fn prompt_f64(rl: &mut DefaultEditor, prompt: &str, min: f64) -> Option<f64> {
    loop {
        let line = read_line(rl, prompt)?;
        match line.parse::<f64>() {
            Ok(value) if value >= min => return Some(value),
            _ => println!("Please enter a number ≥ {min}."),
        }
    }
}

fn print_header(title: &str) {
    println!("{}", "-".repeat(DIVIDER_WIDTH));
    println!("{title}");
    println!("{}", "-".repeat(DIVIDER_WIDTH));
}

/// Weapon selection: grouped presets plus a custom-yield entry.
/// Returns the chosen yield in megatons.
fn select_weapon(rl: &mut DefaultEditor) -> Option<f64> {
    print_header("Nuclear Weapon Selection");
    let presets = WeaponPreset::table();
    for group in WeaponGroup::all() {
        println!("{}:", group.label());
        for index in group.range() {
            let preset = &presets[index];
            println!(
                "{:>3}. {:<22} {:<22} ({:.3} MT)",
                index + 1,
                preset.name,
                preset.weapon_type,
                preset.yield_mt
            );
        }
        println!("{}", "-".repeat(DIVIDER_WIDTH));
    }
    println!("{:>3}. Custom yield", presets.len() + 1);
    println!("{}", "-".repeat(DIVIDER_WIDTH));

    loop {
        let line = read_line(rl, &format!("Select weapon (1-{}): ", presets.len() + 1))?;
        match line.parse::<usize>() {
            Ok(choice) if (1..=presets.len()).contains(&choice) => {
                let preset = &presets[choice - 1];
                println!("\nSelected: {} ({})", preset.name, preset.weapon_type);
                return Some(preset.yield_mt);
            }
            Ok(choice) if choice == presets.len() + 1 => {
                loop {
                    let yield_mt = prompt_f64(rl, "Enter yield (MT): ", 0.0)?;
                    if yield_mt > 0.0 {
                        return Some(yield_mt);
                    }
                    println!("Yield must be positive.");
                }
            }
            _ => println!("Please choose 1-{}.", presets.len() + 1),
        }
    }
}

/// Burst-type selection. Returns the resolved burst height in meters.
fn select_burst(rl: &mut DefaultEditor, yield_mt: f64) -> Option<f64> {
    print_header("Burst Type Selection");

    let oh = OptimalHeights::for_yield(yield_mt);
    println!("Optimal Heights Analysis:");
    println!("Thermal effects:     {:.0} m", *oh.thermal);
    println!("Blast effects:       {:.0} m", *oh.blast);
    println!("Combined optimum:    {:.0} m", *oh.combined);
    println!();

    let presets = burst_type_presets();
    let menu = [
        (BurstKey::Surface, BurstType::Surface),
        (BurstKey::Optimum, BurstType::OptimalAir),
        (BurstKey::Low, BurstType::LowAir),
        (BurstKey::High, BurstType::HighAir),
    ];
    println!("Select burst type:");
    for (position, (key, burst_type)) in menu.iter().enumerate() {
        let preset = &presets[key];
        println!(
            "{}. {:<19} | Height: {:>6.0} m | {}",
            position + 1,
            preset.name,
            *burst_type.resolve_height(yield_mt),
            preset.description
        );
    }
    println!(
        "5. Thermal Optimized  | Height: {:>6.0} m | Maximum thermal radiation effects",
        *oh.thermal
    );
    println!(
        "6. Blast Optimized    | Height: {:>6.0} m | Maximum blast wave effects",
        *oh.blast
    );
    println!("7. Custom Height      | User defined height");
    println!("{}", "-".repeat(DIVIDER_WIDTH));

    let burst_type = loop {
        let line = read_line(rl, "Enter selection (1-7): ")?;
        match line.parse::<u32>() {
            Ok(1) => break BurstType::Surface,
            Ok(2) => break BurstType::OptimalAir,
            Ok(3) => break BurstType::LowAir,
            Ok(4) => break BurstType::HighAir,
            Ok(5) => break BurstType::ThermalOptimized,
            Ok(6) => break BurstType::BlastOptimized,
            Ok(7) => {
                let height = prompt_f64(rl, "Enter burst height (meters): ", 0.0)?;
                if burst::exceeds_practical_height(height, yield_mt) {
                    println!("Warning: height might be too high for effective weapon use");
                }
                break BurstType::Custom(Meters::new(height));
            }
            // Fall back to the combined optimum, like the menu default
            Ok(_) => break BurstType::OptimalAir,
            Err(_) => println!("Please choose 1-7."),
        }
    };

    Some(*burst_type.resolve_height(yield_mt))
}

/// City selection from the built-in table.
fn select_city(rl: &mut DefaultEditor) -> Option<CityRecord> {
    print_header("Target City Selection");
    let cities = CityRecord::table();
    for (index, city) in cities.iter().enumerate() {
        println!(
            "{:>2}. {:<12} {:<12} Pop: {:.2} M",
            index + 1,
            city.name,
            city.country,
            city.population_millions
        );
    }
    println!("{}", "-".repeat(DIVIDER_WIDTH));

    loop {
        let line = read_line(rl, &format!("Enter city number (1-{}): ", cities.len()))?;
        match line.parse::<usize>() {
            Ok(choice) if (1..=cities.len()).contains(&choice) => {
                return Some(cities[choice - 1].clone());
            }
            _ => println!("Please choose 1-{}.", cities.len()),
        }
    }
}

fn prompt_wind(rl: &mut DefaultEditor) -> Option<f64> {
    print_header("Wind Parameters");
    prompt_f64(rl, "Enter wind speed (km/h): ", 0.0)
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
    println!();
    println!("Calculated Effects:");
    println!("{}", "=".repeat(DIVIDER_WIDTH));
    print!(
        "Weapon Data | Yield: {} | Type: {}",
        scenario.yield_mt,
        if scenario.airburst { "Air burst" } else { "Ground burst" }
    );
    if scenario.airburst {
        print!(" | Height: {}", scenario.height_m);
    }
    println!();
    println!("{}", "-".repeat(DIVIDER_WIDTH));

    print_tier("Thermal", &report.effects.thermal);
    print_tier("Blast", &report.effects.blast);
    print_tier("Radiation", &report.effects.radiation);
    println!("{}", "-".repeat(DIVIDER_WIDTH));

    let fallout = &report.effects.fallout;
    println!(
        "Fallout Data | Wind: {} | Max distance: {}",
        scenario.wind_kmh, fallout.max_downwind_distance
    );
    println!(
        "Width: {} | Fallout zone: {} | Angular spread: {}",
        fallout.max_width, fallout.dangerous_zone_area, fallout.fallout_angle
    );
    println!("{}", "-".repeat(DIVIDER_WIDTH));

    let c = &report.casualties;
    println!("Estimated Casualties in {}:", scenario.city.name);
    println!("=====================================");
    println!("Fatalities: {:.0}", c.deaths);
    println!("Severe Injuries: {:.0}", c.severe_injuries);
    println!("Light Injuries: {:.0}", c.light_injuries);
    println!("Total Casualties: {:.0}", c.total_prompt());
    println!("Long-Term Deaths (1 Year): {:.0}", c.long_term_deaths_1yr);
    println!("Long-Term Deaths (5 Years): {:.0}", c.long_term_deaths_5yr);
    println!("Long-Term Deaths (10 Years): {:.0}", c.long_term_deaths_10yr);
    println!("Long-Term Deaths (20 Years): {:.0}", c.long_term_deaths_20yr);
    println!("{}", "=".repeat(DIVIDER_WIDTH));
}
