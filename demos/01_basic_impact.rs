/// Basic Land Impact Example
///
/// Runs the full impact pipeline for a Chelyabinsk-scale stony asteroid
/// over a populated inland area and prints the structured report.

use impact_engine::{calculate_impact_with_context, ImpactParameters, NearestCity, PopulationContext};

fn main() {
    println!("=== Basic Land Impact Example ===\n");

    let params = ImpactParameters {
        diameter_m: 20.0,
        velocity_kms: 19.0,
        angle_degrees: 18.0,
        latitude: 38.5,
        longitude: -98.0,
        density_kgm3: 3000.0,
    };

    println!("Impactor Parameters:");
    println!("  Diameter: {} m", params.diameter_m);
    println!("  Velocity: {} km/s", params.velocity_kms);
    println!("  Entry angle: {}°", params.angle_degrees);
    println!("  Density: {} kg/m³", params.density_kgm3);
    println!();

    let population = PopulationContext {
        density_per_km2: 35.0,
        nearest_city: Some(NearestCity {
            name: "Wichita".to_string(),
            latitude: 37.69,
            longitude: -97.34,
        }),
    };

    let results = calculate_impact_with_context(&params, Some(&population), None)
        .expect("valid parameters");

    println!("Physical Results:");
    println!("  Mass: {:.3e} kg", results.mass_kg);
    println!("  Energy: {:.3} megatons", results.energy_megatons);
    println!("  Crater diameter: {:.3} km", results.crater.diameter_km);
    println!("  Fireball radius: {:.3} km", results.fireball.fireball_radius_km);
    println!("  Peak blast: {:.0} dB", results.shock_wave.peak_decibels);
    println!("  Peak winds: {:.0} mph", results.wind_blast.peak_speed_mph);
    println!("  Earthquake magnitude: {:.1}", results.earthquake.magnitude);
    println!("  Total casualties: {}", results.total_casualties);
    println!();

    println!("Report:");
    println!("  {}", results.display.energy_summary);
    println!("  {}", results.display.crater_summary);
    println!("  {}", results.display.fireball_summary);
    println!("  {}", results.display.shock_wave_summary);
    println!("  {}", results.display.wind_blast_summary);
    println!("  {}", results.display.earthquake_summary);
    println!("  {}", results.display.frequency_summary);
    println!("  {}", results.display.casualty_summary);
    if let Some(city) = &results.display.nearest_city_summary {
        println!("  {city}");
    }
}
