/// Ocean Impact Example
///
/// Demonstrates the tsunami path: an extinction-class impactor into the
/// open Pacific, with the ocean/land decision left to the built-in
/// coarse classifier.

use impact_engine::{calculate_impact, ImpactParameters};

fn main() {
    println!("=== Ocean Impact Example ===\n");

    let params = ImpactParameters {
        diameter_m: 10_000.0,
        velocity_kms: 20.0,
        angle_degrees: 90.0,
        latitude: 0.0,
        longitude: -140.0,
        density_kgm3: 3000.0,
    };

    let results = calculate_impact(&params).expect("valid parameters");

    println!("Impact site: ({}, {})", params.latitude, params.longitude);
    println!("Classified as ocean: {}", results.is_ocean);
    println!();

    println!("Energy: {:.3e} megatons ({:.1} gigatons)",
        results.energy_megatons, results.energy_gigatons);
    println!("Seafloor crater: {:.0} km wide, {:.0} km deep",
        results.crater.diameter_km, results.crater.depth_km);
    println!("Earthquake magnitude: {:.1}", results.earthquake.magnitude);
    println!();

    if let Some(tsunami) = &results.tsunami {
        println!("Tsunami:");
        println!("  Wave height: {:.0} m", tsunami.wave_height_m);
        println!("  Wave speed: {:.0} km/h", tsunami.wave_speed_kmh);
        println!("  Coastal arrival: {:.0} minutes", tsunami.arrival_time_minutes);
        println!("  Affected coastline: {:.0} km", tsunami.affected_coastline_km);
        println!();
    }

    println!("{}", results.display.energy_summary);
    println!("{}", results.display.frequency_summary);
    if let Some(tsunami_summary) = &results.display.tsunami_summary {
        println!("{tsunami_summary}");
    }
}
