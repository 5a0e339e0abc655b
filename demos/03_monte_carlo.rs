/// Monte Carlo Uncertainty Example
///
/// Observed asteroid parameters are uncertain; this example propagates
/// Normal uncertainties on diameter and velocity through the pipeline
/// and prints the resulting spread.

use impact_engine::{run_monte_carlo, ImpactParameters, MonteCarloParams};

fn main() {
    println!("=== Monte Carlo Uncertainty Example ===\n");

    let base = ImpactParameters {
        diameter_m: 150.0,
        velocity_kms: 22.0,
        angle_degrees: 45.0,
        latitude: 38.5,
        longitude: -98.0,
        density_kgm3: 3000.0,
    };

    let mc = MonteCarloParams {
        num_simulations: 5000,
        diameter_std_dev_m: 30.0,
        velocity_std_dev_kms: 4.0,
        angle_std_dev_degrees: 10.0,
        density_std_dev_kgm3: 500.0,
    };

    println!("Base: {} m at {} km/s, {} draws\n",
        base.diameter_m, base.velocity_kms, mc.num_simulations);

    let results = run_monte_carlo(&base, &mc).expect("simulation should succeed");

    println!("Energy (megatons):");
    println!("  mean: {:.2}", results.energy_summary.mean);
    println!("  std dev: {:.2}", results.energy_summary.std_dev);
    println!("  5th-95th percentile: {:.2} - {:.2}",
        results.energy_summary.percentile_5, results.energy_summary.percentile_95);
    println!();

    println!("Crater diameter (km):");
    println!("  mean: {:.3}", results.crater_summary.mean);
    println!("  std dev: {:.3}", results.crater_summary.std_dev);
    println!("  5th-95th percentile: {:.3} - {:.3}",
        results.crater_summary.percentile_5, results.crater_summary.percentile_95);
    println!();

    println!("Successful draws: {}", results.energies_megatons.len());
}
