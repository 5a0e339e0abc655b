//! Monte Carlo uncertainty analysis over the impact pipeline
//!
//! Observed asteroid parameters carry large uncertainties (radar sizing,
//! albedo-derived diameters, density guessed from spectral class). This
//! module samples Normal distributions around a base parameter set,
//! reruns the deterministic pipeline per draw in parallel, and summarizes
//! the resulting spread.

use crate::impact_api::{calculate_impact, ImpactError, ImpactParameters};
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Standard deviations applied around the base parameters. A zero
/// deviation pins that parameter to its base value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonteCarloParams {
    pub num_simulations: usize,
    pub diameter_std_dev_m: f64,
    pub velocity_std_dev_kms: f64,
    pub angle_std_dev_degrees: f64,
    pub density_std_dev_kgm3: f64,
}

impl Default for MonteCarloParams {
    fn default() -> Self {
        Self {
            num_simulations: 1000,
            diameter_std_dev_m: 0.0,
            velocity_std_dev_kms: 0.0,
            angle_std_dev_degrees: 0.0,
            density_std_dev_kgm3: 0.0,
        }
    }
}

/// Summary statistics over one sampled output quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionSummary {
    pub mean: f64,
    pub std_dev: f64,
    pub percentile_5: f64,
    pub percentile_95: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonteCarloResults {
    pub energies_megatons: Vec<f64>,
    pub crater_diameters_km: Vec<f64>,
    pub total_casualties: Vec<f64>,
    pub energy_summary: DistributionSummary,
    pub crater_summary: DistributionSummary,
    pub casualty_summary: DistributionSummary,
}

fn normal_for(
    field: &'static str,
    mean: f64,
    std_dev: f64,
) -> Result<Normal<f64>, ImpactError> {
    Normal::new(mean, std_dev).map_err(|e| ImpactError::InvalidDistribution {
        field,
        reason: e.to_string(),
    })
}

fn summarize(samples: &[f64]) -> DistributionSummary {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let percentile = |p: f64| {
        let index = ((p * (sorted.len() - 1) as f64).round()) as usize;
        sorted[index]
    };

    DistributionSummary {
        mean,
        std_dev: variance.sqrt(),
        percentile_5: percentile(0.05),
        percentile_95: percentile(0.95),
    }
}

/// Run the impact pipeline across sampled parameter draws.
///
/// Draws that land outside the valid input domain after clamping are
/// skipped rather than fatal; the run fails only when every draw fails.
pub fn run_monte_carlo(
    base_params: &ImpactParameters,
    mc_params: &MonteCarloParams,
) -> Result<MonteCarloResults, ImpactError> {
    base_params.validate()?;
    if mc_params.num_simulations == 0 {
        return Err(ImpactError::InvalidParameter {
            field: "num_simulations",
            reason: "must be at least 1".to_string(),
        });
    }

    let diameter_dist = normal_for(
        "diameter_std_dev_m",
        base_params.diameter_m,
        mc_params.diameter_std_dev_m,
    )?;
    let velocity_dist = normal_for(
        "velocity_std_dev_kms",
        base_params.velocity_kms,
        mc_params.velocity_std_dev_kms,
    )?;
    let angle_dist = normal_for(
        "angle_std_dev_degrees",
        base_params.angle_degrees,
        mc_params.angle_std_dev_degrees,
    )?;
    let density_dist = normal_for(
        "density_std_dev_kgm3",
        base_params.density_kgm3,
        mc_params.density_std_dev_kgm3,
    )?;

    let samples: Vec<(f64, f64, f64)> = (0..mc_params.num_simulations)
        .into_par_iter()
        .filter_map(|_| {
            let mut rng = rand::thread_rng();
            let params = ImpactParameters {
                diameter_m: diameter_dist.sample(&mut rng),
                velocity_kms: velocity_dist.sample(&mut rng),
                angle_degrees: angle_dist.sample(&mut rng).clamp(0.0, 90.0),
                density_kgm3: density_dist.sample(&mut rng),
                latitude: base_params.latitude,
                longitude: base_params.longitude,
            };
            // Negative diameter/velocity/density draws fail validation
            // inside calculate_impact and are skipped
            calculate_impact(&params).ok().map(|results| {
                (
                    results.energy_megatons,
                    results.crater.diameter_km,
                    results.total_casualties as f64,
                )
            })
        })
        .collect();

    if samples.is_empty() {
        return Err(ImpactError::NoSuccessfulSimulations {
            attempted: mc_params.num_simulations,
        });
    }

    let energies_megatons: Vec<f64> = samples.iter().map(|s| s.0).collect();
    let crater_diameters_km: Vec<f64> = samples.iter().map(|s| s.1).collect();
    let total_casualties: Vec<f64> = samples.iter().map(|s| s.2).collect();

    Ok(MonteCarloResults {
        energy_summary: summarize(&energies_megatons),
        crater_summary: summarize(&crater_diameters_km),
        casualty_summary: summarize(&total_casualties),
        energies_megatons,
        crater_diameters_km,
        total_casualties,
    })
}
