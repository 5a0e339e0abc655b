// Public API module - input types, error taxonomy, and the orchestrator
// that composes the zone calculators into a full impact report.

use crate::crater::{calculate_crater, CraterResults};
use crate::display::{build_display_results, DisplayResults};
use crate::earthquake::{calculate_earthquake, EarthquakeResults};
use crate::fireball::{calculate_fireball, FireballResults};
use crate::frequency::{calculate_frequency, FrequencyResults};
use crate::location::{estimate_distance_to_coast, is_ocean_impact};
use crate::shock_wave::{calculate_shock_wave, ShockWaveResults};
use crate::tsunami::{calculate_tsunami, TsunamiResults};
use crate::units::{
    circle_area_km2, haversine_distance_km, impactor_mass_kg, joules_to_megatons,
    kinetic_energy_joules,
};
use crate::wind_blast::{calculate_wind_blast, WindBlastResults};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error taxonomy for the engine
#[derive(Debug, Error)]
pub enum ImpactError {
    /// Input rejected before any calculation; no partial result exists
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    /// Monte Carlo sampling distribution could not be constructed
    #[error("invalid sampling distribution for `{field}`: {reason}")]
    InvalidDistribution { field: &'static str, reason: String },

    /// Every Monte Carlo draw failed validation
    #[error("no successful simulations out of {attempted} attempted")]
    NoSuccessfulSimulations { attempted: usize },
}

fn default_density() -> f64 {
    crate::constants::DEFAULT_ASTEROID_DENSITY_KGM3
}

/// Physical parameters of the impactor and impact site. Immutable input,
/// created once per simulation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactParameters {
    /// Impactor diameter, meters
    pub diameter_m: f64,
    /// Entry velocity, km/s
    pub velocity_kms: f64,
    /// Entry angle measured from horizontal, degrees (90 = vertical)
    pub angle_degrees: f64,
    /// Impact latitude, degrees
    pub latitude: f64,
    /// Impact longitude, degrees
    pub longitude: f64,
    /// Bulk density, kg/m³
    #[serde(default = "default_density")]
    pub density_kgm3: f64,
}

impl Default for ImpactParameters {
    fn default() -> Self {
        Self {
            diameter_m: 100.0,
            velocity_kms: 17.0,
            angle_degrees: 45.0,
            latitude: 0.0,
            longitude: 0.0,
            density_kgm3: default_density(),
        }
    }
}

impl ImpactParameters {
    /// Reject invalid inputs before any calculation runs.
    ///
    /// The engine never clamps an invalid input into a computable but
    /// meaningless result; each failure names the offending field.
    pub fn validate(&self) -> Result<(), ImpactError> {
        if !(self.diameter_m > 0.0) {
            return Err(ImpactError::InvalidParameter {
                field: "diameter_m",
                reason: format!("must be positive, got {}", self.diameter_m),
            });
        }
        if !(self.velocity_kms > 0.0) {
            return Err(ImpactError::InvalidParameter {
                field: "velocity_kms",
                reason: format!("must be positive, got {}", self.velocity_kms),
            });
        }
        if !(self.angle_degrees >= 0.0 && self.angle_degrees <= 90.0) {
            return Err(ImpactError::InvalidParameter {
                field: "angle_degrees",
                reason: format!("must be within [0, 90], got {}", self.angle_degrees),
            });
        }
        if !(self.density_kgm3 > 0.0) {
            return Err(ImpactError::InvalidParameter {
                field: "density_kgm3",
                reason: format!("must be positive, got {}", self.density_kgm3),
            });
        }
        Ok(())
    }
}

/// Nearest population center, used only for the display projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearestCity {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Population data supplied by an external provider.
///
/// When absent, every casualty field in the results is zero; casualties
/// are derived from density, never independently settable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationContext {
    /// People per km² around the impact point
    pub density_per_km2: f64,
    pub nearest_city: Option<NearestCity>,
}

/// Pre-computed terrain facts from a richer external provider. Fields
/// that are present take precedence over the built-in coarse classifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TerrainOverride {
    pub is_ocean: Option<bool>,
    pub distance_to_coast_km: Option<f64>,
}

/// Aggregated multi-hazard impact report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComprehensiveImpactResults {
    pub mass_kg: f64,
    pub energy_joules: f64,
    pub energy_megatons: f64,
    pub energy_gigatons: f64,
    pub is_ocean: bool,
    pub crater: CraterResults,
    /// Present only for ocean impacts
    pub tsunami: Option<TsunamiResults>,
    pub fireball: FireballResults,
    pub shock_wave: ShockWaveResults,
    pub wind_blast: WindBlastResults,
    pub earthquake: EarthquakeResults,
    pub frequency: FrequencyResults,
    /// Population vaporized inside the crater footprint
    pub crater_deaths: u64,
    /// Sum across zones. Zones model disjoint annuli internally, but the
    /// zone-to-zone sum is not deduplicated: someone inside both the
    /// wind-blast and felt-earthquake radii counts in each.
    pub total_casualties: u64,
    pub display: DisplayResults,
}

/// Run the full impact pipeline with no population or terrain context.
pub fn calculate_impact(
    params: &ImpactParameters,
) -> Result<ComprehensiveImpactResults, ImpactError> {
    calculate_impact_with_context(params, None, None)
}

/// Run the full impact pipeline.
///
/// Shared scalars (mass, energy, ocean flag) are derived exactly once
/// and threaded into every zone calculator; no calculator reads another
/// calculator's result. That acyclic composition keeps each zone
/// independently testable.
pub fn calculate_impact_with_context(
    params: &ImpactParameters,
    population: Option<&PopulationContext>,
    terrain: Option<&TerrainOverride>,
) -> Result<ComprehensiveImpactResults, ImpactError> {
    params.validate()?;
    if let Some(context) = population {
        if !(context.density_per_km2 >= 0.0) {
            return Err(ImpactError::InvalidParameter {
                field: "density_per_km2",
                reason: format!("must be non-negative, got {}", context.density_per_km2),
            });
        }
    }

    let mass_kg = impactor_mass_kg(params.diameter_m, params.density_kgm3);
    let energy_joules = kinetic_energy_joules(mass_kg, params.velocity_kms);
    let energy_megatons = joules_to_megatons(energy_joules);

    let is_ocean = terrain
        .and_then(|t| t.is_ocean)
        .unwrap_or_else(|| is_ocean_impact(params.latitude, params.longitude));

    let population_density = population.map(|p| p.density_per_km2).unwrap_or(0.0);

    let crater = calculate_crater(energy_joules, params.angle_degrees, is_ocean);

    let tsunami = if is_ocean {
        let distance_to_coast_km = terrain
            .and_then(|t| t.distance_to_coast_km)
            .unwrap_or_else(|| estimate_distance_to_coast(params.latitude, params.longitude));
        Some(calculate_tsunami(energy_megatons, distance_to_coast_km))
    } else {
        None
    };

    let fireball = calculate_fireball(energy_megatons, population_density);
    let shock_wave = calculate_shock_wave(energy_megatons, population_density);
    let wind_blast = calculate_wind_blast(energy_megatons, params.velocity_kms, population_density);
    let earthquake = calculate_earthquake(energy_joules, population_density);
    let frequency = calculate_frequency(params.diameter_m, energy_megatons);

    let crater_deaths =
        (population_density * circle_area_km2(crater.diameter_km / 2.0)).round() as u64;

    let total_casualties = crater_deaths
        + fireball.total_casualties()
        + shock_wave.deaths
        + wind_blast.deaths
        + earthquake.deaths;

    let nearest_city = population
        .and_then(|p| p.nearest_city.as_ref())
        .map(|city| {
            let distance_km = haversine_distance_km(
                params.latitude,
                params.longitude,
                city.latitude,
                city.longitude,
            );
            (city.name.as_str(), distance_km)
        });

    let display = build_display_results(
        energy_megatons,
        &crater,
        tsunami.as_ref(),
        &fireball,
        &shock_wave,
        &wind_blast,
        &earthquake,
        &frequency,
        crater_deaths,
        total_casualties,
        nearest_city,
    );

    Ok(ComprehensiveImpactResults {
        mass_kg,
        energy_joules,
        energy_megatons,
        energy_gigatons: energy_megatons / 1000.0,
        is_ocean,
        crater,
        tsunami,
        fireball,
        shock_wave,
        wind_blast,
        earthquake,
        frequency,
        crater_deaths,
        total_casualties,
        display,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn land_params() -> ImpactParameters {
        ImpactParameters {
            diameter_m: 100.0,
            velocity_kms: 20.0,
            angle_degrees: 45.0,
            // Kansas
            latitude: 38.5,
            longitude: -98.0,
            density_kgm3: 3000.0,
        }
    }

    #[test]
    fn test_negative_diameter_rejected() {
        let params = ImpactParameters {
            diameter_m: -5.0,
            ..land_params()
        };
        let err = calculate_impact(&params).unwrap_err();
        match err {
            ImpactError::InvalidParameter { field, .. } => assert_eq!(field, "diameter_m"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_zero_velocity_rejected() {
        let params = ImpactParameters {
            velocity_kms: 0.0,
            ..land_params()
        };
        assert!(calculate_impact(&params).is_err());
    }

    #[test]
    fn test_angle_out_of_range_rejected() {
        for angle in [-1.0, 90.5, f64::NAN] {
            let params = ImpactParameters {
                angle_degrees: angle,
                ..land_params()
            };
            assert!(calculate_impact(&params).is_err(), "angle {angle} accepted");
        }
    }

    #[test]
    fn test_negative_population_density_rejected() {
        let population = PopulationContext {
            density_per_km2: -10.0,
            nearest_city: None,
        };
        let result = calculate_impact_with_context(&land_params(), Some(&population), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_land_impact_has_no_tsunami() {
        let results = calculate_impact(&land_params()).unwrap();
        assert!(!results.is_ocean);
        assert!(results.tsunami.is_none());
        assert!(results.display.tsunami_summary.is_none());
    }

    #[test]
    fn test_terrain_override_forces_ocean() {
        let terrain = TerrainOverride {
            is_ocean: Some(true),
            distance_to_coast_km: Some(750.0),
        };
        let results =
            calculate_impact_with_context(&land_params(), None, Some(&terrain)).unwrap();
        assert!(results.is_ocean);
        let tsunami = results.tsunami.expect("override should produce a tsunami");
        // 750 km at ~713 km/h ≈ 63 minutes
        assert!((tsunami.arrival_time_minutes - 63.0).abs() < 2.0);
    }

    #[test]
    fn test_terrain_override_forces_land() {
        let params = ImpactParameters {
            // Mid-Pacific
            latitude: 0.0,
            longitude: -140.0,
            ..land_params()
        };
        let terrain = TerrainOverride {
            is_ocean: Some(false),
            distance_to_coast_km: None,
        };
        let results = calculate_impact_with_context(&params, None, Some(&terrain)).unwrap();
        assert!(!results.is_ocean);
        assert!(results.tsunami.is_none());
    }

    #[test]
    fn test_no_population_context_means_zero_casualties() {
        let results = calculate_impact(&land_params()).unwrap();
        assert_eq!(results.total_casualties, 0);
        assert_eq!(results.crater_deaths, 0);
        assert_eq!(results.fireball.total_casualties(), 0);
        assert_eq!(results.earthquake.deaths, 0);
    }

    #[test]
    fn test_zero_density_means_zero_casualties() {
        let population = PopulationContext {
            density_per_km2: 0.0,
            nearest_city: None,
        };
        let results =
            calculate_impact_with_context(&land_params(), Some(&population), None).unwrap();
        assert_eq!(results.total_casualties, 0);
    }

    #[test]
    fn test_casualty_total_sums_zones() {
        let population = PopulationContext {
            density_per_km2: 500.0,
            nearest_city: None,
        };
        let results =
            calculate_impact_with_context(&land_params(), Some(&population), None).unwrap();
        let expected = results.crater_deaths
            + results.fireball.total_casualties()
            + results.shock_wave.deaths
            + results.wind_blast.deaths
            + results.earthquake.deaths;
        assert_eq!(results.total_casualties, expected);
        assert!(results.total_casualties > 0);
    }

    #[test]
    fn test_determinism() {
        let population = PopulationContext {
            density_per_km2: 321.0,
            nearest_city: Some(NearestCity {
                name: "Wichita".to_string(),
                latitude: 37.69,
                longitude: -97.34,
            }),
        };
        let a = calculate_impact_with_context(&land_params(), Some(&population), None).unwrap();
        let b = calculate_impact_with_context(&land_params(), Some(&population), None).unwrap();
        // Pure function: identical inputs give bit-identical output
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_nearest_city_distance_in_display() {
        let population = PopulationContext {
            density_per_km2: 100.0,
            nearest_city: Some(NearestCity {
                name: "Wichita".to_string(),
                latitude: 37.69,
                longitude: -97.34,
            }),
        };
        let results =
            calculate_impact_with_context(&land_params(), Some(&population), None).unwrap();
        let summary = results.display.nearest_city_summary.unwrap();
        assert!(summary.contains("Wichita"));
    }

    #[test]
    fn test_energy_gigatons_consistent() {
        let results = calculate_impact(&land_params()).unwrap();
        assert!((results.energy_gigatons * 1000.0 - results.energy_megatons).abs() < 1e-9);
    }
}
