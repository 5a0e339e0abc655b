//! Blast wind zones behind the shock front
//!
//! Peak wind speed grows as a power of yield but is clamped to a fraction
//! of the impactor's own velocity, a physical sanity bound: the blast
//! cannot outrun the body that drove it. Damage-band radii use the same
//! cube-root yield scaling as the overpressure zones.

use crate::constants::{
    COMPLETE_LEVELING_COEFFICIENT_KM, COMPLETE_LEVELING_FATALITY_RATE,
    EF5_TORNADO_COEFFICIENT_KM, JUPITER_STORM_COEFFICIENT_KM, TREES_DOWN_COEFFICIENT_KM,
    WIND_SPEED_COEFFICIENT_MPH, WIND_SPEED_EXPONENT, WIND_SPEED_VELOCITY_FRACTION,
};
use crate::units::{circle_area_km2, km_to_miles, kms_to_mph};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindBlastResults {
    pub peak_speed_mph: f64,
    pub jupiter_storm_radius_km: f64,
    pub jupiter_storm_radius_miles: f64,
    pub complete_leveling_radius_km: f64,
    pub complete_leveling_radius_miles: f64,
    pub ef5_tornado_radius_km: f64,
    pub ef5_tornado_radius_miles: f64,
    pub trees_down_radius_km: f64,
    pub trees_down_radius_miles: f64,
    pub deaths: u64,
}

/// Compute wind damage bands and fatalities.
///
/// Deaths use the complete-leveling circle alone at a 40% rate; the
/// outer bands carry no additional fatalities.
pub fn calculate_wind_blast(
    energy_megatons: f64,
    velocity_kms: f64,
    population_density: f64,
) -> WindBlastResults {
    let peak_speed_mph = (WIND_SPEED_COEFFICIENT_MPH * energy_megatons.powf(WIND_SPEED_EXPONENT))
        .min(WIND_SPEED_VELOCITY_FRACTION * kms_to_mph(velocity_kms));

    let cube_root_yield = energy_megatons.powf(1.0 / 3.0);
    let jupiter_storm_radius_km = JUPITER_STORM_COEFFICIENT_KM * cube_root_yield;
    let complete_leveling_radius_km = COMPLETE_LEVELING_COEFFICIENT_KM * cube_root_yield;
    let ef5_tornado_radius_km = EF5_TORNADO_COEFFICIENT_KM * cube_root_yield;
    let trees_down_radius_km = TREES_DOWN_COEFFICIENT_KM * cube_root_yield;

    let deaths = population_density
        * circle_area_km2(complete_leveling_radius_km)
        * COMPLETE_LEVELING_FATALITY_RATE;

    WindBlastResults {
        peak_speed_mph,
        jupiter_storm_radius_km,
        jupiter_storm_radius_miles: km_to_miles(jupiter_storm_radius_km),
        complete_leveling_radius_km,
        complete_leveling_radius_miles: km_to_miles(complete_leveling_radius_km),
        ef5_tornado_radius_km,
        ef5_tornado_radius_miles: km_to_miles(ef5_tornado_radius_km),
        trees_down_radius_km,
        trees_down_radius_miles: km_to_miles(trees_down_radius_km),
        deaths: deaths.round() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_speed_power_law_region() {
        // 0.54 MT at 19 km/s: power law gives ~817 mph, far below the
        // velocity cap (~34,000 mph)
        let result = calculate_wind_blast(0.54, 19.0, 0.0);
        assert!(result.peak_speed_mph > 700.0 && result.peak_speed_mph < 900.0);
    }

    #[test]
    fn test_peak_speed_velocity_cap() {
        // Slow, massive impactor: enormous yield but an 11 km/s body
        // caps the wind at 0.8 · 24,606 mph
        let result = calculate_wind_blast(1.0e9, 11.0, 0.0);
        let cap = 0.8 * kms_to_mph(11.0);
        assert!((result.peak_speed_mph - cap).abs() < 1e-6);
    }

    #[test]
    fn test_radius_ordering() {
        for energy in [0.01, 1.0, 100.0, 1.0e6] {
            let r = calculate_wind_blast(energy, 20.0, 0.0);
            assert!(r.jupiter_storm_radius_km < r.complete_leveling_radius_km);
            assert!(r.complete_leveling_radius_km < r.ef5_tornado_radius_km);
            assert!(r.ef5_tornado_radius_km < r.trees_down_radius_km);
        }
    }

    #[test]
    fn test_deaths_from_leveling_circle_only() {
        let density = 100.0;
        let result = calculate_wind_blast(8.0, 20.0, density);
        let expected = density * circle_area_km2(result.complete_leveling_radius_km) * 0.4;
        assert_eq!(result.deaths, expected.round() as u64);
    }

    #[test]
    fn test_zero_density_zero_deaths() {
        let result = calculate_wind_blast(1.0e4, 20.0, 0.0);
        assert_eq!(result.deaths, 0);
    }

    #[test]
    fn test_radii_monotonic_in_energy() {
        let mut last = 0.0;
        for energy in [0.1, 1.0, 10.0, 100.0] {
            let result = calculate_wind_blast(energy, 20.0, 0.0);
            assert!(result.trees_down_radius_km > last);
            last = result.trees_down_radius_km;
        }
    }
}
