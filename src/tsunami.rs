//! Tsunami generation for ocean impacts, after Ward & Asphaug (2000)
//!
//! Deep-water wave amplitude follows the published power-law fit
//! H = 1.88 · E_mt^0.22 meters, and propagation uses the shallow-water
//! approximation √(g·d) over a 4 km mean ocean depth. Only invoked when
//! the impact point classifies as ocean.

use crate::constants::{
    COASTLINE_KM_PER_WAVE_METER, G_ACCEL_MPS2, MAX_AFFECTED_COASTLINE_KM, MAX_TSUNAMI_HEIGHT_M,
    MEAN_OCEAN_DEPTH_M, MIN_TSUNAMI_ARRIVAL_MINUTES, WARD_ASPHAUG_COEFFICIENT,
    WARD_ASPHAUG_EXPONENT,
};
use crate::units::meters_to_feet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TsunamiResults {
    pub wave_height_m: f64,
    pub wave_height_feet: f64,
    pub wave_speed_kmh: f64,
    /// Time until the leading wave reaches the nearest coast
    pub arrival_time_minutes: f64,
    pub affected_coastline_km: f64,
}

/// Model the impact-generated tsunami for an ocean impact.
///
/// `distance_to_coast_km` comes from either the coarse built-in estimate
/// or a host-supplied terrain override; it only bounds the arrival time.
pub fn calculate_tsunami(energy_megatons: f64, distance_to_coast_km: f64) -> TsunamiResults {
    let wave_height_m = (WARD_ASPHAUG_COEFFICIENT * energy_megatons.powf(WARD_ASPHAUG_EXPONENT))
        .min(MAX_TSUNAMI_HEIGHT_M);

    // Shallow-water wave speed over mean ocean depth, m/s → km/h
    let wave_speed_kmh = (G_ACCEL_MPS2 * MEAN_OCEAN_DEPTH_M).sqrt() * 3.6;

    let arrival_time_minutes =
        (distance_to_coast_km / wave_speed_kmh * 60.0).max(MIN_TSUNAMI_ARRIVAL_MINUTES);

    let affected_coastline_km =
        (wave_height_m * COASTLINE_KM_PER_WAVE_METER).min(MAX_AFFECTED_COASTLINE_KM);

    TsunamiResults {
        wave_height_m,
        wave_height_feet: meters_to_feet(wave_height_m),
        wave_speed_kmh,
        arrival_time_minutes,
        affected_coastline_km,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wave_height_scales_with_energy() {
        let small = calculate_tsunami(1.0, 500.0);
        let large = calculate_tsunami(1.0e6, 500.0);
        assert!(large.wave_height_m > small.wave_height_m);

        // 1 MT: H = 1.88 m exactly
        assert!((small.wave_height_m - 1.88).abs() < 1e-9);
    }

    #[test]
    fn test_wave_height_capped() {
        // Absurd energy still cannot exceed the water-column bound.
        // 1.88 · E^0.22 crosses 1000 m around E ≈ 2.6e12 MT.
        let result = calculate_tsunami(1.0e15, 500.0);
        assert_eq!(result.wave_height_m, 1000.0);
    }

    #[test]
    fn test_wave_speed_from_mean_depth() {
        // √(9.80665 · 4000) ≈ 198 m/s ≈ 713 km/h
        let result = calculate_tsunami(100.0, 1000.0);
        assert!((result.wave_speed_kmh - 713.0).abs() < 1.0);
    }

    #[test]
    fn test_arrival_time_floor() {
        // Impact right at the coast still takes minutes to arrive
        let close = calculate_tsunami(100.0, 0.0);
        assert_eq!(close.arrival_time_minutes, 5.0);

        let far = calculate_tsunami(100.0, 2000.0);
        assert!(far.arrival_time_minutes > 60.0);
    }

    #[test]
    fn test_coastline_capped() {
        let result = calculate_tsunami(1.0e15, 500.0);
        assert_eq!(result.affected_coastline_km, 5000.0);

        let modest = calculate_tsunami(1.0, 500.0);
        assert!(modest.affected_coastline_km < 5000.0);
        assert!((modest.affected_coastline_km - modest.wave_height_m * 5.0).abs() < 1e-9);
    }
}
