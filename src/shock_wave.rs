//! Blast overpressure zones with classical cube-root yield scaling
//!
//! Damage radii follow Hopkinson-Cranz similarity: each overpressure
//! threshold sits at a fixed number of kilometers per cube-root megaton.
//! The peak sound level is reported on the decibel scale relative to the
//! 194 dB undistorted-wave ceiling.

use crate::constants::{
    BUILDINGS_COLLAPSE_COEFFICIENT_KM, BUILDINGS_COLLAPSE_FATALITY_RATE,
    EARDRUM_RUPTURE_COEFFICIENT_KM, HOMES_COLLAPSE_COEFFICIENT_KM, HOMES_COLLAPSE_FATALITY_RATE,
    LUNG_DAMAGE_COEFFICIENT_KM, LUNG_DAMAGE_FATALITY_RATE, SHOCK_BASE_DECIBELS,
    SHOCK_MAX_DECIBELS,
};
use crate::units::{annulus_area_km2, circle_area_km2, km_to_miles};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShockWaveResults {
    pub peak_decibels: f64,
    pub buildings_collapse_radius_km: f64,
    pub buildings_collapse_radius_miles: f64,
    pub homes_collapse_radius_km: f64,
    pub homes_collapse_radius_miles: f64,
    pub lung_damage_radius_km: f64,
    pub lung_damage_radius_miles: f64,
    pub eardrum_rupture_radius_km: f64,
    pub eardrum_rupture_radius_miles: f64,
    pub deaths: u64,
}

/// Compute overpressure zones and blast fatalities.
///
/// Fatalities are counted innermost-first over disjoint annuli: 50%
/// where framed buildings collapse, 30% in the homes-collapse ring, 20%
/// in the lung-damage ring. The eardrum-rupture ring injures but does
/// not kill.
pub fn calculate_shock_wave(energy_megatons: f64, population_density: f64) -> ShockWaveResults {
    let peak_decibels =
        (SHOCK_BASE_DECIBELS + 20.0 * energy_megatons.sqrt().log10()).min(SHOCK_MAX_DECIBELS);

    let cube_root_yield = energy_megatons.powf(1.0 / 3.0);
    let buildings_collapse_radius_km = BUILDINGS_COLLAPSE_COEFFICIENT_KM * cube_root_yield;
    let homes_collapse_radius_km = HOMES_COLLAPSE_COEFFICIENT_KM * cube_root_yield;
    let lung_damage_radius_km = LUNG_DAMAGE_COEFFICIENT_KM * cube_root_yield;
    let eardrum_rupture_radius_km = EARDRUM_RUPTURE_COEFFICIENT_KM * cube_root_yield;

    let deaths = population_density
        * circle_area_km2(buildings_collapse_radius_km)
        * BUILDINGS_COLLAPSE_FATALITY_RATE
        + population_density
            * annulus_area_km2(buildings_collapse_radius_km, homes_collapse_radius_km)
            * HOMES_COLLAPSE_FATALITY_RATE
        + population_density
            * annulus_area_km2(homes_collapse_radius_km, lung_damage_radius_km)
            * LUNG_DAMAGE_FATALITY_RATE;

    ShockWaveResults {
        peak_decibels,
        buildings_collapse_radius_km,
        buildings_collapse_radius_miles: km_to_miles(buildings_collapse_radius_km),
        homes_collapse_radius_km,
        homes_collapse_radius_miles: km_to_miles(homes_collapse_radius_km),
        lung_damage_radius_km,
        lung_damage_radius_miles: km_to_miles(lung_damage_radius_km),
        eardrum_rupture_radius_km,
        eardrum_rupture_radius_miles: km_to_miles(eardrum_rupture_radius_km),
        deaths: deaths.round() as u64,
    }
}
