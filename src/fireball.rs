//! Thermal radiation zones, scaled from nuclear fireball data
//! (Glasstone & Dolan, The Effects of Nuclear Weapons)
//!
//! The fireball radius and four thermal-ignition radii are independent
//! power laws in megaton yield. Casualties are counted per disjoint
//! annulus so nobody inside the fireball is double-counted in the burn
//! rings.

use crate::constants::{
    CLOTHES_IGNITE_COEFFICIENT, FIREBALL_FATALITY_RATE, FIREBALL_RADIUS_COEFFICIENT,
    FIREBALL_RADIUS_EXPONENT, SECOND_DEGREE_BURN_COEFFICIENT, SECOND_DEGREE_CASUALTY_RATE,
    THERMAL_RADIUS_EXPONENT, THIRD_DEGREE_BURN_COEFFICIENT, THIRD_DEGREE_CASUALTY_RATE,
    TREES_IGNITE_COEFFICIENT,
};
use crate::units::{annulus_area_km2, circle_area_km2, km_to_miles};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireballResults {
    pub fireball_radius_km: f64,
    pub fireball_radius_miles: f64,
    pub third_degree_burn_radius_km: f64,
    pub third_degree_burn_radius_miles: f64,
    pub second_degree_burn_radius_km: f64,
    pub second_degree_burn_radius_miles: f64,
    pub clothes_ignite_radius_km: f64,
    pub trees_ignite_radius_km: f64,
    /// Deaths inside the fireball itself
    pub deaths: u64,
    /// Casualties in the third-degree-burn annulus
    pub third_degree_burns: u64,
    /// Casualties in the second-degree-burn annulus
    pub second_degree_burns: u64,
}

impl FireballResults {
    /// Total casualties this zone contributes to the aggregate figure
    pub fn total_casualties(&self) -> u64 {
        self.deaths + self.third_degree_burns + self.second_degree_burns
    }
}

/// Compute thermal zones and their casualty breakdown.
///
/// `population_density` is people/km²; zero density zeroes every count.
pub fn calculate_fireball(energy_megatons: f64, population_density: f64) -> FireballResults {
    let fireball_radius_km =
        FIREBALL_RADIUS_COEFFICIENT * energy_megatons.powf(FIREBALL_RADIUS_EXPONENT) / 1000.0;

    let thermal_scale = energy_megatons.powf(THERMAL_RADIUS_EXPONENT) / 1000.0;
    let third_degree_burn_radius_km = THIRD_DEGREE_BURN_COEFFICIENT * thermal_scale;
    let second_degree_burn_radius_km = SECOND_DEGREE_BURN_COEFFICIENT * thermal_scale;
    let clothes_ignite_radius_km = CLOTHES_IGNITE_COEFFICIENT * thermal_scale;
    let trees_ignite_radius_km = TREES_IGNITE_COEFFICIENT * thermal_scale;

    // Disjoint annuli: fireball interior, then fireball→3rd-degree,
    // then 3rd-degree→2nd-degree
    let deaths = population_density * circle_area_km2(fireball_radius_km) * FIREBALL_FATALITY_RATE;
    let third_degree_burns = population_density
        * annulus_area_km2(fireball_radius_km, third_degree_burn_radius_km)
        * THIRD_DEGREE_CASUALTY_RATE;
    let second_degree_burns = population_density
        * annulus_area_km2(third_degree_burn_radius_km, second_degree_burn_radius_km)
        * SECOND_DEGREE_CASUALTY_RATE;

    FireballResults {
        fireball_radius_km,
        fireball_radius_miles: km_to_miles(fireball_radius_km),
        third_degree_burn_radius_km,
        third_degree_burn_radius_miles: km_to_miles(third_degree_burn_radius_km),
        second_degree_burn_radius_km,
        second_degree_burn_radius_miles: km_to_miles(second_degree_burn_radius_km),
        clothes_ignite_radius_km,
        trees_ignite_radius_km,
        deaths: deaths.round() as u64,
        third_degree_burns: third_degree_burns.round() as u64,
        second_degree_burns: second_degree_burns.round() as u64,
    }
}
