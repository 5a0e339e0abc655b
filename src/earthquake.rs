//! Seismic shaking from the Gutenberg-Richter energy-magnitude relation
//!
//! Magnitude comes from inverting log10(E) = 4.8 + 1.5·M over the full
//! impact energy. The fatality rate is a discrete lookup by magnitude
//! band, matching historical USGS fatality-rate tables; the steps are
//! intentional and must not be interpolated.

use crate::constants::{
    FELT_RADIUS_MAGNITUDE_EXPONENT, GUTENBERG_RICHTER_INTERCEPT, GUTENBERG_RICHTER_SLOPE,
};
use crate::units::{circle_area_km2, km_to_miles};
use serde::{Deserialize, Serialize};

/// Fatality rate per magnitude band: first entry whose upper bound
/// exceeds the magnitude wins. The table is ordered by upper bound.
const FATALITY_RATE_BANDS: &[(f64, f64)] = &[
    (4.0, 0.0001),
    (5.0, 0.001),
    (6.0, 0.01),
    (7.0, 0.05),
    (8.0, 0.1),
    (f64::INFINITY, 0.2),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarthquakeResults {
    /// Moment magnitude equivalent, floored at 0
    pub magnitude: f64,
    pub felt_radius_km: f64,
    pub felt_radius_miles: f64,
    pub deaths: u64,
}

/// Fatality rate for a given magnitude from the banded table
fn fatality_rate(magnitude: f64) -> f64 {
    FATALITY_RATE_BANDS
        .iter()
        .find(|(upper, _)| magnitude < *upper)
        .map(|(_, rate)| *rate)
        .unwrap_or(0.2)
}

/// Compute the seismic magnitude, felt radius, and fatalities.
pub fn calculate_earthquake(energy_joules: f64, population_density: f64) -> EarthquakeResults {
    let magnitude =
        ((energy_joules.log10() - GUTENBERG_RICHTER_INTERCEPT) / GUTENBERG_RICHTER_SLOPE).max(0.0);

    let felt_radius_km = 10.0_f64.powf(FELT_RADIUS_MAGNITUDE_EXPONENT * magnitude);

    let deaths = population_density * circle_area_km2(felt_radius_km) * fatality_rate(magnitude);

    EarthquakeResults {
        magnitude,
        felt_radius_km,
        felt_radius_miles: km_to_miles(felt_radius_km),
        deaths: deaths.round() as u64,
    }
}
