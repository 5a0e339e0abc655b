//! Crater dimensions from the Pike et al. (1980) energy scaling law
//!
//! The published fit relates impact energy in ergs to final crater
//! diameter: E = 9.1e24 · D_km^2.59. Inverted here, after reducing the
//! kinetic energy by the oblique-impact efficiency factor, it predicts
//! the crater from a given impactor.

use crate::constants::{
    COMPLEX_CRATER_DEPTH_RATIO, CRATER_COMPLEX_TRANSITION_KM, PIKE_DIAMETER_EXPONENT,
    PIKE_ENERGY_COEFFICIENT_ERG, SIMPLE_CRATER_DEPTH_RATIO,
};
use crate::units::{angle_efficiency, joules_to_ergs, km_to_miles};
use serde::{Deserialize, Serialize};

/// Final crater dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CraterResults {
    pub diameter_km: f64,
    pub diameter_miles: f64,
    pub depth_km: f64,
    pub depth_miles: f64,
    /// Seafloor crater rather than a land crater
    pub is_ocean: bool,
    /// Complex (terraced, central-peak) morphology rather than simple bowl
    pub is_complex: bool,
}

/// Predict the final crater from impact energy and entry angle.
///
/// Angle efficiency applies to crater formation only: a grazing impact at
/// angle 0 yields a zero-diameter crater even though the full kinetic
/// energy is still deposited into the other hazard zones.
pub fn calculate_crater(energy_joules: f64, angle_degrees: f64, is_ocean: bool) -> CraterResults {
    let effective_energy_erg = joules_to_ergs(energy_joules * angle_efficiency(angle_degrees));

    let diameter_km =
        (effective_energy_erg / PIKE_ENERGY_COEFFICIENT_ERG).powf(1.0 / PIKE_DIAMETER_EXPONENT);

    // Hard morphology threshold: bowl-shaped below the transition,
    // slumped complex crater above it
    let is_complex = diameter_km >= CRATER_COMPLEX_TRANSITION_KM;
    let depth_ratio = if is_complex {
        COMPLEX_CRATER_DEPTH_RATIO
    } else {
        SIMPLE_CRATER_DEPTH_RATIO
    };
    let depth_km = diameter_km * depth_ratio;

    CraterResults {
        diameter_km,
        diameter_miles: km_to_miles(diameter_km),
        depth_km,
        depth_miles: km_to_miles(depth_km),
        is_ocean,
        is_complex,
    }
}
