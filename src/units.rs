//! Unit conversions and geometric helpers shared by every zone calculator
//!
//! All internal physics runs in SI (meters, kilograms, joules); the
//! conversion helpers here are the only place unit factors appear, so the
//! calculators stay unit-consistent by construction.

use crate::constants::{
    EARTH_RADIUS_KM, ERGS_PER_JOULE, FEET_PER_METER, JOULES_PER_MEGATON, KMS_TO_MPH, KM_PER_MILE,
};
use std::f64::consts::PI;

/// Volume of a sphere from its diameter, m³
pub fn sphere_volume_m3(diameter_m: f64) -> f64 {
    let radius = diameter_m / 2.0;
    (4.0 / 3.0) * PI * radius.powi(3)
}

/// Impactor mass from diameter and bulk density, kg
pub fn impactor_mass_kg(diameter_m: f64, density_kgm3: f64) -> f64 {
    sphere_volume_m3(diameter_m) * density_kgm3
}

/// Kinetic energy of the impactor, joules. Velocity is given in km/s.
pub fn kinetic_energy_joules(mass_kg: f64, velocity_kms: f64) -> f64 {
    let velocity_mps = velocity_kms * 1000.0;
    0.5 * mass_kg * velocity_mps * velocity_mps
}

pub fn joules_to_megatons(joules: f64) -> f64 {
    joules / JOULES_PER_MEGATON
}

pub fn megatons_to_joules(megatons: f64) -> f64 {
    megatons * JOULES_PER_MEGATON
}

pub fn joules_to_ergs(joules: f64) -> f64 {
    joules * ERGS_PER_JOULE
}

pub fn km_to_miles(km: f64) -> f64 {
    km / KM_PER_MILE
}

pub fn miles_to_km(miles: f64) -> f64 {
    miles * KM_PER_MILE
}

pub fn meters_to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

pub fn kms_to_mph(velocity_kms: f64) -> f64 {
    velocity_kms * KMS_TO_MPH
}

/// Fraction of kinetic energy coupled into crater excavation for an
/// oblique impact, `sin(angle)^0.44`
///
/// Angle is measured from horizontal: 90° is a vertical impact (full
/// coupling), 0° is a pure graze and drives the effective energy to
/// exactly zero, which in turn produces a zero-diameter crater. Callers
/// that consider a grazing impact unphysical must reject angle = 0
/// before calculating.
pub fn angle_efficiency(angle_degrees: f64) -> f64 {
    angle_degrees
        .to_radians()
        .sin()
        .powf(crate::constants::ANGLE_EFFICIENCY_EXPONENT)
}

/// Great-circle distance between two points via the haversine formula, km
pub fn haversine_distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlng = (lng2 - lng1).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Area of a circle of the given radius, km²
pub fn circle_area_km2(radius_km: f64) -> f64 {
    PI * radius_km * radius_km
}

/// Area of the ring between two concentric circles, km²
///
/// Clamped at zero so a degenerate inner/outer ordering can never produce
/// a negative population count downstream.
pub fn annulus_area_km2(inner_radius_km: f64, outer_radius_km: f64) -> f64 {
    (circle_area_km2(outer_radius_km) - circle_area_km2(inner_radius_km)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_mass() {
        // 20 m stony impactor: V = (4/3)π·10³ ≈ 4188.79 m³
        let mass = impactor_mass_kg(20.0, 3000.0);
        assert_relative_eq!(mass, 1.256_637e7, max_relative = 1e-4);
    }

    #[test]
    fn test_kinetic_energy() {
        // 1 kg at 1 km/s = 0.5 · 1e6 J
        assert_relative_eq!(kinetic_energy_joules(1.0, 1.0), 5.0e5);
    }

    #[test]
    fn test_megaton_round_trip() {
        let joules = 2.27e15;
        let back = megatons_to_joules(joules_to_megatons(joules));
        assert!((back - joules).abs() / joules < 1e-12);
    }

    #[test]
    fn test_mile_round_trip() {
        let km = 137.4;
        let back = miles_to_km(km_to_miles(km));
        assert!((back - km).abs() < 1e-9);
    }

    #[test]
    fn test_angle_efficiency_bounds() {
        // Vertical impact couples everything, a graze couples nothing
        assert_relative_eq!(angle_efficiency(90.0), 1.0, max_relative = 1e-12);
        assert_eq!(angle_efficiency(0.0), 0.0);

        // Oblique impacts fall strictly between
        let eff = angle_efficiency(45.0);
        assert!(eff > 0.0 && eff < 1.0);
    }

    #[test]
    fn test_angle_efficiency_monotonic() {
        let mut last = 0.0;
        for angle in [10.0, 20.0, 40.0, 60.0, 80.0, 90.0] {
            let eff = angle_efficiency(angle);
            assert!(eff > last);
            last = eff;
        }
    }

    #[test]
    fn test_haversine_known_distance() {
        // London to Paris, ~343 km
        let d = haversine_distance_km(51.5074, -0.1278, 48.8566, 2.3522);
        assert!(d > 330.0 && d < 355.0);

        // Same point
        assert!(haversine_distance_km(10.0, 20.0, 10.0, 20.0) < 1e-9);
    }

    #[test]
    fn test_annulus_never_negative() {
        assert_eq!(annulus_area_km2(5.0, 3.0), 0.0);
        assert!(annulus_area_km2(3.0, 5.0) > 0.0);
        assert_relative_eq!(
            annulus_area_km2(1.0, 2.0),
            circle_area_km2(2.0) - circle_area_km2(1.0)
        );
    }
}
