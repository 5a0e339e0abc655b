//! Coarse ocean/land classification from coordinates
//!
//! Self-contained approximation layer: the major ocean basins are modeled
//! as latitude/longitude bounding boxes and the coast distance as degrees
//! to the nearest box edge. Hosts with real coastline data supply a
//! `TerrainOverride` instead; these estimates exist so the engine gives a
//! sane answer with no external lookups at all.

use crate::constants::KM_PER_DEGREE;

/// One rectangular patch of open ocean
#[derive(Debug, Clone, Copy)]
struct OceanRegion {
    lat_min: f64,
    lat_max: f64,
    lng_min: f64,
    lng_max: f64,
}

impl OceanRegion {
    fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.lat_min && lat <= self.lat_max && lng >= self.lng_min && lng <= self.lng_max
    }

    /// Degrees from an interior point to the nearest box edge
    fn degrees_to_edge(&self, lat: f64, lng: f64) -> f64 {
        (lat - self.lat_min)
            .min(self.lat_max - lat)
            .min(lng - self.lng_min)
            .min(self.lng_max - lng)
    }

    /// Degrees from an exterior point to the box (0 inside)
    fn degrees_from_box(&self, lat: f64, lng: f64) -> f64 {
        let dlat = (self.lat_min - lat).max(lat - self.lat_max).max(0.0);
        let dlng = (self.lng_min - lng).max(lng - self.lng_max).max(0.0);
        (dlat * dlat + dlng * dlng).sqrt()
    }
}

/// Open-water patches of the Pacific, Atlantic, and Indian basins.
/// Deliberately conservative: coastal seas are classified as land so the
/// tsunami path only triggers well offshore.
const OCEAN_REGIONS: &[OceanRegion] = &[
    // Western Pacific
    OceanRegion {
        lat_min: -55.0,
        lat_max: 55.0,
        lng_min: 150.0,
        lng_max: 180.0,
    },
    // Eastern Pacific, south of Baja
    OceanRegion {
        lat_min: -55.0,
        lat_max: 20.0,
        lng_min: -180.0,
        lng_max: -100.0,
    },
    // Northeastern Pacific
    OceanRegion {
        lat_min: 20.0,
        lat_max: 55.0,
        lng_min: -180.0,
        lng_max: -130.0,
    },
    // North Atlantic
    OceanRegion {
        lat_min: 5.0,
        lat_max: 55.0,
        lng_min: -60.0,
        lng_max: -20.0,
    },
    // South Atlantic
    OceanRegion {
        lat_min: -50.0,
        lat_max: 5.0,
        lng_min: -35.0,
        lng_max: 0.0,
    },
    // Indian Ocean
    OceanRegion {
        lat_min: -45.0,
        lat_max: 5.0,
        lng_min: 55.0,
        lng_max: 100.0,
    },
];

/// True when the coordinates fall in one of the coarse open-ocean regions
pub fn is_ocean_impact(latitude: f64, longitude: f64) -> bool {
    OCEAN_REGIONS
        .iter()
        .any(|region| region.contains(latitude, longitude))
}

/// Rough distance from the impact point to the nearest coastline, km
///
/// For ocean points this is the distance to the edge of the containing
/// region; for land points, the distance to the nearest ocean region.
/// Monotonic in how far the point sits from the region boundary; only used
/// to bound tsunami arrival time, never for geographic display.
pub fn estimate_distance_to_coast(latitude: f64, longitude: f64) -> f64 {
    let degrees = OCEAN_REGIONS
        .iter()
        .find(|region| region.contains(latitude, longitude))
        .map(|region| region.degrees_to_edge(latitude, longitude))
        .unwrap_or_else(|| {
            OCEAN_REGIONS
                .iter()
                .map(|region| region.degrees_from_box(latitude, longitude))
                .fold(f64::INFINITY, f64::min)
        });
    degrees * KM_PER_DEGREE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_ocean_points() {
        // Mid-Pacific
        assert!(is_ocean_impact(0.0, -140.0));
        assert!(is_ocean_impact(-20.0, 170.0));
        // Mid-Atlantic
        assert!(is_ocean_impact(30.0, -40.0));
        // Indian Ocean
        assert!(is_ocean_impact(-20.0, 80.0));
    }

    #[test]
    fn test_land_points() {
        // Kansas
        assert!(!is_ocean_impact(38.5, -98.0));
        // Central Europe
        assert!(!is_ocean_impact(50.0, 10.0));
        // Siberia
        assert!(!is_ocean_impact(61.0, 90.0));
        // Sahara
        assert!(!is_ocean_impact(23.0, 10.0));
    }

    #[test]
    fn test_coast_distance_positive_and_bounded() {
        let d = estimate_distance_to_coast(0.0, -140.0);
        assert!(d > 0.0);
        // Nothing on Earth is more than ~half the circumference from a coast
        assert!(d < 20_000.0);
    }

    #[test]
    fn test_coast_distance_grows_toward_basin_center() {
        // Moving deeper into the eastern Pacific box moves the point
        // farther from its edges
        let near_edge = estimate_distance_to_coast(0.0, -103.0);
        let mid_basin = estimate_distance_to_coast(0.0, -140.0);
        assert!(mid_basin > near_edge);
    }

    #[test]
    fn test_land_point_distance_reaches_nearest_basin() {
        // Kansas sits several degrees from every ocean region
        let d = estimate_distance_to_coast(38.5, -98.0);
        assert!(d > 100.0);
    }
}
