//! Impact recurrence intervals and human-scale energy comparisons
//!
//! Both lookups are ordered threshold tables, not smooth curves: the
//! bands are deliberate discontinuities, and callers (and tests) should
//! reason about band membership rather than boundary continuity.

use serde::{Deserialize, Serialize};

/// Diameter at which an impact is considered extinction-class, meters
const EXTINCTION_DIAMETER_M: f64 = 1000.0;

/// Recurrence bands below the extinction threshold: first entry whose
/// diameter bound exceeds the impactor wins. Ordered by bound.
const RECURRENCE_BANDS: &[(f64, f64)] = &[
    (4.0, 1.0),
    (7.0, 5.0),
    (20.0, 60.0),
    (50.0, 1000.0),
    (140.0, 20_000.0),
    (300.0, 70_000.0),
    (EXTINCTION_DIAMETER_M, 500_000.0),
];

/// Energy comparison bands, megatons → description. Ordered by bound;
/// the last band is open-ended.
const ENERGY_COMPARISONS: &[(f64, &str)] = &[
    (1.0e-3, "similar to a small conventional bomb"),
    (2.0e-2, "comparable to the Hiroshima bomb"),
    (1.0, "comparable to a modern thermonuclear warhead"),
    (
        60.0,
        "comparable to the Tsar Bomba, the largest nuclear weapon ever tested",
    ),
    (
        1.0e4,
        "larger than the world's entire nuclear arsenal combined",
    ),
    (
        1.0e7,
        "comparable to the eruption that formed the Yellowstone caldera",
    ),
    (
        f64::INFINITY,
        "comparable to the Chicxulub impact that ended the dinosaurs",
    ),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyResults {
    /// Average years between impacts of at least this size
    pub recurrence_interval_years: f64,
    pub extinction_class: bool,
    pub energy_comparison: String,
}

/// Average recurrence interval for an impactor of the given diameter.
///
/// Bands come from observed bolide statistics; past the extinction
/// threshold the interval grows continuously as (D_km)^2.5 million
/// years instead of a fixed bucket.
pub fn recurrence_interval_years(diameter_m: f64) -> f64 {
    RECURRENCE_BANDS
        .iter()
        .find(|(bound, _)| diameter_m < *bound)
        .map(|(_, years)| *years)
        .unwrap_or_else(|| (diameter_m / 1000.0).powf(2.5) * 1.0e6)
}

/// True for impactors large enough to cause a mass extinction
pub fn is_extinction_class(diameter_m: f64) -> bool {
    diameter_m >= EXTINCTION_DIAMETER_M
}

/// Human-scale comparison string for an impact energy in megatons
pub fn energy_comparison(energy_megatons: f64) -> &'static str {
    ENERGY_COMPARISONS
        .iter()
        .find(|(bound, _)| energy_megatons < *bound)
        .map(|(_, description)| *description)
        .unwrap_or(ENERGY_COMPARISONS[ENERGY_COMPARISONS.len() - 1].1)
}

/// Assemble the frequency/comparison result for an impact
pub fn calculate_frequency(diameter_m: f64, energy_megatons: f64) -> FrequencyResults {
    FrequencyResults {
        recurrence_interval_years: recurrence_interval_years(diameter_m),
        extinction_class: is_extinction_class(diameter_m),
        energy_comparison: energy_comparison(energy_megatons).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recurrence_band_membership() {
        // Band membership at representative interior points, not edges
        assert_eq!(recurrence_interval_years(1.0), 1.0);
        assert_eq!(recurrence_interval_years(5.0), 5.0);
        assert_eq!(recurrence_interval_years(18.0), 60.0);
        assert_eq!(recurrence_interval_years(40.0), 1000.0);
        assert_eq!(recurrence_interval_years(100.0), 20_000.0);
        assert_eq!(recurrence_interval_years(250.0), 70_000.0);
        assert_eq!(recurrence_interval_years(800.0), 500_000.0);
    }

    #[test]
    fn test_extinction_band_is_continuous() {
        // 10 km: (10)^2.5 · 1e6 ≈ 3.16e8 years
        let years = recurrence_interval_years(10_000.0);
        assert!((years - 3.162e8).abs() / years < 1e-3);

        // Continuous growth within the band
        assert!(recurrence_interval_years(20_000.0) > recurrence_interval_years(10_000.0));
    }

    #[test]
    fn test_extinction_classification() {
        assert!(!is_extinction_class(999.0));
        assert!(is_extinction_class(1000.0));
        assert!(is_extinction_class(10_000.0));
    }

    #[test]
    fn test_energy_comparison_bands() {
        assert_eq!(
            energy_comparison(4.0e-5),
            "similar to a small conventional bomb"
        );
        assert_eq!(energy_comparison(0.015), "comparable to the Hiroshima bomb");
        assert_eq!(
            energy_comparison(0.5),
            "comparable to a modern thermonuclear warhead"
        );
        assert!(energy_comparison(50.0).contains("Tsar Bomba"));
        assert!(energy_comparison(5000.0).contains("nuclear arsenal"));
        assert!(energy_comparison(1.0e6).contains("Yellowstone"));
        assert!(energy_comparison(7.5e7).contains("Chicxulub"));
    }

    #[test]
    fn test_frequency_assembly() {
        let result = calculate_frequency(10_000.0, 7.5e7);
        assert!(result.extinction_class);
        assert!(result.energy_comparison.contains("Chicxulub"));
        assert!(result.recurrence_interval_years > 1.0e8);
    }
}
