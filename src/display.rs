//! Human-readable projection of the numeric impact results
//!
//! Strictly a formatting pass: every sentence here renders numbers the
//! orchestrator already computed, in reader-friendly imperial units. No
//! physics and no new magnitudes live in this module, so wording changes
//! never touch the calculators.

use crate::crater::CraterResults;
use crate::earthquake::EarthquakeResults;
use crate::fireball::FireballResults;
use crate::frequency::FrequencyResults;
use crate::shock_wave::ShockWaveResults;
use crate::tsunami::TsunamiResults;
use crate::units::km_to_miles;
use crate::wind_blast::WindBlastResults;
use serde::{Deserialize, Serialize};

/// Formatted, unit-localized sentences for direct rendering by consumers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayResults {
    pub energy_summary: String,
    pub crater_summary: String,
    pub fireball_summary: String,
    pub shock_wave_summary: String,
    pub wind_blast_summary: String,
    pub earthquake_summary: String,
    pub tsunami_summary: Option<String>,
    pub frequency_summary: String,
    pub casualty_summary: String,
    pub nearest_city_summary: Option<String>,
}

/// Group digits with thousands separators: 1234567 → "1,234,567"
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Distance in miles, dropping to feet for sub-city-block scales
fn format_miles(miles: f64) -> String {
    if miles < 0.12 {
        format!("{:.0} feet", miles * 5280.0)
    } else if miles < 10.0 {
        format!("{miles:.1} miles")
    } else {
        format!("{} miles", group_thousands(miles.round() as u64))
    }
}

/// People counts: exact with separators up to a million, rounded above
fn format_people(n: u64) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1} billion", n as f64 / 1.0e9)
    } else if n >= 1_000_000 {
        format!("{:.1} million", n as f64 / 1.0e6)
    } else {
        group_thousands(n)
    }
}

fn format_megatons(energy_megatons: f64) -> String {
    if energy_megatons >= 1000.0 {
        format!("{} megatons", group_thousands(energy_megatons.round() as u64))
    } else if energy_megatons >= 1.0 {
        format!("{energy_megatons:.1} megatons")
    } else if energy_megatons >= 0.01 {
        format!("{energy_megatons:.2} megatons")
    } else {
        format!("{:.0} tons", energy_megatons * 1.0e6)
    }
}

fn format_years(years: f64) -> String {
    if years >= 1.0e6 {
        format!("{:.0} million years", years / 1.0e6)
    } else if years >= 2.0 {
        format!("{} years", group_thousands(years.round() as u64))
    } else {
        "year".to_string()
    }
}

fn format_arrival(minutes: f64) -> String {
    if minutes < 90.0 {
        format!("{minutes:.0} minutes")
    } else {
        format!("{:.1} hours", minutes / 60.0)
    }
}

/// Render the full display projection from already-computed results.
#[allow(clippy::too_many_arguments)]
pub fn build_display_results(
    energy_megatons: f64,
    crater: &CraterResults,
    tsunami: Option<&TsunamiResults>,
    fireball: &FireballResults,
    shock_wave: &ShockWaveResults,
    wind_blast: &WindBlastResults,
    earthquake: &EarthquakeResults,
    frequency: &FrequencyResults,
    crater_deaths: u64,
    total_casualties: u64,
    nearest_city: Option<(&str, f64)>,
) -> DisplayResults {
    let energy_summary = format!(
        "The impact releases {} of TNT equivalent, {}.",
        format_megatons(energy_megatons),
        frequency.energy_comparison
    );

    let crater_summary = if crater.diameter_km == 0.0 {
        "The grazing impact leaves no crater.".to_string()
    } else {
        let surface = if crater.is_ocean {
            "in the ocean floor"
        } else {
            "in the ground"
        };
        format!(
            "The impact blasts a crater {} wide and {} deep {}.",
            format_miles(crater.diameter_miles),
            format_miles(crater.depth_miles),
            surface
        )
    };

    let fireball_summary = format!(
        "The fireball extends {} from the impact point; third-degree burns reach {} and second-degree burns reach {}.",
        format_miles(fireball.fireball_radius_miles),
        format_miles(fireball.third_degree_burn_radius_miles),
        format_miles(fireball.second_degree_burn_radius_miles)
    );

    let shock_wave_summary = format!(
        "A {:.0} dB shock wave collapses buildings within {}, levels homes within {}, and ruptures eardrums within {}.",
        shock_wave.peak_decibels,
        format_miles(shock_wave.buildings_collapse_radius_miles),
        format_miles(shock_wave.homes_collapse_radius_miles),
        format_miles(shock_wave.eardrum_rupture_radius_miles)
    );

    let wind_blast_summary = format!(
        "Blast winds peak at {} mph, leveling everything within {} and felling trees out to {}.",
        group_thousands(wind_blast.peak_speed_mph.round() as u64),
        format_miles(wind_blast.complete_leveling_radius_miles),
        format_miles(wind_blast.trees_down_radius_miles)
    );

    let earthquake_summary = format!(
        "The ground shakes as in a magnitude {:.1} earthquake, felt up to {} away.",
        earthquake.magnitude,
        format_miles(earthquake.felt_radius_miles)
    );

    let tsunami_summary = tsunami.map(|t| {
        format!(
            "A {:.0} foot tsunami reaches the nearest coast in {}, threatening {} of coastline.",
            t.wave_height_feet,
            format_arrival(t.arrival_time_minutes),
            format_miles(km_to_miles(t.affected_coastline_km))
        )
    });

    let frequency_summary = if frequency.extinction_class {
        format!(
            "An extinction-level impact of this size occurs roughly once every {}.",
            format_years(frequency.recurrence_interval_years)
        )
    } else {
        format!(
            "An impact this size occurs roughly once every {}.",
            format_years(frequency.recurrence_interval_years)
        )
    };

    let casualty_summary = if total_casualties == 0 {
        "No casualties are estimated for this impact.".to_string()
    } else {
        format!(
            "An estimated {} people would be killed or injured across all hazard zones, including {} vaporized in the crater.",
            format_people(total_casualties),
            format_people(crater_deaths)
        )
    };

    let nearest_city_summary = nearest_city.map(|(name, distance_km)| {
        format!(
            "The nearest city, {}, lies {} from the impact point.",
            name,
            format_miles(km_to_miles(distance_km))
        )
    });

    DisplayResults {
        energy_summary,
        crater_summary,
        fireball_summary,
        shock_wave_summary,
        wind_blast_summary,
        earthquake_summary,
        tsunami_summary,
        frequency_summary,
        casualty_summary,
        nearest_city_summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_miles_scales() {
        assert_eq!(format_miles(0.05), "264 feet");
        assert_eq!(format_miles(2.5), "2.5 miles");
        assert_eq!(format_miles(1234.4), "1,234 miles");
    }

    #[test]
    fn test_format_people() {
        assert_eq!(format_people(4), "4");
        assert_eq!(format_people(12_500), "12,500");
        assert_eq!(format_people(3_400_000), "3.4 million");
        assert_eq!(format_people(2_100_000_000), "2.1 billion");
    }

    #[test]
    fn test_format_megatons_small_yield() {
        // Sub-0.01 MT yields read better in tons
        assert_eq!(format_megatons(0.0005), "500 tons");
        assert_eq!(format_megatons(0.54), "0.54 megatons");
        assert_eq!(format_megatons(75_000_000.0), "75,000,000 megatons");
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(1.0), "year");
        assert_eq!(format_years(60.0), "60 years");
        assert_eq!(format_years(500_000.0), "500,000 years");
        assert_eq!(format_years(3.16e8), "316 million years");
    }

    #[test]
    fn test_format_arrival() {
        assert_eq!(format_arrival(5.0), "5 minutes");
        assert_eq!(format_arrival(187.0), "3.1 hours");
    }
}
