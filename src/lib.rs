//! # Impact Engine
//!
//! Deterministic asteroid/comet impact consequence estimation. A small set
//! of physical inputs (size, speed, entry angle, location) is run through a
//! pipeline of empirical scaling laws to produce a structured multi-hazard
//! damage report: crater, tsunami, fireball, blast overpressure, wind, and
//! seismic effects, with population-based casualty estimates and formatted
//! display text.
//!
//! The engine is a pure library: no I/O, no shared mutable state, and every
//! call is independent, so hosts may parallelize freely.

// Re-export the main types and functions
pub use impact_api::{
    calculate_impact, calculate_impact_with_context, ComprehensiveImpactResults, ImpactError,
    ImpactParameters, NearestCity, PopulationContext, TerrainOverride,
};
pub use crater::CraterResults;
pub use display::DisplayResults;
pub use earthquake::EarthquakeResults;
pub use fireball::FireballResults;
pub use frequency::FrequencyResults;
pub use monte_carlo::{
    run_monte_carlo, DistributionSummary, MonteCarloParams, MonteCarloResults,
};
pub use shock_wave::ShockWaveResults;
pub use tsunami::TsunamiResults;
pub use wind_blast::WindBlastResults;

// Module declarations
pub mod constants;
pub mod impact_api;
#[cfg(target_arch = "wasm32")]
pub mod wasm;
mod crater;
mod display;
mod earthquake;
mod fireball;
mod frequency;
mod location;
mod monte_carlo;
mod shock_wave;
mod tsunami;
mod units;
mod wind_blast;

pub use location::{estimate_distance_to_coast, is_ocean_impact};
pub use units::{
    haversine_distance_km, joules_to_megatons, km_to_miles, megatons_to_joules, miles_to_km,
};
