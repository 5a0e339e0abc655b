/// Physical constants and scaling-law coefficients used in impact calculations

/// Gravitational acceleration in m/s²
pub const G_ACCEL_MPS2: f64 = 9.80665;

/// Energy released by one megaton of TNT, in joules
///
/// The megaton is the standard unit for comparing impact energies against
/// nuclear yields. 1 MT = 4.184e15 J (exactly, by definition of the
/// thermochemical calorie).
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Joules to ergs (CGS). Crater scaling literature is published in ergs.
pub const ERGS_PER_JOULE: f64 = 1.0e7;

/// Default bulk density for a stony (S-type) asteroid, kg/m³
///
/// Chondritic bodies dominate the near-Earth population. Iron impactors
/// run ~7800 kg/m³ and comets ~600 kg/m³; callers override the density
/// for those cases.
pub const DEFAULT_ASTEROID_DENSITY_KGM3: f64 = 3000.0;

/// Crater-energy scaling coefficient from Pike et al. (1980)
///
/// Empirical fit relating impact energy to final crater diameter:
/// E_erg = 9.1e24 · D_km^2.59, derived from terrestrial and lunar crater
/// surveys. Inverted here to predict diameter from energy.
pub const PIKE_ENERGY_COEFFICIENT_ERG: f64 = 9.1e24;

/// Crater diameter exponent in the Pike et al. (1980) scaling law
pub const PIKE_DIAMETER_EXPONENT: f64 = 2.59;

/// Exponent applied to sin(impact angle) when reducing effective
/// cratering energy for oblique impacts
///
/// Grazing impacts couple less energy into excavation. Applied to crater
/// formation only; thermal, blast, wind, and seismic output use the full
/// kinetic energy (airburst-style effects are far less angle-sensitive).
pub const ANGLE_EFFICIENCY_EXPONENT: f64 = 0.44;

/// Simple craters are bowl-shaped with depth ≈ 20% of diameter
pub const SIMPLE_CRATER_DEPTH_RATIO: f64 = 0.20;

/// Complex craters slump to a shallower profile, depth ≈ 15% of diameter
pub const COMPLEX_CRATER_DEPTH_RATIO: f64 = 0.15;

/// Simple-to-complex crater transition diameter on Earth, km
///
/// Hard threshold, not a continuous transition. Below this the crater
/// retains its bowl shape; above it the floor rebounds and the walls
/// collapse into terraces.
pub const CRATER_COMPLEX_TRANSITION_KM: f64 = 3.2;

/// Tsunami amplitude coefficient from Ward & Asphaug (2000)
///
/// Deep-water wave height in meters: H = 1.88 · E_mt^0.22
pub const WARD_ASPHAUG_COEFFICIENT: f64 = 1.88;

/// Energy exponent in the Ward & Asphaug (2000) amplitude fit
pub const WARD_ASPHAUG_EXPONENT: f64 = 0.22;

/// Ceiling on predicted tsunami wave height, meters
///
/// The power-law fit is unconstrained at extinction-class energies; the
/// water column itself bounds the wave.
pub const MAX_TSUNAMI_HEIGHT_M: f64 = 1000.0;

/// Mean ocean depth used for the shallow-water wave speed √(g·d), meters
pub const MEAN_OCEAN_DEPTH_M: f64 = 4000.0;

/// Floor on tsunami arrival time, minutes. Near-coast impacts still take
/// minutes to organize a coherent wave front.
pub const MIN_TSUNAMI_ARRIVAL_MINUTES: f64 = 5.0;

/// Affected coastline length per meter of deep-water wave height, km/m
pub const COASTLINE_KM_PER_WAVE_METER: f64 = 5.0;

/// Ceiling on affected coastline length, km
pub const MAX_AFFECTED_COASTLINE_KM: f64 = 5000.0;

// Thermal radiation coefficients (Glasstone & Dolan, scaled from nuclear
// fireball data). Radii in meters as k · E_mt^exponent.

/// Fireball radius coefficient: R_m = 140 · E_mt^0.4
pub const FIREBALL_RADIUS_COEFFICIENT: f64 = 140.0;

/// Fireball radius energy exponent
pub const FIREBALL_RADIUS_EXPONENT: f64 = 0.4;

/// Third-degree-burn radius coefficient (full-thickness burns)
pub const THIRD_DEGREE_BURN_COEFFICIENT: f64 = 1300.0;

/// Second-degree-burn radius coefficient
pub const SECOND_DEGREE_BURN_COEFFICIENT: f64 = 1900.0;

/// Clothing-ignition radius coefficient
pub const CLOTHES_IGNITE_COEFFICIENT: f64 = 1100.0;

/// Tree-ignition radius coefficient
pub const TREES_IGNITE_COEFFICIENT: f64 = 1400.0;

/// Shared energy exponent for the four thermal-ignition radii
pub const THERMAL_RADIUS_EXPONENT: f64 = 0.41;

/// Fatality rate inside the fireball itself (vaporization)
pub const FIREBALL_FATALITY_RATE: f64 = 1.0;

/// Casualty rate in the third-degree-burn annulus
pub const THIRD_DEGREE_CASUALTY_RATE: f64 = 0.8;

/// Casualty rate in the second-degree-burn annulus
pub const SECOND_DEGREE_CASUALTY_RATE: f64 = 0.5;

/// Reference peak overpressure sound level at 1 MT, decibels
///
/// 194 dB is the theoretical maximum for an undistorted sound wave at
/// sea level; blast waves above it are shock fronts.
pub const SHOCK_BASE_DECIBELS: f64 = 194.0;

/// Hard ceiling on the reported peak sound level, decibels
pub const SHOCK_MAX_DECIBELS: f64 = 300.0;

// Overpressure-threshold radii, km per cube-root-megaton. Cube-root
// scaling follows classical blast similarity (Hopkinson-Cranz).

/// Reinforced/framed buildings collapse
pub const BUILDINGS_COLLAPSE_COEFFICIENT_KM: f64 = 1.5;

/// Wood-frame homes collapse
pub const HOMES_COLLAPSE_COEFFICIENT_KM: f64 = 3.0;

/// Lung-damage overpressure threshold
pub const LUNG_DAMAGE_COEFFICIENT_KM: f64 = 5.0;

/// Eardrum-rupture overpressure threshold
pub const EARDRUM_RUPTURE_COEFFICIENT_KM: f64 = 6.5;

/// Fatality rate inside the buildings-collapse zone
pub const BUILDINGS_COLLAPSE_FATALITY_RATE: f64 = 0.5;

/// Fatality rate in the homes-collapse annulus
pub const HOMES_COLLAPSE_FATALITY_RATE: f64 = 0.3;

/// Fatality rate in the lung-damage annulus
pub const LUNG_DAMAGE_FATALITY_RATE: f64 = 0.2;

/// Peak wind speed coefficient, mph per E_mt^0.33
pub const WIND_SPEED_COEFFICIENT_MPH: f64 = 1000.0;

/// Peak wind speed energy exponent
pub const WIND_SPEED_EXPONENT: f64 = 0.33;

/// Blast winds cannot exceed this fraction of the impactor's own speed
pub const WIND_SPEED_VELOCITY_FRACTION: f64 = 0.8;

// Wind damage-band radii, km per cube-root-megaton

/// Winds comparable to storm speeds on Jupiter
pub const JUPITER_STORM_COEFFICIENT_KM: f64 = 3.4;

/// Complete leveling of structures
pub const COMPLETE_LEVELING_COEFFICIENT_KM: f64 = 5.5;

/// EF5-tornado-equivalent winds
pub const EF5_TORNADO_COEFFICIENT_KM: f64 = 9.9;

/// Trees blown down
pub const TREES_DOWN_COEFFICIENT_KM: f64 = 16.2;

/// Fatality rate inside the complete-leveling circle
pub const COMPLETE_LEVELING_FATALITY_RATE: f64 = 0.4;

/// Gutenberg-Richter energy-magnitude intercept: log10(E_J) = 4.8 + 1.5·M
pub const GUTENBERG_RICHTER_INTERCEPT: f64 = 4.8;

/// Gutenberg-Richter energy-magnitude slope
pub const GUTENBERG_RICHTER_SLOPE: f64 = 1.5;

/// Felt-radius magnitude exponent: R_km = 10^(0.5·M)
pub const FELT_RADIUS_MAGNITUDE_EXPONENT: f64 = 0.5;

// Unit conversions

/// Kilometers per statute mile
pub const KM_PER_MILE: f64 = 1.609344;

/// Feet per meter
pub const FEET_PER_METER: f64 = 3.28084;

/// Miles per hour per km/s
pub const KMS_TO_MPH: f64 = 2236.936;

/// Mean Earth radius for great-circle distances, km
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Rough kilometers per degree of latitude, for the coarse
/// coast-distance estimate
pub const KM_PER_DEGREE: f64 = 111.2;

/// General numerical tolerance for floating point comparisons
pub const NUMERICAL_TOLERANCE: f64 = 1e-9;
