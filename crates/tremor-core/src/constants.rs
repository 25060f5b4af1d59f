//! Physical constants and fixed simulation parameters.
//!
//! Values follow InSight-era estimates for Mars and are shared by every
//! crate in the workspace. Changing any of these changes simulation
//! output; they are constants, not tunables.

/// Mars surface gravity, m/s².
pub const MARS_GRAVITY: f64 = 3.71;

/// Average Mars surface temperature, °C.
pub const MARS_SURFACE_TEMP: f64 = -63.0;

/// Average Mars atmospheric pressure, Pa.
pub const MARS_ATMOSPHERIC_PRESSURE: f64 = 600.0;

/// P-wave (primary) propagation velocity, m/s.
pub const P_WAVE_VELOCITY: f64 = 3000.0;

/// S-wave (secondary) propagation velocity, m/s.
pub const S_WAVE_VELOCITY: f64 = 1500.0;

/// Terrain grid spacing, meters per cell.
pub const GRID_SPACING: f64 = 10.0;

/// Default terrain grid size (cells per side).
pub const TERRAIN_GRID_SIZE: usize = 100;

/// Baseline Martian regolith density, kg/m³.
pub const SOIL_DENSITY: f64 = 1500.0;

/// Baseline Martian regolith rigidity, Pa.
pub const SOIL_RIGIDITY: f64 = 1e8;

/// Material damping coefficient for seismic energy absorption.
pub const SOIL_DAMPING_COEFFICIENT: f64 = 0.05;

/// Dominant marsquake frequency used by the Ricker kernel and the
/// amplitude-to-acceleration conversion, Hz.
pub const DOMINANT_FREQUENCY: f64 = 1.0;

/// Habitat mass, kg.
pub const HABITAT_MASS: f64 = 50_000.0;

/// Habitat height, m.
pub const HABITAT_HEIGHT: f64 = 10.0;

/// Habitat footprint width, m (square base).
pub const HABITAT_WIDTH: f64 = 20.0;

/// Habitat material strength, Pa.
pub const HABITAT_MATERIAL_STRENGTH: f64 = 5e8;

/// Habitat natural frequency, Hz.
pub const HABITAT_NATURAL_FREQUENCY: f64 = 2.0;

/// Rover mass, kg (Perseverance-class).
pub const ROVER_MASS: f64 = 900.0;

/// Rover wheelbase, m.
pub const ROVER_WHEELBASE: f64 = 2.7;

/// Assumed rover center-of-gravity height, m.
pub const ROVER_COG_HEIGHT: f64 = 0.8;

/// Default habitat grid location `(x, y)`.
pub const HABITAT_LOCATION: (i32, i32) = (50, 50);

/// Default rover grid location `(x, y)`.
pub const ROVER_LOCATION: (i32, i32) = (60, 60);

/// Terrain slope at the default rover location, degrees.
pub const ROVER_SLOPE_DEG: f64 = 5.0;

/// Default quake epicenter grid cell `(x, y)`.
pub const QUAKE_EPICENTER: (usize, usize) = (50, 50);

/// Simulated seconds advanced per tick.
pub const SIM_DT: f64 = 0.1;

/// Run duration ceiling in simulated seconds; the loop auto-stops once
/// `current_time` exceeds this.
pub const SIMULATION_DURATION: f64 = 60.0;

/// Interval between periodic max-amplitude log entries, simulated seconds.
pub const LOG_INTERVAL: f64 = 5.0;

/// Capacity of the bounded simulation log buffer.
pub const LOG_CAPACITY: usize = 100;
