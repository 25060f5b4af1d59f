//! World configuration and validation.
//!
//! [`WorldConfig`] is the input for constructing a
//! [`SeismicWorld`](crate::world::SeismicWorld). `validate()` checks
//! every structural invariant at startup so that per-tick computation
//! never fails.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use tremor_core::constants::{
    HABITAT_LOCATION, LOG_CAPACITY, QUAKE_EPICENTER, ROVER_LOCATION, ROVER_SLOPE_DEG, SIM_DT,
    SIMULATION_DURATION,
};
use tremor_core::{QuakeEvent, TerrainGrid};

/// Errors detected during [`WorldConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The event catalog is empty: there is nothing to `start`.
    EmptyCatalog,
    /// Ring capacity is below the minimum of 2.
    RingTooSmall {
        /// The configured capacity that was too small.
        configured: usize,
    },
    /// Log capacity is zero.
    LogCapacityZero,
    /// `tick_rate_hz` is NaN, infinite, zero, or negative, or its
    /// reciprocal is not finite.
    InvalidTickRate {
        /// The invalid value.
        value: f64,
    },
    /// `sim_dt` is NaN, infinite, zero, or negative.
    InvalidDt {
        /// The invalid value.
        value: f64,
    },
    /// `run_duration` is NaN, infinite, zero, or negative.
    InvalidDuration {
        /// The invalid value.
        value: f64,
    },
    /// The driver thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of the spawn failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCatalog => write!(f, "event catalog is empty"),
            Self::RingTooSmall { configured } => {
                write!(f, "ring_capacity {configured} is below minimum of 2")
            }
            Self::LogCapacityZero => write!(f, "log_capacity must be at least 1"),
            Self::InvalidTickRate { value } => {
                write!(f, "tick_rate_hz must be finite and positive, got {value}")
            }
            Self::InvalidDt { value } => {
                write!(f, "sim_dt must be finite and positive, got {value}")
            }
            Self::InvalidDuration { value } => {
                write!(f, "run_duration must be finite and positive, got {value}")
            }
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "thread spawn failed: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Complete configuration for constructing a simulation world.
///
/// Defaults place the habitat at (50, 50), the rover at (60, 60) on a
/// 5° slope, and the epicenter at cell (50, 50), with 0.1 s of
/// simulated time per tick, a 60 s run ceiling, and a wall-clock tick
/// rate of 10 Hz.
pub struct WorldConfig {
    /// Immutable terrain, shared read-only with the wave engine.
    pub grid: Arc<TerrainGrid>,
    /// Event catalog; `start(i)` selects `events[i]` for one run.
    pub events: Vec<QuakeEvent>,
    /// Epicenter grid cell for every run.
    pub epicenter: (usize, usize),
    /// Habitat grid location.
    pub habitat_location: (i32, i32),
    /// Rover grid location.
    pub rover_location: (i32, i32),
    /// Terrain slope at the rover's location, degrees.
    pub rover_slope_deg: f64,
    /// Simulated seconds advanced per tick.
    pub sim_dt: f64,
    /// Auto-stop ceiling in simulated seconds.
    pub run_duration: f64,
    /// Wall-clock tick rate of the driver thread, Hz.
    pub tick_rate_hz: f64,
    /// Snapshots retained in the publication ring. Minimum: 2.
    pub ring_capacity: usize,
    /// Entries retained in the simulation log buffer.
    pub log_capacity: usize,
}

impl WorldConfig {
    /// Configuration with default placements and timing for the given
    /// terrain and catalog.
    pub fn new(grid: Arc<TerrainGrid>, events: Vec<QuakeEvent>) -> Self {
        Self {
            grid,
            events,
            epicenter: QUAKE_EPICENTER,
            habitat_location: HABITAT_LOCATION,
            rover_location: ROVER_LOCATION,
            rover_slope_deg: ROVER_SLOPE_DEG,
            sim_dt: SIM_DT,
            run_duration: SIMULATION_DURATION,
            tick_rate_hz: 10.0,
            ring_capacity: 8,
            log_capacity: LOG_CAPACITY,
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.events.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if self.ring_capacity < 2 {
            return Err(ConfigError::RingTooSmall {
                configured: self.ring_capacity,
            });
        }
        if self.log_capacity == 0 {
            return Err(ConfigError::LogCapacityZero);
        }
        // Reciprocal check rejects subnormals where 1.0/hz = inf, which
        // would panic in Duration::from_secs_f64.
        let hz = self.tick_rate_hz;
        if !hz.is_finite() || hz <= 0.0 || !(1.0 / hz).is_finite() {
            return Err(ConfigError::InvalidTickRate { value: hz });
        }
        if !self.sim_dt.is_finite() || self.sim_dt <= 0.0 {
            return Err(ConfigError::InvalidDt { value: self.sim_dt });
        }
        if !self.run_duration.is_finite() || self.run_duration <= 0.0 {
            return Err(ConfigError::InvalidDuration {
                value: self.run_duration,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for WorldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorldConfig")
            .field("grid_size", &self.grid.size())
            .field("events", &self.events.len())
            .field("epicenter", &self.epicenter)
            .field("habitat_location", &self.habitat_location)
            .field("rover_location", &self.rover_location)
            .field("rover_slope_deg", &self.rover_slope_deg)
            .field("sim_dt", &self.sim_dt)
            .field("run_duration", &self.run_duration)
            .field("tick_rate_hz", &self.tick_rate_hz)
            .field("ring_capacity", &self.ring_capacity)
            .field("log_capacity", &self.log_capacity)
            .finish()
    }
}
