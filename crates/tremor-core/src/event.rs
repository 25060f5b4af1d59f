//! Quake events: the immutable records consumed by the simulation loop.
//!
//! Events are produced by the external catalog generator (see
//! `tremor-datagen`) and selected by index for the duration of one run.
//! The engine never generates or mutates events.

use std::fmt;

use crate::constants::{P_WAVE_VELOCITY, S_WAVE_VELOCITY};

/// Seismic wave kind, distinguished by propagation velocity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaveKind {
    /// Primary (compressional) wave, fastest, arrives first.
    P,
    /// Secondary (shear) wave, roughly half the P-wave velocity.
    S,
}

/// Magnitude band of a quake event, following InSight statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuakeCategory {
    /// Magnitude 2.0–3.0.
    Minor,
    /// Magnitude 3.0–4.0.
    Moderate,
    /// Magnitude 4.0–5.0.
    Major,
}

impl QuakeCategory {
    /// Inclusive-exclusive magnitude band for this category.
    pub fn magnitude_range(self) -> (f64, f64) {
        match self {
            Self::Minor => (2.0, 3.0),
            Self::Moderate => (3.0, 4.0),
            Self::Major => (4.0, 5.0),
        }
    }
}

impl fmt::Display for QuakeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minor => write!(f, "minor"),
            Self::Moderate => write!(f, "moderate"),
            Self::Major => write!(f, "major"),
        }
    }
}

/// An immutable marsquake event.
///
/// `timestamp` is seconds since the catalog epoch (mission start), not
/// wall clock. Velocities are carried per event so a run does not need
/// to consult global constants for arrival-time math.
#[derive(Clone, Debug, PartialEq)]
pub struct QuakeEvent {
    /// Catalog identifier, e.g. `"M003"`.
    pub id: String,
    /// Seconds since the catalog epoch.
    pub timestamp: f64,
    /// Quake magnitude (Richter-inspired scale).
    pub magnitude: f64,
    /// Epicenter latitude, degrees.
    pub latitude: f64,
    /// Epicenter longitude, degrees.
    pub longitude: f64,
    /// Hypocenter depth below surface, km.
    pub depth_km: f64,
    /// P-wave velocity for this event, m/s.
    pub p_velocity: f64,
    /// S-wave velocity for this event, m/s.
    pub s_velocity: f64,
    /// Magnitude band.
    pub category: QuakeCategory,
}

impl QuakeEvent {
    /// Construct an event with the default Mars wave velocities.
    pub fn with_default_velocities(
        id: String,
        timestamp: f64,
        magnitude: f64,
        latitude: f64,
        longitude: f64,
        depth_km: f64,
        category: QuakeCategory,
    ) -> Self {
        Self {
            id,
            timestamp,
            magnitude,
            latitude,
            longitude,
            depth_km,
            p_velocity: P_WAVE_VELOCITY,
            s_velocity: S_WAVE_VELOCITY,
            category,
        }
    }

    /// Velocity of the given wave kind for this event, m/s.
    pub fn velocity(&self, kind: WaveKind) -> f64 {
        match kind {
            WaveKind::P => self.p_velocity,
            WaveKind::S => self.s_velocity,
        }
    }
}
