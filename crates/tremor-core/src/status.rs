//! Structure status enums and the snapshot-facing status report.
//!
//! Status classification is a closed mapping from accumulated damage or
//! tipping risk to a small severity ladder; the variants carry their
//! fixed operator recommendations. The evaluators in `tremor-structures`
//! produce these, the engine publishes them in snapshots.

use std::fmt;

/// Habitat structural status, ordered by severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HabitatStatus {
    /// Damage level below 0.1.
    Safe,
    /// Damage level in [0.1, 0.3).
    Monitor,
    /// Damage level in [0.3, 0.7).
    Warning,
    /// Damage level at or above 0.7.
    Critical,
}

impl HabitatStatus {
    /// Classify an accumulated damage level into a status.
    pub fn from_damage(damage_level: f64) -> Self {
        if damage_level < 0.1 {
            Self::Safe
        } else if damage_level < 0.3 {
            Self::Monitor
        } else if damage_level < 0.7 {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    /// Fixed operator recommendation for this status.
    pub fn recommendation(self) -> &'static str {
        match self {
            Self::Safe => "Structure is stable. Continue normal operations.",
            Self::Monitor => "Minor stress detected. Monitor for further activity.",
            Self::Warning => "Significant stress. Inspect structure and prepare contingencies.",
            Self::Critical => "Structural integrity compromised. Evacuate and assess damage.",
        }
    }
}

impl fmt::Display for HabitatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safe => write!(f, "SAFE"),
            Self::Monitor => write!(f, "MONITOR"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Rover stability status, ordered by severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RoverStatus {
    /// Tipping risk below 0.3.
    Stable,
    /// Tipping risk in [0.3, 0.6).
    Caution,
    /// Tipping risk at or above 0.6.
    Unstable,
}

impl RoverStatus {
    /// Classify a tipping risk into a status.
    pub fn from_risk(tipping_risk: f64) -> Self {
        if tipping_risk < 0.3 {
            Self::Stable
        } else if tipping_risk < 0.6 {
            Self::Caution
        } else {
            Self::Unstable
        }
    }

    /// Fixed operator recommendation for this status.
    pub fn recommendation(self) -> &'static str {
        match self {
            Self::Stable => "Rover is stable. Safe to continue operations.",
            Self::Caution => "Elevated tipping risk. Reduce speed and avoid slopes.",
            Self::Unstable => "High tipping risk. Stop immediately and stabilize.",
        }
    }
}

impl fmt::Display for RoverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => write!(f, "STABLE"),
            Self::Caution => write!(f, "CAUTION"),
            Self::Unstable => write!(f, "UNSTABLE"),
        }
    }
}

/// Which monitored structure a query refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StructureKind {
    /// The fixed habitat.
    Habitat,
    /// The mobile rover.
    Rover,
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Habitat => write!(f, "HABITAT-ALPHA"),
            Self::Rover => write!(f, "ROVER-01"),
        }
    }
}

/// Snapshot-facing status record for one structure.
///
/// `damage_level` is populated for the habitat, `tipping_risk` for the
/// rover; the other stays zero. `health_pct` is `(1 - severity) * 100`
/// where severity is whichever of the two applies.
#[derive(Clone, Debug, PartialEq)]
pub struct StructureReport {
    /// Which structure this report describes.
    pub kind: StructureKind,
    /// Fixed grid location `(x, y)`.
    pub location: (i32, i32),
    /// Status label, e.g. `"SAFE"` or `"CAUTION"`.
    pub status: String,
    /// Remaining health as a percentage in [0, 100].
    pub health_pct: f64,
    /// Accumulated damage level in [0, 1] (habitat only).
    pub damage_level: f64,
    /// Current tipping risk in [0, 1] (rover only).
    pub tipping_risk: f64,
    /// Fixed operator recommendation for the current status.
    pub recommendation: &'static str,
}
