//! Closed variant over the monitored structures.
//!
//! The engine holds a small set of [`Structure`] values and drives them
//! uniformly each tick: evaluate against the local ground amplitude,
//! then publish a [`StructureReport`] per structure in the snapshot.

use tremor_core::{StructureKind, StructureReport};

use crate::{HabitatModel, RoverModel};

/// One monitored structure.
#[derive(Clone, Debug)]
pub enum Structure {
    /// The fixed habitat.
    Habitat(HabitatModel),
    /// The mobile rover, with the fixed terrain slope at its location
    /// in degrees.
    Rover {
        /// The rover model.
        model: RoverModel,
        /// Local terrain slope at the rover's position, degrees.
        slope_deg: f64,
    },
}

impl Structure {
    /// Which kind of structure this is.
    pub fn kind(&self) -> StructureKind {
        match self {
            Self::Habitat(_) => StructureKind::Habitat,
            Self::Rover { .. } => StructureKind::Rover,
        }
    }

    /// Fixed grid location `(x, y)`.
    pub fn location(&self) -> (i32, i32) {
        match self {
            Self::Habitat(h) => h.location(),
            Self::Rover { model, .. } => model.location(),
        }
    }

    /// Evaluate the structure against the ground amplitude (mm) at its
    /// location for this tick.
    pub fn evaluate(&mut self, wave_amplitude_mm: f64) {
        match self {
            Self::Habitat(h) => {
                h.evaluate(wave_amplitude_mm);
            }
            Self::Rover { model, slope_deg } => {
                model.evaluate(wave_amplitude_mm, *slope_deg);
            }
        }
    }

    /// Current status label, e.g. `"SAFE"` or `"CAUTION"`.
    pub fn status_label(&self) -> String {
        match self {
            Self::Habitat(h) => h.status().to_string(),
            Self::Rover { model, .. } => model.status().to_string(),
        }
    }

    /// Severity in [0, 1]: damage level for the habitat, tipping risk
    /// for the rover.
    pub fn severity(&self) -> f64 {
        match self {
            Self::Habitat(h) => h.damage_level(),
            Self::Rover { model, .. } => model.tipping_risk(),
        }
    }

    /// Snapshot-facing status record for the current state.
    pub fn report(&self) -> StructureReport {
        let (damage_level, tipping_risk, recommendation) = match self {
            Self::Habitat(h) => (h.damage_level(), 0.0, h.status().recommendation()),
            Self::Rover { model, .. } => {
                (0.0, model.tipping_risk(), model.status().recommendation())
            }
        };
        StructureReport {
            kind: self.kind(),
            location: self.location(),
            status: self.status_label(),
            health_pct: (1.0 - self.severity()) * 100.0,
            damage_level,
            tipping_risk,
            recommendation,
        }
    }

    /// Clear accumulated state. Used only between runs.
    pub fn reset(&mut self) {
        match self {
            Self::Habitat(h) => h.reset(),
            Self::Rover { model, .. } => model.reset(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tremor_core::constants::{HABITAT_LOCATION, ROVER_LOCATION, ROVER_SLOPE_DEG};

    fn habitat() -> Structure {
        Structure::Habitat(HabitatModel::standard(HABITAT_LOCATION))
    }

    fn rover() -> Structure {
        Structure::Rover {
            model: RoverModel::standard(ROVER_LOCATION),
            slope_deg: ROVER_SLOPE_DEG,
        }
    }

    #[test]
    fn kinds_and_locations() {
        assert_eq!(habitat().kind(), StructureKind::Habitat);
        assert_eq!(habitat().location(), HABITAT_LOCATION);
        assert_eq!(rover().kind(), StructureKind::Rover);
        assert_eq!(rover().location(), ROVER_LOCATION);
    }

    #[test]
    fn fresh_habitat_report_is_safe_at_full_health() {
        let report = habitat().report();
        assert_eq!(report.status, "SAFE");
        assert_eq!(report.health_pct, 100.0);
        assert_eq!(report.damage_level, 0.0);
        assert_eq!(report.tipping_risk, 0.0);
    }

    #[test]
    fn rover_report_carries_risk_not_damage() {
        let mut rover = rover();
        rover.evaluate(150.0);
        let report = rover.report();
        assert_eq!(report.status, "UNSTABLE");
        assert_eq!(report.damage_level, 0.0);
        assert_eq!(report.tipping_risk, 1.0);
        assert_eq!(report.health_pct, 0.0);
    }

    #[test]
    fn health_tracks_severity() {
        let mut rover = rover();
        rover.evaluate(10.0);
        let report = rover.report();
        assert!((report.health_pct - (1.0 - report.tipping_risk) * 100.0).abs() < 1e-12);
    }

    #[test]
    fn reset_restores_full_health() {
        let mut rover = rover();
        rover.evaluate(150.0);
        rover.reset();
        assert_eq!(rover.report().health_pct, 100.0);
    }
}
