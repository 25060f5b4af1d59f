//! Rover stability: tipping-angle analysis.
//!
//! Unlike the habitat's accumulating damage, tipping risk is a pure
//! function of the current inputs: lateral acceleration tilt plus the
//! local terrain slope against the center-of-gravity-limited critical
//! angle. Only the running maximum tilt persists across evaluations.
//!
//! Constructed via the builder pattern: [`RoverModel::builder`].

use tremor_core::constants::{MARS_GRAVITY, ROVER_COG_HEIGHT, ROVER_MASS, ROVER_WHEELBASE};
use tremor_core::RoverStatus;

use crate::amplitude_to_acceleration;

/// Result of one rover safety evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct RoverAssessment {
    /// Current status classified from the tipping risk.
    pub status: RoverStatus,
    /// Tipping risk as a percentage in [0, 100].
    pub tipping_risk_pct: f64,
    /// Running maximum total tilt, degrees.
    pub max_tilt_deg: f64,
    /// Fixed operator recommendation for the current status.
    pub recommendation: &'static str,
}

/// Mobile rover with per-call tipping risk and a running max tilt.
#[derive(Clone, Debug)]
pub struct RoverModel {
    location: (i32, i32),
    mass: f64,
    wheelbase: f64,
    cog_height: f64,

    tipping_risk: f64,
    max_tilt_deg: f64,
}

/// Builder for [`RoverModel`]. Parameters default to the
/// Perseverance-class specification.
pub struct RoverModelBuilder {
    location: (i32, i32),
    mass: f64,
    wheelbase: f64,
    cog_height: f64,
}

impl RoverModel {
    /// Create a builder for a rover at the given grid location.
    pub fn builder(location: (i32, i32)) -> RoverModelBuilder {
        RoverModelBuilder {
            location,
            mass: ROVER_MASS,
            wheelbase: ROVER_WHEELBASE,
            cog_height: ROVER_COG_HEIGHT,
        }
    }

    /// A rover with the standard specification at `location`.
    pub fn standard(location: (i32, i32)) -> Self {
        Self::builder(location).build().expect("standard rover parameters are valid")
    }

    /// Critical tipping angle in degrees: `atan(wheelbase / (2·cog))`.
    pub fn critical_angle_deg(&self) -> f64 {
        (self.wheelbase / (2.0 * self.cog_height)).atan().to_degrees()
    }

    /// Evaluate stability for the given ground amplitude (mm) and local
    /// terrain slope (degrees).
    ///
    /// The tipping risk is recomputed fresh from these inputs: it is
    /// never accumulated. The running max tilt only grows.
    pub fn evaluate(&mut self, wave_amplitude_mm: f64, terrain_slope_deg: f64) -> RoverAssessment {
        let acceleration = amplitude_to_acceleration(wave_amplitude_mm);

        // Lateral acceleration reads as an apparent tilt.
        let accel_tilt_deg = (acceleration / MARS_GRAVITY).atan().to_degrees();

        let total_tilt = terrain_slope_deg.abs() + accel_tilt_deg.abs();
        self.max_tilt_deg = self.max_tilt_deg.max(total_tilt);

        self.tipping_risk = (total_tilt / self.critical_angle_deg()).min(1.0);

        let status = RoverStatus::from_risk(self.tipping_risk);
        RoverAssessment {
            status,
            tipping_risk_pct: self.tipping_risk * 100.0,
            max_tilt_deg: self.max_tilt_deg,
            recommendation: status.recommendation(),
        }
    }

    /// Fixed grid location.
    pub fn location(&self) -> (i32, i32) {
        self.location
    }

    /// Rover mass, kg.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Tipping risk from the most recent evaluation, in [0, 1].
    pub fn tipping_risk(&self) -> f64 {
        self.tipping_risk
    }

    /// Running maximum total tilt, degrees.
    pub fn max_tilt_deg(&self) -> f64 {
        self.max_tilt_deg
    }

    /// Current status classified from the last tipping risk.
    pub fn status(&self) -> RoverStatus {
        RoverStatus::from_risk(self.tipping_risk)
    }

    /// Clear tipping risk and max tilt. Used only between runs.
    pub fn reset(&mut self) {
        self.tipping_risk = 0.0;
        self.max_tilt_deg = 0.0;
    }
}

impl RoverModelBuilder {
    /// Set the rover mass, kg (default: 900).
    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Set the wheelbase, m (default: 2.7).
    pub fn wheelbase(mut self, wheelbase: f64) -> Self {
        self.wheelbase = wheelbase;
        self
    }

    /// Set the center-of-gravity height, m (default: 0.8).
    pub fn cog_height(mut self, cog_height: f64) -> Self {
        self.cog_height = cog_height;
        self
    }

    /// Build the model, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns `Err` if mass, wheelbase, or cog height is not finite
    /// and strictly positive.
    pub fn build(self) -> Result<RoverModel, String> {
        for (name, value) in [
            ("mass", self.mass),
            ("wheelbase", self.wheelbase),
            ("cog_height", self.cog_height),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(format!("{name} must be finite and > 0, got {value}"));
            }
        }
        Ok(RoverModel {
            location: self.location,
            mass: self.mass,
            wheelbase: self.wheelbase,
            cog_height: self.cog_height,
            tipping_risk: 0.0,
            max_tilt_deg: 0.0,
        })
    }
}
