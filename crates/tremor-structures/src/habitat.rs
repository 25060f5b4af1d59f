//! Habitat structural response: SDOF elastic model with damage accumulation.
//!
//! The habitat is approximated as a single-degree-of-freedom mass-spring
//! -damper. Each evaluation converts the ground amplitude to an
//! acceleration, applies a capped dynamic amplification factor, derives
//! displacement and base stress, and accumulates damage whenever the
//! stress ratio exceeds half the material strength. Damage never
//! decreases within a run; only [`reset`](HabitatModel::reset) clears it.
//!
//! Constructed via the builder pattern: [`HabitatModel::builder`].

use tremor_core::constants::{
    HABITAT_HEIGHT, HABITAT_MASS, HABITAT_MATERIAL_STRENGTH, HABITAT_NATURAL_FREQUENCY,
    HABITAT_WIDTH,
};
use tremor_core::HabitatStatus;

use crate::amplitude_to_acceleration;

/// Fraction of critical damping assumed for the habitat's oscillation.
const DAMPING_RATIO: f64 = 0.03;

/// Upper bound on the dynamic amplification factor.
const AMPLIFICATION_CAP: f64 = 5.0;

/// Stress ratio above which damage starts accumulating.
const DAMAGE_THRESHOLD: f64 = 0.5;

/// Damage accumulated per unit of excess stress ratio, per evaluation.
const DAMAGE_RATE: f64 = 0.1;

/// Result of one habitat safety evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct HabitatAssessment {
    /// Current status classified from accumulated damage.
    pub status: HabitatStatus,
    /// `1 - damage_level`, in [0, 1].
    pub safety_rating: f64,
    /// Running maximum displacement, mm.
    pub max_displacement_mm: f64,
    /// Largest base stress seen this run, Pa. Zero before any evaluation.
    pub peak_stress: f64,
    /// Fixed operator recommendation for the current status.
    pub recommendation: &'static str,
}

/// Fixed habitat structure with accumulating damage state.
#[derive(Clone, Debug)]
pub struct HabitatModel {
    location: (i32, i32),
    mass: f64,
    height: f64,
    width: f64,
    strength: f64,
    natural_freq: f64,

    damage_level: f64,
    max_displacement: f64,
    stress_history: Vec<f64>,
}

/// Builder for [`HabitatModel`]. All parameters default to the standard
/// habitat specification and may be overridden individually.
pub struct HabitatModelBuilder {
    location: (i32, i32),
    mass: f64,
    height: f64,
    width: f64,
    strength: f64,
    natural_freq: f64,
}

impl HabitatModel {
    /// Create a builder for a habitat at the given grid location.
    pub fn builder(location: (i32, i32)) -> HabitatModelBuilder {
        HabitatModelBuilder {
            location,
            mass: HABITAT_MASS,
            height: HABITAT_HEIGHT,
            width: HABITAT_WIDTH,
            strength: HABITAT_MATERIAL_STRENGTH,
            natural_freq: HABITAT_NATURAL_FREQUENCY,
        }
    }

    /// A habitat with the standard specification at `location`.
    pub fn standard(location: (i32, i32)) -> Self {
        // The standard parameters always validate.
        Self::builder(location).build().expect("standard habitat parameters are valid")
    }

    /// Evaluate structural safety for the given ground amplitude (mm).
    ///
    /// Updates the running max displacement, appends to the stress
    /// history, and accumulates damage; returns the assessment after
    /// those updates.
    pub fn evaluate(&mut self, wave_amplitude_mm: f64) -> HabitatAssessment {
        let acceleration = amplitude_to_acceleration(wave_amplitude_mm);

        let omega_n = 2.0 * std::f64::consts::PI * self.natural_freq;

        // Frequency ratio of the 1 Hz forcing to the structure's natural
        // frequency, then the capped dynamic amplification factor.
        let beta = 1.0 / self.natural_freq;
        let amp_factor = {
            let raw = 1.0
                / ((1.0 - beta * beta).powi(2) + (2.0 * DAMPING_RATIO * beta).powi(2)).sqrt();
            raw.min(AMPLIFICATION_CAP)
        };

        let displacement = (acceleration / (omega_n * omega_n)) * amp_factor;
        self.max_displacement = self.max_displacement.max(displacement.abs());

        // Base stress: inertial force over the square footprint.
        let force = self.mass * acceleration.abs() * amp_factor;
        let area = self.width * self.width;
        let stress = force / area;
        self.stress_history.push(stress);

        let stress_ratio = stress / self.strength;
        if stress_ratio > DAMAGE_THRESHOLD {
            let increment = (stress_ratio - DAMAGE_THRESHOLD) * DAMAGE_RATE;
            self.damage_level = (self.damage_level + increment).min(1.0);
        }

        let status = HabitatStatus::from_damage(self.damage_level);
        HabitatAssessment {
            status,
            safety_rating: 1.0 - self.damage_level,
            max_displacement_mm: self.max_displacement * 1000.0,
            peak_stress: self.peak_stress(),
            recommendation: status.recommendation(),
        }
    }

    /// Fixed grid location.
    pub fn location(&self) -> (i32, i32) {
        self.location
    }

    /// Accumulated damage in [0, 1]; monotone within a run.
    pub fn damage_level(&self) -> f64 {
        self.damage_level
    }

    /// Running maximum displacement, m.
    pub fn max_displacement(&self) -> f64 {
        self.max_displacement
    }

    /// Largest stress seen this run, Pa. Zero with an empty history.
    pub fn peak_stress(&self) -> f64 {
        self.stress_history.iter().fold(0.0f64, |acc, &s| acc.max(s))
    }

    /// Stress samples appended this run, oldest first.
    pub fn stress_history(&self) -> &[f64] {
        &self.stress_history
    }

    /// Current status classified from accumulated damage.
    pub fn status(&self) -> HabitatStatus {
        HabitatStatus::from_damage(self.damage_level)
    }

    /// Clear damage, max displacement, and the stress history.
    /// Used only between runs, never mid-run.
    pub fn reset(&mut self) {
        self.damage_level = 0.0;
        self.max_displacement = 0.0;
        self.stress_history.clear();
    }
}

impl HabitatModelBuilder {
    /// Set the habitat mass, kg (default: 50 000).
    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Set the habitat height, m (default: 10).
    pub fn height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Set the footprint width, m (default: 20).
    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the material strength, Pa (default: 5e8).
    pub fn strength(mut self, strength: f64) -> Self {
        self.strength = strength;
        self
    }

    /// Set the natural frequency, Hz (default: 2.0).
    pub fn natural_freq(mut self, natural_freq: f64) -> Self {
        self.natural_freq = natural_freq;
        self
    }

    /// Build the model, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any of mass, height, width, strength, or
    /// natural frequency is not finite and strictly positive.
    pub fn build(self) -> Result<HabitatModel, String> {
        for (name, value) in [
            ("mass", self.mass),
            ("height", self.height),
            ("width", self.width),
            ("strength", self.strength),
            ("natural_freq", self.natural_freq),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(format!("{name} must be finite and > 0, got {value}"));
            }
        }
        Ok(HabitatModel {
            location: self.location,
            mass: self.mass,
            height: self.height,
            width: self.width,
            strength: self.strength,
            natural_freq: self.natural_freq,
            damage_level: 0.0,
            max_displacement: 0.0,
            stress_history: Vec::new(),
        })
    }
}
