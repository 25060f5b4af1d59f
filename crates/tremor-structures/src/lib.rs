//! Structural response evaluators for the Tremor workspace.
//!
//! Two models consume the ground amplitude the wave engine reports at a
//! structure's fixed location:
//!
//! - [`HabitatModel`]: single-degree-of-freedom elastic response with
//!   monotone damage accumulation.
//! - [`RoverModel`]: tipping-angle analysis; risk is recomputed fresh
//!   from the current inputs each call.
//!
//! [`Structure`] is the closed variant over both, providing the shared
//! status-report surface the engine publishes in snapshots.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod habitat;
pub mod rover;
pub mod structure;

pub use habitat::{HabitatAssessment, HabitatModel};
pub use rover::{RoverAssessment, RoverModel};
pub use structure::Structure;

use tremor_core::constants::DOMINANT_FREQUENCY;

/// Convert a ground-motion amplitude (mm) to a peak ground acceleration
/// (m/s²) assuming harmonic motion at the dominant quake frequency:
/// `a = (2πf)² · A`.
pub(crate) fn amplitude_to_acceleration(amplitude_mm: f64) -> f64 {
    let omega = 2.0 * std::f64::consts::PI * DOMINANT_FREQUENCY;
    omega * omega * (amplitude_mm / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_is_linear_in_amplitude() {
        let a1 = amplitude_to_acceleration(10.0);
        let a2 = amplitude_to_acceleration(20.0);
        assert!((a2 - 2.0 * a1).abs() < 1e-12);
    }

    #[test]
    fn fifty_mm_at_one_hertz() {
        // (2π)² · 0.05 ≈ 1.974 m/s²
        let a = amplitude_to_acceleration(50.0);
        assert!((a - 1.9739).abs() < 1e-3);
    }
}
