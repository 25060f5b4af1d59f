//! Ambient Mars environmental conditions.
//!
//! Gravity, surface temperature, and atmospheric pressure, plus the two
//! derived quantities the rest of the workspace asks for: temperature
//! at depth (fixed geothermal gradient) and Q-factor wave attenuation
//! over distance.

use tremor_core::constants::{
    MARS_ATMOSPHERIC_PRESSURE, MARS_GRAVITY, MARS_SURFACE_TEMP, P_WAVE_VELOCITY,
};
use tremor_core::CellProps;

/// Approximate geothermal gradient, °C per km of depth.
const GEOTHERMAL_GRADIENT: f64 = 15.0;

/// Seismic quality factor for the Martian crust (estimated 200–400).
const Q_FACTOR: f64 = 300.0;

/// Mars environmental parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarsEnvironment {
    /// Surface gravity, m/s².
    pub gravity: f64,
    /// Average surface temperature, °C.
    pub temperature: f64,
    /// Average atmospheric pressure, Pa.
    pub pressure: f64,
}

impl Default for MarsEnvironment {
    fn default() -> Self {
        Self {
            gravity: MARS_GRAVITY,
            temperature: MARS_SURFACE_TEMP,
            pressure: MARS_ATMOSPHERIC_PRESSURE,
        }
    }
}

impl MarsEnvironment {
    /// Temperature at the given depth below the surface, °C.
    pub fn temperature_at_depth(&self, depth_km: f64) -> f64 {
        self.temperature + GEOTHERMAL_GRADIENT * depth_km
    }

    /// Anelastic attenuation factor in (0, 1] for a wave of `frequency`
    /// Hz after travelling `distance_km`.
    ///
    /// `exp(-α d)` with `α = πf / (Q v)`, v in km/s.
    pub fn wave_attenuation(&self, distance_km: f64, frequency: f64) -> f64 {
        let alpha = (std::f64::consts::PI * frequency) / (Q_FACTOR * P_WAVE_VELOCITY / 1000.0);
        (-alpha * distance_km).exp()
    }
}

/// Shear-wave velocity implied by a cell's soil properties, m/s.
///
/// `sqrt(rigidity / density)`: grid construction guarantees a strictly
/// positive rigidity and finite density.
pub fn shear_wave_velocity(props: CellProps) -> f64 {
    (props.rigidity / props.density).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let env = MarsEnvironment::default();
        assert_eq!(env.gravity, 3.71);
        assert_eq!(env.temperature, -63.0);
        assert_eq!(env.pressure, 600.0);
    }

    #[test]
    fn temperature_increases_with_depth() {
        let env = MarsEnvironment::default();
        assert_eq!(env.temperature_at_depth(0.0), -63.0);
        assert!((env.temperature_at_depth(10.0) - 87.0).abs() < 1e-12);
        assert!(env.temperature_at_depth(50.0) > env.temperature_at_depth(20.0));
    }

    #[test]
    fn attenuation_decays_with_distance() {
        let env = MarsEnvironment::default();
        let near = env.wave_attenuation(10.0, 1.0);
        let far = env.wave_attenuation(500.0, 1.0);
        assert!(near > far);
        assert!(near <= 1.0 && near > 0.0);
        assert!(far > 0.0);
    }

    #[test]
    fn attenuation_at_zero_distance_is_one() {
        let env = MarsEnvironment::default();
        assert!((env.wave_attenuation(0.0, 1.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn shear_velocity_from_baseline_regolith() {
        let props = CellProps {
            elevation: 0.0,
            rigidity: 1e8,
            density: 1500.0,
        };
        // sqrt(1e8 / 1500) ≈ 258 m/s
        let v = shear_wave_velocity(props);
        assert!((v - 258.19).abs() < 0.01);
    }
}
