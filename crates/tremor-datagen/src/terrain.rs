//! Fractal terrain generation.
//!
//! Multi-octave value noise over an integer lattice, normalized to a
//! 0–1000 m elevation range. Soil rigidity and density are derived from
//! elevation: higher ground reads as more compacted regolith.
//!
//! Respects the determinism contract: every lattice value comes from a
//! ChaCha8 RNG seeded from the builder seed mixed with the lattice
//! coordinates and octave, so identical seeds produce bit-identical
//! grids without storing a lattice table.
//!
//! Constructed via the builder pattern: [`TerrainBuilder`].

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tremor_core::constants::{SOIL_DENSITY, SOIL_RIGIDITY};
use tremor_core::{GridError, TerrainGrid};

/// Peak elevation after normalization, m.
const ELEVATION_RANGE: f64 = 1000.0;

/// Builder for a generated [`TerrainGrid`].
///
/// Defaults: seed 42, noise scale 0.1, six octaves, persistence 0.5,
/// lacunarity 2.0.
pub struct TerrainBuilder {
    size: usize,
    seed: u64,
    noise_scale: f64,
    octaves: u32,
    persistence: f64,
    lacunarity: f64,
}

impl TerrainBuilder {
    /// Create a builder for a `size × size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            seed: 42,
            noise_scale: 0.1,
            octaves: 6,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }

    /// Set the generation seed (default: 42).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the base noise coordinate scale (default: 0.1).
    pub fn noise_scale(mut self, noise_scale: f64) -> Self {
        self.noise_scale = noise_scale;
        self
    }

    /// Set the octave count (default: 6). Must be >= 1.
    pub fn octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    /// Generate the grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] if the size is zero. An octave
    /// count of zero is clamped to one before sampling.
    pub fn build(self) -> Result<TerrainGrid, GridError> {
        if self.size == 0 {
            return Err(GridError::EmptyGrid);
        }
        let octaves = self.octaves.max(1);
        let n = self.size * self.size;

        let mut elevation = Vec::with_capacity(n);
        for x in 0..self.size {
            for y in 0..self.size {
                elevation.push(self.fbm(x as f64 * self.noise_scale, y as f64 * self.noise_scale, octaves));
            }
        }

        normalize(&mut elevation, ELEVATION_RANGE);

        // Higher elevation reads as more compacted soil.
        let rigidity: Vec<f64> = elevation
            .iter()
            .map(|&e| SOIL_RIGIDITY * (0.8 + 0.4 * e / ELEVATION_RANGE))
            .collect();
        let density: Vec<f64> = elevation
            .iter()
            .map(|&e| SOIL_DENSITY * (0.9 + 0.2 * e / ELEVATION_RANGE))
            .collect();

        TerrainGrid::new(self.size, elevation, rigidity, density)
    }

    /// Multi-octave value noise at continuous coordinates.
    fn fbm(&self, x: f64, y: f64, octaves: u32) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        for octave in 0..octaves {
            total += amplitude * self.value_noise(x * frequency, y * frequency, octave);
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }
        total
    }

    /// Bilinearly interpolated lattice noise in [-1, 1].
    fn value_noise(&self, x: f64, y: f64, octave: u32) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let fx = smoothstep(x - x0);
        let fy = smoothstep(y - y0);
        let (xi, yi) = (x0 as i64, y0 as i64);

        let v00 = self.lattice(xi, yi, octave);
        let v10 = self.lattice(xi + 1, yi, octave);
        let v01 = self.lattice(xi, yi + 1, octave);
        let v11 = self.lattice(xi + 1, yi + 1, octave);

        let top = v00 + (v10 - v00) * fx;
        let bottom = v01 + (v11 - v01) * fx;
        top + (bottom - top) * fy
    }

    /// Deterministic lattice value in [-1, 1): a ChaCha8 RNG seeded
    /// from the builder seed mixed with the lattice coordinates.
    fn lattice(&self, xi: i64, yi: i64, octave: u32) -> f64 {
        let mixed = splitmix(
            self.seed
                ^ (xi as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
                ^ (yi as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F)
                ^ (u64::from(octave) << 56),
        );
        let mut rng = ChaCha8Rng::seed_from_u64(mixed);
        rng.random::<f64>() * 2.0 - 1.0
    }
}

/// SplitMix64 finalizer; decorrelates nearby lattice seeds.
fn splitmix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Rescale values to [0, range] by min-max normalization. A flat input
/// (single cell, or degenerate noise) maps to all zeros.
fn normalize(values: &mut [f64], range: f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values.iter() {
        min = min.min(v);
        max = max.max(v);
    }
    let span = max - min;
    if span <= 0.0 {
        values.iter_mut().for_each(|v| *v = 0.0);
        return;
    }
    for v in values.iter_mut() {
        *v = (*v - min) / span * range;
    }
}
