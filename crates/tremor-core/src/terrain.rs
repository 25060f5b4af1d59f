//! Immutable terrain grid: elevation, soil rigidity, and soil density.
//!
//! Generated once at process start (see `tremor-datagen`) and shared
//! read-only by every consumer for the process lifetime. Storage is
//! row-major flat `Vec<f64>` per property, indexed `x * size + y`.

use crate::error::GridError;

/// Per-cell terrain properties returned by [`TerrainGrid::props_at`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellProps {
    /// Elevation above datum, m.
    pub elevation: f64,
    /// Soil rigidity, Pa. Always > 0.
    pub rigidity: f64,
    /// Soil density, kg/m³.
    pub density: f64,
}

/// An immutable `size × size` terrain grid.
///
/// Invariants enforced at construction:
/// - `size >= 1`
/// - all three arrays have exactly `size * size` entries
/// - every rigidity value is finite and strictly positive (it is used
///   as a divisor downstream)
/// - every elevation and density value is finite
///
/// Point queries clamp coordinates into bounds rather than failing;
/// out-of-bounds access is a policy, not an error.
#[derive(Clone, Debug)]
pub struct TerrainGrid {
    size: usize,
    elevation: Vec<f64>,
    rigidity: Vec<f64>,
    density: Vec<f64>,
}

impl TerrainGrid {
    /// Create a grid from flat row-major property arrays.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if the size is zero, an array length does
    /// not match, any rigidity is non-positive, or any value is non-finite.
    pub fn new(
        size: usize,
        elevation: Vec<f64>,
        rigidity: Vec<f64>,
        density: Vec<f64>,
    ) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        let expected = size * size;
        for (name, arr) in [
            ("elevation", &elevation),
            ("rigidity", &rigidity),
            ("density", &density),
        ] {
            if arr.len() != expected {
                return Err(GridError::LengthMismatch {
                    name,
                    expected,
                    actual: arr.len(),
                });
            }
        }
        for (i, &r) in rigidity.iter().enumerate() {
            if !(r > 0.0) {
                return Err(GridError::NonPositiveRigidity {
                    cell_index: i,
                    value: r,
                });
            }
        }
        for (name, arr) in [("elevation", &elevation), ("density", &density)] {
            if let Some(i) = arr.iter().position(|v| !v.is_finite()) {
                return Err(GridError::NonFiniteCell {
                    name,
                    cell_index: i,
                });
            }
        }
        Ok(Self {
            size,
            elevation,
            rigidity,
            density,
        })
    }

    /// Build a uniform grid with baseline soil properties everywhere.
    /// Used by tests and as a stand-in when no generated terrain is
    /// supplied.
    pub fn uniform(size: usize, elevation: f64, rigidity: f64, density: f64) -> Result<Self, GridError> {
        let n = size.checked_mul(size).ok_or(GridError::EmptyGrid)?;
        Self::new(
            size,
            vec![elevation; n],
            vec![rigidity; n],
            vec![density; n],
        )
    }

    /// Cells per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total cell count (`size * size`).
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Clamp an `(x, y)` coordinate into grid bounds and return the flat
    /// row-major index.
    pub fn clamped_index(&self, x: i64, y: i64) -> usize {
        let max = (self.size - 1) as i64;
        let cx = x.clamp(0, max) as usize;
        let cy = y.clamp(0, max) as usize;
        cx * self.size + cy
    }

    /// Terrain properties at `(x, y)`, coordinates clamped into bounds.
    pub fn props_at(&self, x: i64, y: i64) -> CellProps {
        let i = self.clamped_index(x, y);
        CellProps {
            elevation: self.elevation[i],
            rigidity: self.rigidity[i],
            density: self.density[i],
        }
    }

    /// Elevation at `(x, y)`, coordinates clamped into bounds.
    pub fn elevation_at(&self, x: i64, y: i64) -> f64 {
        self.elevation[self.clamped_index(x, y)]
    }

    /// Full elevation array, row-major.
    pub fn elevation(&self) -> &[f64] {
        &self.elevation
    }

    /// Full rigidity array, row-major.
    pub fn rigidity(&self) -> &[f64] {
        &self.rigidity
    }

    /// Full density array, row-major.
    pub fn density(&self) -> &[f64] {
        &self.density
    }

    /// Min, max, mean, and population standard deviation of elevation.
    pub fn elevation_stats(&self) -> (f64, f64, f64, f64) {
        let n = self.elevation.len() as f64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &e in &self.elevation {
            min = min.min(e);
            max = max.max(e);
            sum += e;
        }
        let mean = sum / n;
        let var = self
            .elevation
            .iter()
            .map(|&e| (e - mean) * (e - mean))
            .sum::<f64>()
            / n;
        (min, max, mean, var.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_size() {
        let err = TerrainGrid::new(0, vec![], vec![], vec![]).unwrap_err();
        assert_eq!(err, GridError::EmptyGrid);
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = TerrainGrid::new(2, vec![0.0; 3], vec![1.0; 4], vec![1.0; 4]).unwrap_err();
        assert!(matches!(
            err,
            GridError::LengthMismatch {
                name: "elevation",
                expected: 4,
                actual: 3,
            }
        ));
    }

    #[test]
    fn rejects_non_positive_rigidity() {
        let mut rigidity = vec![1e8; 4];
        rigidity[2] = 0.0;
        let err = TerrainGrid::new(2, vec![0.0; 4], rigidity, vec![1500.0; 4]).unwrap_err();
        assert!(matches!(
            err,
            GridError::NonPositiveRigidity { cell_index: 2, .. }
        ));
    }

    #[test]
    fn rejects_nan_rigidity() {
        let mut rigidity = vec![1e8; 4];
        rigidity[0] = f64::NAN;
        let err = TerrainGrid::new(2, vec![0.0; 4], rigidity, vec![1500.0; 4]).unwrap_err();
        assert!(matches!(err, GridError::NonPositiveRigidity { .. }));
    }

    #[test]
    fn rejects_non_finite_elevation() {
        let mut elevation = vec![0.0; 4];
        elevation[3] = f64::INFINITY;
        let err = TerrainGrid::new(2, elevation, vec![1e8; 4], vec![1500.0; 4]).unwrap_err();
        assert!(matches!(
            err,
            GridError::NonFiniteCell {
                name: "elevation",
                cell_index: 3,
            }
        ));
    }

    #[test]
    fn props_at_clamps_out_of_bounds() {
        let grid = TerrainGrid::uniform(4, 100.0, 1e8, 1500.0).unwrap();
        let inside = grid.props_at(1, 1);
        let below = grid.props_at(-10, -10);
        let above = grid.props_at(99, 99);
        assert_eq!(inside, below);
        assert_eq!(inside, above);
    }

    #[test]
    fn clamped_index_row_major() {
        let grid = TerrainGrid::uniform(4, 0.0, 1e8, 1500.0).unwrap();
        assert_eq!(grid.clamped_index(0, 0), 0);
        assert_eq!(grid.clamped_index(1, 0), 4);
        assert_eq!(grid.clamped_index(1, 2), 6);
        assert_eq!(grid.clamped_index(3, 3), 15);
    }

    #[test]
    fn elevation_stats_uniform() {
        let grid = TerrainGrid::uniform(3, 250.0, 1e8, 1500.0).unwrap();
        let (min, max, mean, std) = grid.elevation_stats();
        assert_eq!(min, 250.0);
        assert_eq!(max, 250.0);
        assert_eq!(mean, 250.0);
        assert_eq!(std, 0.0);
    }
}
