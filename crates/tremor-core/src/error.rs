//! Error types shared across the Tremor workspace.
//!
//! Subsystem-specific errors (world configuration, control, query) live
//! next to their subsystems in `tremor-engine`; this module holds the
//! construction-time errors for the core data types.

use std::error::Error;
use std::fmt;

/// Errors detected while constructing a [`TerrainGrid`](crate::TerrainGrid).
///
/// Construction failures are fatal at initialization: the rest of the
/// workspace assumes a structurally valid grid and never re-validates.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// Grid size is zero.
    EmptyGrid,
    /// A per-cell array has the wrong length for the declared size.
    LengthMismatch {
        /// Name of the offending array.
        name: &'static str,
        /// Expected length (`size * size`).
        expected: usize,
        /// Actual length supplied.
        actual: usize,
    },
    /// A rigidity value is non-positive or non-finite. Rigidity is used
    /// as a divisor and must be strictly positive everywhere.
    NonPositiveRigidity {
        /// Flat index of the first offending cell.
        cell_index: usize,
        /// The offending value.
        value: f64,
    },
    /// An elevation or density value is non-finite.
    NonFiniteCell {
        /// Name of the offending array.
        name: &'static str,
        /// Flat index of the first offending cell.
        cell_index: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid size must be at least 1"),
            Self::LengthMismatch {
                name,
                expected,
                actual,
            } => {
                write!(f, "{name} has length {actual}, expected {expected}")
            }
            Self::NonPositiveRigidity { cell_index, value } => {
                write!(f, "rigidity at cell {cell_index} must be > 0, got {value}")
            }
            Self::NonFiniteCell { name, cell_index } => {
                write!(f, "{name} at cell {cell_index} is not finite")
            }
        }
    }
}

impl Error for GridError {}
