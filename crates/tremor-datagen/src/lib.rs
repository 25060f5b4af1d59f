//! Deterministic synthetic data generation.
//!
//! Two generators feed the simulation with reproducible inputs:
//!
//! - [`TerrainBuilder`]: fractal value-noise height map with derived
//!   soil rigidity and density, producing an immutable
//!   [`tremor_core::TerrainGrid`].
//! - [`CatalogBuilder`]: a quake catalog following InSight-era
//!   magnitude statistics, keyed by event id in chronological order.
//!
//! Both derive every random value from a caller-supplied seed; the same
//! seed always yields bit-identical output.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod terrain;

pub use catalog::CatalogBuilder;
pub use terrain::TerrainBuilder;
