//! Tremor: a marsquake simulation engine.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Tremor sub-crates. For most users, adding `tremor` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use tremor::prelude::*;
//!
//! // Deterministic inputs: generated terrain and a quake catalog.
//! let grid = Arc::new(TerrainBuilder::new(100).seed(42).build().unwrap());
//! let events: Vec<QuakeEvent> = CatalogBuilder::new()
//!     .count(5)
//!     .seed(42)
//!     .build()
//!     .unwrap()
//!     .into_values()
//!     .collect();
//!
//! // Spawn the driver thread; queries work immediately.
//! let world = SeismicWorld::new(WorldConfig::new(grid, events)).unwrap();
//! assert!(!world.is_active().unwrap());
//! assert_eq!(world.max_amplitude().unwrap(), 0.0);
//!
//! // Start a run on the first catalog event and observe it.
//! world.start(0).unwrap();
//! assert!(world.is_active().unwrap());
//! world.stop().unwrap();
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `tremor-core` | Terrain grid, events, log buffer, statuses, constants |
//! | [`physics`] | `tremor-physics` | Wave field engine, smoothing, Mars environment |
//! | [`structures`] | `tremor-structures` | Habitat and rover response models |
//! | [`datagen`] | `tremor-datagen` | Seeded terrain and quake catalog generation |
//! | [`engine`] | `tremor-engine` | Driver thread, snapshot ring, world handle |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Terrain grid, quake events, log buffer, status enums, and physical
/// constants (`tremor-core`).
pub use tremor_core as core;

/// Wave propagation physics (`tremor-physics`).
///
/// [`physics::WaveFieldEngine`] computes the per-step amplitude field;
/// [`physics::MarsEnvironment`] models ambient planetary conditions.
pub use tremor_physics as physics;

/// Structural response models (`tremor-structures`).
///
/// [`structures::HabitatModel`] accumulates damage through an SDOF
/// elastic model; [`structures::RoverModel`] recomputes tipping risk
/// each step.
pub use tremor_structures as structures;

/// Deterministic synthetic data generation (`tremor-datagen`).
pub use tremor_datagen as datagen;

/// Simulation driver and world handle (`tremor-engine`).
///
/// [`engine::SeismicWorld`] runs the tick loop on a background thread
/// and publishes immutable snapshots for concurrent observers.
pub use tremor_engine as engine;

/// Common imports for typical Tremor usage.
///
/// ```rust
/// use tremor::prelude::*;
/// ```
pub mod prelude {
    // Core data types
    pub use tremor_core::{
        CellProps, LogBuffer, LogEntry, LogLevel, QuakeCategory, QuakeEvent, TerrainGrid,
        WaveKind,
    };

    // Statuses and reports
    pub use tremor_core::{HabitatStatus, RoverStatus, StructureKind, StructureReport};

    // Errors
    pub use tremor_core::GridError;
    pub use tremor_engine::{ConfigError, ControlError, QueryError};

    // Physics
    pub use tremor_physics::{arrival_time, MarsEnvironment, WaveFieldEngine};

    // Structures
    pub use tremor_structures::{HabitatModel, RoverModel, Structure};

    // Data generation
    pub use tremor_datagen::{CatalogBuilder, TerrainBuilder};

    // Engine
    pub use tremor_engine::{SeismicWorld, SimSnapshot, TickStats, WorldConfig};
}
