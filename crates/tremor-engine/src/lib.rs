//! Simulation driver and world handle for the Tremor workspace.
//!
//! The engine ties the wave physics and structure evaluators into a
//! time-stepped run observed concurrently by many readers:
//!
//! - [`SimulationState`]: the single mutable record, owned by the
//!   driver thread.
//! - [`SnapshotRing`]: single-producer, multi-consumer publication of
//!   immutable [`SimSnapshot`]s.
//! - [`SeismicWorld`]: the user-facing handle: `start`/`stop` control
//!   and never-blocking snapshot queries.
//!
//! Readers always observe a complete post-tick state; a snapshot's wave
//! field, clock, and structure reports all come from the same tick.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
mod driver;
pub mod error;
pub mod ring;
pub mod snapshot;
pub mod state;
pub mod world;

pub use config::{ConfigError, WorldConfig};
pub use error::{ControlError, QueryError};
pub use ring::SnapshotRing;
pub use snapshot::{SimSnapshot, TickStats};
pub use state::SimulationState;
pub use world::SeismicWorld;
