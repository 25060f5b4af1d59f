//! Core types for the Tremor marsquake simulation workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the terrain grid, quake events, the bounded log buffer, structure
//! status enums, error types, and the physical constants shared by the
//! physics, structures, and engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod constants;
pub mod error;
pub mod event;
pub mod log;
pub mod status;
pub mod terrain;

pub use error::GridError;
pub use event::{QuakeCategory, QuakeEvent, WaveKind};
pub use log::{LogBuffer, LogEntry, LogLevel};
pub use status::{HabitatStatus, RoverStatus, StructureKind, StructureReport};
pub use terrain::{CellProps, TerrainGrid};
