//! Benchmark profiles for the Tremor simulation workspace.
//!
//! Provides pre-built inputs shared by the benches:
//!
//! - [`reference_profile`]: 100x100 generated terrain with a 10-event
//!   catalog, the default deployment size.
//! - [`stress_profile`]: 316x316 terrain (~100K cells).

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::Arc;

use tremor_datagen::{CatalogBuilder, TerrainBuilder};
use tremor_engine::WorldConfig;

/// Build a reference benchmark profile: 100x100 terrain, 10 events.
pub fn reference_profile(seed: u64) -> WorldConfig {
    profile(100, seed)
}

/// Build a stress benchmark profile: 316x316 terrain (~100K cells).
pub fn stress_profile(seed: u64) -> WorldConfig {
    profile(316, seed)
}

fn profile(size: usize, seed: u64) -> WorldConfig {
    let grid = Arc::new(
        TerrainBuilder::new(size)
            .seed(seed)
            .build()
            .expect("benchmark terrain"),
    );
    let events = CatalogBuilder::new()
        .count(10)
        .seed(seed)
        .build()
        .expect("benchmark catalog")
        .into_values()
        .collect();
    WorldConfig::new(grid, events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_validates() {
        reference_profile(42).validate().unwrap();
    }

    #[test]
    fn stress_profile_validates() {
        stress_profile(42).validate().unwrap();
    }

    #[test]
    fn profiles_are_deterministic() {
        let a = reference_profile(42);
        let b = reference_profile(42);
        assert_eq!(a.grid.elevation(), b.grid.elevation());
        assert_eq!(a.events, b.events);
    }
}
