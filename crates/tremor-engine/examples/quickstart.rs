//! Tremor quickstart: a complete, minimal marsquake run from scratch.
//!
//! Demonstrates:
//!   1. Generating deterministic terrain and a quake catalog
//!   2. Building a WorldConfig and SeismicWorld
//!   3. Starting a run and polling snapshots while the driver ticks
//!   4. Reading structure status reports and the simulation log
//!   5. Stopping and shutting down
//!
//! Run with:
//!   cargo run --example quickstart

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tremor_core::StructureKind;
use tremor_datagen::{CatalogBuilder, TerrainBuilder};
use tremor_engine::{SeismicWorld, WorldConfig};

const GRID_SIZE: usize = 100;
const SEED: u64 = 42;

fn main() {
    // ─── 1. Deterministic inputs ────────────────────────────────
    let grid = Arc::new(
        TerrainBuilder::new(GRID_SIZE)
            .seed(SEED)
            .build()
            .expect("terrain generation"),
    );
    let (min, max, mean, std) = grid.elevation_stats();
    println!("terrain: {GRID_SIZE}x{GRID_SIZE}, elevation {min:.0}-{max:.0} m (mean {mean:.0}, std {std:.0})");

    let catalog = CatalogBuilder::new()
        .count(10)
        .seed(SEED)
        .build()
        .expect("catalog generation");
    let events: Vec<_> = catalog.values().cloned().collect();
    for event in &events[..3] {
        println!(
            "  {} M{:.2} ({}) at t={:.0}s depth {:.1} km",
            event.id, event.magnitude, event.category, event.timestamp, event.depth_km
        );
    }

    // ─── 2. World construction ──────────────────────────────────
    let mut config = WorldConfig::new(grid, events);
    config.tick_rate_hz = 50.0;
    let world = SeismicWorld::new(config).expect("world construction");

    // ─── 3. Run and observe ─────────────────────────────────────
    let snapshot = world.latest().expect("baseline snapshot");
    assert!(!snapshot.active);

    world.start(0).expect("start");
    println!("\nrun started");

    for _ in 0..10 {
        thread::sleep(Duration::from_millis(100));
        let snap = world.latest().expect("snapshot");
        println!(
            "t={:5.1}s  max amplitude {:8.3} mm  habitat {}  rover {}",
            snap.current_time, snap.max_amplitude, snap.habitat.status, snap.rover.status
        );
        if !snap.active {
            break;
        }
    }

    // ─── 4. Structure reports and log ───────────────────────────
    let habitat = world
        .structure_status(StructureKind::Habitat)
        .expect("habitat status");
    println!(
        "\n{}: {} (health {:.1}%) {}",
        habitat.kind, habitat.status, habitat.health_pct, habitat.recommendation
    );
    let rover = world
        .structure_status(StructureKind::Rover)
        .expect("rover status");
    println!(
        "{}: {} (tipping risk {:.0}%) {}",
        rover.kind,
        rover.status,
        rover.tipping_risk * 100.0,
        rover.recommendation
    );

    println!("\nrecent log:");
    for entry in world.recent_logs(5).expect("logs") {
        println!("  [{:6.1}s] {} {}", entry.sim_time, entry.level, entry.message);
    }

    // ─── 5. Shutdown ────────────────────────────────────────────
    world.stop().expect("stop");
    println!("\nstopped; dropping world joins the driver thread");
}
