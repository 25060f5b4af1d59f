//! Published simulation snapshots.
//!
//! A [`SimSnapshot`] is the complete observable state after one tick
//! (or one control transition), built by the driver and published as a
//! unit. Readers only ever hold an `Arc<SimSnapshot>`, so they can
//! never see a field computed at one time paired with a clock from
//! another.

use std::time::Duration;

use tremor_core::{LogEntry, QuakeEvent, StructureReport};

/// Driver-side tick accounting carried in every snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Ticks executed since the world was created (across runs).
    pub tick_count: u64,
    /// Wall-clock duration of the most recent tick.
    pub last_tick: Duration,
}

/// One immutable, internally consistent view of the simulation.
#[derive(Clone, Debug)]
pub struct SimSnapshot {
    /// Whether a run was in progress when this snapshot was taken.
    pub active: bool,
    /// Simulated seconds since the current run started.
    pub current_time: f64,
    /// The event driving the current (or most recent) run.
    pub current_event: Option<QuakeEvent>,
    /// Cells per side of the wave field.
    pub grid_size: usize,
    /// Row-major wave field, mm. All zero outside a run.
    pub wave_field: Vec<f64>,
    /// Maximum absolute amplitude over the field, mm.
    pub max_amplitude: f64,
    /// Habitat status report.
    pub habitat: StructureReport,
    /// Rover status report.
    pub rover: StructureReport,
    /// Full retained log, oldest first.
    pub logs: Vec<LogEntry>,
    /// Driver tick accounting.
    pub stats: TickStats,
}

impl SimSnapshot {
    /// Amplitude at `(x, y)` in mm, coordinates clamped into bounds.
    pub fn amplitude_at(&self, x: i64, y: i64) -> f64 {
        let max = (self.grid_size - 1) as i64;
        let cx = x.clamp(0, max) as usize;
        let cy = y.clamp(0, max) as usize;
        self.wave_field[cx * self.grid_size + cy]
    }

    /// The last `limit` log entries, newest last.
    pub fn recent_logs(&self, limit: usize) -> &[LogEntry] {
        let skip = self.logs.len().saturating_sub(limit);
        &self.logs[skip..]
    }
}
