//! User-facing world handle.
//!
//! [`SeismicWorld`] spawns the driver thread and exposes the read and
//! control surface: snapshot queries return immediately with the most
//! recently published state, and `start`/`stop` round-trip through the
//! driver's control channel so the caller observes the transition as
//! soon as the call returns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;

use tremor_core::{LogEntry, StructureKind, StructureReport};

use crate::config::{ConfigError, WorldConfig};
use crate::driver::{ControlRequest, Driver};
use crate::error::{ControlError, QueryError};
use crate::ring::SnapshotRing;
use crate::snapshot::{SimSnapshot, TickStats};

/// A running simulation world.
///
/// The driver thread is the sole writer; this handle (clonable across
/// threads via `Arc`) only reads published snapshots and submits
/// control requests. Dropping the handle shuts the driver down and
/// joins it.
pub struct SeismicWorld {
    ring: Arc<SnapshotRing>,
    ctrl_tx: Option<Sender<ControlRequest>>,
    shutdown: Arc<AtomicBool>,
    driver_thread: Option<JoinHandle<()>>,
}

impl SeismicWorld {
    /// Validate the configuration, publish a baseline snapshot, and
    /// spawn the driver thread.
    ///
    /// The baseline snapshot is published before the thread starts, so
    /// every query has a well-defined answer from the moment this
    /// returns, even before any run.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let state = crate::state::SimulationState::new(&config);
        let ring = Arc::new(SnapshotRing::new(config.ring_capacity));
        ring.push(state.snapshot(TickStats::default()));

        let shutdown = Arc::new(AtomicBool::new(false));
        let (ctrl_tx, ctrl_rx) = crossbeam_channel::bounded(16);

        let driver_ring = Arc::clone(&ring);
        let driver_shutdown = Arc::clone(&shutdown);
        let tick_rate_hz = config.tick_rate_hz;
        let driver_thread = thread::Builder::new()
            .name("tremor-driver".into())
            .spawn(move || {
                Driver::new(state, driver_ring, ctrl_rx, driver_shutdown, tick_rate_hz).run();
            })
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: e.to_string(),
            })?;

        Ok(Self {
            ring,
            ctrl_tx: Some(ctrl_tx),
            shutdown,
            driver_thread: Some(driver_thread),
        })
    }

    // ── Control operations ─────────────────────────────────────────

    /// Begin a run on catalog index `event_index`.
    ///
    /// Blocks until the driver has applied the transition; on return the
    /// published snapshot already reflects the new run.
    ///
    /// # Errors
    ///
    /// [`ControlError::InvalidEventReference`] if the index is outside
    /// the catalog (no state mutated), [`ControlError::Shutdown`] if
    /// the driver is gone.
    pub fn start(&self, event_index: usize) -> Result<(), ControlError> {
        let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
        self.send(ControlRequest::Start {
            event_index,
            reply: reply_tx,
        })?;
        reply_rx.recv().map_err(|_| ControlError::Shutdown)?
    }

    /// Stop the current run.
    ///
    /// Blocks until the driver has applied the stop; once this returns,
    /// no further tick will mutate state until the next `start`.
    pub fn stop(&self) -> Result<(), ControlError> {
        let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
        self.send(ControlRequest::Stop { reply: reply_tx })?;
        reply_rx.recv().map_err(|_| ControlError::Shutdown)
    }

    fn send(&self, request: ControlRequest) -> Result<(), ControlError> {
        let tx = self.ctrl_tx.as_ref().ok_or(ControlError::Shutdown)?;
        tx.send(request).map_err(|_| ControlError::Shutdown)
    }

    // ── Snapshot queries ───────────────────────────────────────────

    /// The most recently published snapshot. Never blocks on the
    /// driver.
    ///
    /// # Errors
    ///
    /// [`QueryError::NotInitialized`] only if no snapshot has ever been
    /// published, which cannot happen for a world built by [`Self::new`].
    pub fn latest(&self) -> Result<Arc<SimSnapshot>, QueryError> {
        self.ring.latest().ok_or(QueryError::NotInitialized)
    }

    /// The current wave field, row-major, mm. All-zero outside a run.
    pub fn current_wave_field(&self) -> Result<Vec<f64>, QueryError> {
        Ok(self.latest()?.wave_field.clone())
    }

    /// Amplitude at `(x, y)` in mm, coordinates clamped into bounds.
    pub fn amplitude_at(&self, x: i64, y: i64) -> Result<f64, QueryError> {
        Ok(self.latest()?.amplitude_at(x, y))
    }

    /// Maximum absolute amplitude over the field, mm.
    pub fn max_amplitude(&self) -> Result<f64, QueryError> {
        Ok(self.latest()?.max_amplitude)
    }

    /// Status report for the given structure.
    pub fn structure_status(&self, which: StructureKind) -> Result<StructureReport, QueryError> {
        let snap = self.latest()?;
        Ok(match which {
            StructureKind::Habitat => snap.habitat.clone(),
            StructureKind::Rover => snap.rover.clone(),
        })
    }

    /// The last `limit` log entries, newest last.
    pub fn recent_logs(&self, limit: usize) -> Result<Vec<LogEntry>, QueryError> {
        Ok(self.latest()?.recent_logs(limit).to_vec())
    }

    /// Whether a run is in progress.
    pub fn is_active(&self) -> Result<bool, QueryError> {
        Ok(self.latest()?.active)
    }

    /// Simulated seconds since the current run started.
    pub fn current_time(&self) -> Result<f64, QueryError> {
        Ok(self.latest()?.current_time)
    }
}

impl Drop for SeismicWorld {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Release);
        // Closing the channel wakes the driver out of any blocked send
        // path and lets pending callers observe Shutdown.
        self.ctrl_tx.take();
        if let Some(handle) = self.driver_thread.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tremor_core::{QuakeCategory, QuakeEvent, TerrainGrid};

    fn world() -> SeismicWorld {
        let grid = Arc::new(TerrainGrid::uniform(100, 0.0, 1e8, 1500.0).unwrap());
        let event = QuakeEvent::with_default_velocities(
            "M001".into(),
            0.0,
            4.5,
            10.0,
            20.0,
            30.0,
            QuakeCategory::Major,
        );
        let mut cfg = WorldConfig::new(grid, vec![event]);
        cfg.tick_rate_hz = 1000.0;
        SeismicWorld::new(cfg).unwrap()
    }

    #[test]
    fn queries_have_defaults_before_any_run() {
        let w = world();
        assert!(!w.is_active().unwrap());
        assert_eq!(w.current_time().unwrap(), 0.0);
        assert_eq!(w.max_amplitude().unwrap(), 0.0);
        assert_eq!(w.amplitude_at(-3, 500).unwrap(), 0.0);
        assert!(w.current_wave_field().unwrap().iter().all(|&v| v == 0.0));
        assert!(w.recent_logs(10).unwrap().is_empty());

        let habitat = w.structure_status(StructureKind::Habitat).unwrap();
        assert_eq!(habitat.status, "SAFE");
        assert_eq!(habitat.health_pct, 100.0);
        let rover = w.structure_status(StructureKind::Rover).unwrap();
        assert_eq!(rover.status, "STABLE");
    }

    #[test]
    fn start_is_visible_on_return() {
        let w = world();
        w.start(0).unwrap();
        assert!(w.is_active().unwrap());
        let snap = w.latest().unwrap();
        assert_eq!(snap.current_event.as_ref().unwrap().id, "M001");
    }

    #[test]
    fn start_rejects_bad_index() {
        let w = world();
        let err = w.start(9).unwrap_err();
        assert_eq!(
            err,
            ControlError::InvalidEventReference {
                index: 9,
                catalog_len: 1,
            }
        );
        assert!(!w.is_active().unwrap());
    }

    #[test]
    fn stop_quiesces() {
        let w = world();
        w.start(0).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
        w.stop().unwrap();
        assert!(!w.is_active().unwrap());

        // No further ticks after stop returned.
        let t1 = w.current_time().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
        let t2 = w.current_time().unwrap();
        assert_eq!(t1, t2);
    }

    #[test]
    fn stop_when_idle_is_safe() {
        let w = world();
        w.stop().unwrap();
        assert!(!w.is_active().unwrap());
    }

    #[test]
    fn drop_joins_driver() {
        let w = world();
        w.start(0).unwrap();
        drop(w);
    }
}
