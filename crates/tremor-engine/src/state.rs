//! The single mutable simulation record.
//!
//! [`SimulationState`] owns the wave engine, both structure evaluators,
//! the clock, and the log buffer. It is held exclusively by the driver
//! thread; observers only ever see the [`SimSnapshot`]s it emits. The
//! state machine is Idle → Running → Stopped, with Stopped restartable
//! by another `start`.
//!
//! Per-tick computation never fails: every formula is total over its
//! clamped domain, so `tick` has no error path.

use std::sync::Arc;

use tremor_core::constants::LOG_INTERVAL;
use tremor_core::{LogBuffer, LogLevel, QuakeEvent, TerrainGrid};
use tremor_physics::WaveFieldEngine;
use tremor_structures::{HabitatModel, RoverModel, Structure};

use crate::config::WorldConfig;
use crate::error::ControlError;
use crate::snapshot::{SimSnapshot, TickStats};

/// Owns all mutable run state. Single writer, no interior mutability.
pub struct SimulationState {
    engine: WaveFieldEngine,
    habitat: Structure,
    rover: Structure,
    events: Vec<QuakeEvent>,
    epicenter: (usize, usize),
    sim_dt: f64,
    run_duration: f64,

    active: bool,
    current_time: f64,
    current_event: Option<QuakeEvent>,
    log: LogBuffer,
    last_log_time: f64,
    tick_count: u64,
}

impl SimulationState {
    /// Build the idle state from a validated configuration.
    pub fn new(config: &WorldConfig) -> Self {
        let habitat = Structure::Habitat(HabitatModel::standard(config.habitat_location));
        let rover = Structure::Rover {
            model: RoverModel::standard(config.rover_location),
            slope_deg: config.rover_slope_deg,
        };
        Self {
            engine: WaveFieldEngine::new(Arc::clone(&config.grid)),
            habitat,
            rover,
            events: config.events.clone(),
            epicenter: config.epicenter,
            sim_dt: config.sim_dt,
            run_duration: config.run_duration,
            active: false,
            current_time: 0.0,
            current_event: None,
            log: LogBuffer::new(config.log_capacity),
            last_log_time: 0.0,
            tick_count: 0,
        }
    }

    /// The terrain shared with the wave engine.
    pub fn grid(&self) -> &Arc<TerrainGrid> {
        self.engine.grid()
    }

    /// Whether a run is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Begin a run driven by `events[event_index]`.
    ///
    /// Resets the wave field, both evaluators, and the clock, then
    /// transitions to Running. Restarting from Stopped is allowed; a
    /// `start` while already Running rebases the run on the new event.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::InvalidEventReference`] if the index is
    /// outside the catalog. No state is mutated in that case.
    pub fn start(&mut self, event_index: usize) -> Result<(), ControlError> {
        let event = self
            .events
            .get(event_index)
            .cloned()
            .ok_or(ControlError::InvalidEventReference {
                index: event_index,
                catalog_len: self.events.len(),
            })?;

        self.engine.reset();
        self.habitat.reset();
        self.rover.reset();
        self.current_time = 0.0;
        self.last_log_time = 0.0;
        self.active = true;
        self.log.push(
            0.0,
            LogLevel::Event,
            format!(
                "Simulation started: event {} (M{:.2}, {})",
                event.id, event.magnitude, event.category
            ),
        );
        self.current_event = Some(event);
        Ok(())
    }

    /// Stop the run immediately. Safe to call from any state; stopping
    /// an idle world is a no-op.
    pub fn stop(&mut self) {
        if self.active {
            self.active = false;
            self.log.push(
                self.current_time,
                LogLevel::Info,
                format!("Simulation stopped at t={:.1}s", self.current_time),
            );
        }
    }

    /// Advance one tick of simulated time. Returns `true` if the state
    /// changed (a no-op outside a run).
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.current_time += self.sim_dt;
        self.tick_count += 1;

        if let Some(event) = self.current_event.clone() {
            self.engine.step(self.epicenter, &event, self.current_time);
        }

        let (hx, hy) = self.habitat.location();
        self.habitat
            .evaluate(self.engine.amplitude_at(i64::from(hx), i64::from(hy)));
        let (rx, ry) = self.rover.location();
        self.rover
            .evaluate(self.engine.amplitude_at(i64::from(rx), i64::from(ry)));

        // Tolerance absorbs accumulated dt rounding so the entry lands
        // on the nominal 5 s boundary, not one tick late.
        if self.current_time - self.last_log_time >= LOG_INTERVAL - 1e-9 {
            self.last_log_time = self.current_time;
            self.log.push(
                self.current_time,
                LogLevel::Info,
                format!(
                    "t={:.1}s max amplitude {:.3} mm",
                    self.current_time,
                    self.engine.max_amplitude()
                ),
            );
        }

        if self.current_time > self.run_duration {
            self.active = false;
            self.log.push(
                self.current_time,
                LogLevel::Info,
                format!("Simulation complete at t={:.1}s", self.current_time),
            );
        }
        true
    }

    /// Ticks executed since construction, across runs.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Build a complete observable snapshot of the current state.
    pub fn snapshot(&self, stats: TickStats) -> SimSnapshot {
        SimSnapshot {
            active: self.active,
            current_time: self.current_time,
            current_event: self.current_event.clone(),
            grid_size: self.engine.size(),
            wave_field: self.engine.field().to_vec(),
            max_amplitude: self.engine.max_amplitude(),
            habitat: self.habitat.report(),
            rover: self.rover.report(),
            logs: self.log.recent(self.log.capacity()),
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tremor_core::QuakeCategory;

    fn test_event(magnitude: f64) -> QuakeEvent {
        QuakeEvent::with_default_velocities(
            "M001".into(),
            0.0,
            magnitude,
            10.0,
            20.0,
            30.0,
            QuakeCategory::Major,
        )
    }

    fn state() -> SimulationState {
        let grid = Arc::new(TerrainGrid::uniform(100, 0.0, 1e8, 1500.0).unwrap());
        let cfg = WorldConfig::new(grid, vec![test_event(4.5)]);
        SimulationState::new(&cfg)
    }

    // ── Lifecycle ──────────────────────────────────────────────────

    #[test]
    fn idle_by_default() {
        let s = state();
        assert!(!s.is_active());
        let snap = s.snapshot(TickStats::default());
        assert!(!snap.active);
        assert_eq!(snap.current_time, 0.0);
        assert!(snap.current_event.is_none());
        assert_eq!(snap.max_amplitude, 0.0);
        assert!(snap.wave_field.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn start_with_bad_index_rejected_without_mutation() {
        let mut s = state();
        let err = s.start(5).unwrap_err();
        assert_eq!(
            err,
            ControlError::InvalidEventReference {
                index: 5,
                catalog_len: 1,
            }
        );
        assert!(!s.is_active());
        assert!(s.snapshot(TickStats::default()).logs.is_empty());
    }

    #[test]
    fn start_tick_stop_cycle() {
        let mut s = state();
        s.start(0).unwrap();
        assert!(s.is_active());

        assert!(s.tick());
        let snap = s.snapshot(TickStats::default());
        assert!((snap.current_time - 0.1).abs() < 1e-12);
        assert!(snap.active);
        assert!(snap.current_event.is_some());

        s.stop();
        assert!(!s.is_active());
        assert!(!s.tick(), "tick after stop must be a no-op");
        let last = s.snapshot(TickStats::default());
        assert!((last.current_time - 0.1).abs() < 1e-12);
    }

    #[test]
    fn stop_when_idle_is_noop() {
        let mut s = state();
        s.stop();
        assert!(s.snapshot(TickStats::default()).logs.is_empty());
    }

    #[test]
    fn auto_stops_past_duration() {
        let grid = Arc::new(TerrainGrid::uniform(100, 0.0, 1e8, 1500.0).unwrap());
        let mut cfg = WorldConfig::new(grid, vec![test_event(4.5)]);
        cfg.run_duration = 1.0;
        let mut s = SimulationState::new(&cfg);
        s.start(0).unwrap();

        let mut ticks = 0;
        while s.is_active() {
            s.tick();
            ticks += 1;
            assert!(ticks < 100, "run must auto-stop");
        }
        // 0.1 s per tick, stops once current_time exceeds 1.0 s.
        assert_eq!(ticks, 11);
        let snap = s.snapshot(TickStats::default());
        assert!(snap.logs.iter().any(|e| e.message.contains("complete")));
    }

    #[test]
    fn restart_resets_run_state() {
        let mut s = state();
        s.start(0).unwrap();
        for _ in 0..50 {
            s.tick();
        }
        let mid = s.snapshot(TickStats::default());
        assert!(mid.current_time > 0.0);

        s.start(0).unwrap();
        let fresh = s.snapshot(TickStats::default());
        assert_eq!(fresh.current_time, 0.0);
        assert_eq!(fresh.habitat.damage_level, 0.0);
        assert_eq!(fresh.rover.tipping_risk, 0.0);
        assert!(fresh.wave_field.iter().all(|&v| v == 0.0));
        // Tick count survives restarts.
        assert_eq!(s.tick_count(), 50);
    }

    // ── Tick semantics ─────────────────────────────────────────────

    #[test]
    fn wave_arrives_at_structures() {
        let mut s = state();
        s.start(0).unwrap();
        // Habitat sits at the epicenter cell (singularity guard keeps
        // it zero); the rover at (60,60) is ~141 m out, arriving at
        // ~0.047 s. By t=1.0 s both evaluators have been fed.
        for _ in 0..10 {
            s.tick();
        }
        let snap = s.snapshot(TickStats::default());
        assert!(snap.max_amplitude > 0.0);
        assert!(snap.rover.tipping_risk >= 0.0);
    }

    #[test]
    fn periodic_log_cadence() {
        let mut s = state();
        s.start(0).unwrap();
        for _ in 0..100 {
            s.tick();
        }
        // 10 s of sim time: periodic entries at 5 s and 10 s.
        let snap = s.snapshot(TickStats::default());
        let periodic: Vec<_> = snap
            .logs
            .iter()
            .filter(|e| e.message.contains("max amplitude"))
            .collect();
        assert_eq!(periodic.len(), 2);
        assert!((periodic[0].sim_time - 5.0).abs() < 1e-9);
        assert!((periodic[1].sim_time - 10.0).abs() < 1e-9);
    }

    #[test]
    fn habitat_damage_monotone_over_run() {
        let mut s = state();
        s.start(0).unwrap();
        let mut prev = 0.0;
        for _ in 0..200 {
            s.tick();
            let d = s.snapshot(TickStats::default()).habitat.damage_level;
            assert!(d >= prev);
            prev = d;
        }
    }

    // ── Determinism ────────────────────────────────────────────────

    #[test]
    fn identical_runs_bit_identical() {
        let run = || {
            let mut s = state();
            s.start(0).unwrap();
            for _ in 0..120 {
                s.tick();
            }
            s.snapshot(TickStats::default())
        };
        let a = run();
        let b = run();
        assert_eq!(a.wave_field, b.wave_field);
        assert_eq!(a.max_amplitude, b.max_amplitude);
        assert_eq!(a.habitat, b.habitat);
        assert_eq!(a.rover, b.rover);
        assert_eq!(a.current_time, b.current_time);
    }
}
