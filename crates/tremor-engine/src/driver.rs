//! Driver thread: the sole writer of simulation state.
//!
//! The driver owns [`SimulationState`] exclusively (moved in via
//! `thread::spawn`). Control requests arrive on a bounded crossbeam
//! channel with per-request reply channels; after every tick or control
//! transition the driver publishes a fresh snapshot to the ring, so a
//! caller that has received a control reply is guaranteed the
//! transition is already observable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};

use crate::error::ControlError;
use crate::ring::SnapshotRing;
use crate::snapshot::TickStats;
use crate::state::SimulationState;

/// A control request from a user thread, paired with its reply channel.
pub(crate) enum ControlRequest {
    /// Begin a run on the given catalog index.
    Start {
        /// Index into the configured event catalog.
        event_index: usize,
        /// Receives the outcome once the driver has applied (or
        /// rejected) the transition.
        reply: Sender<Result<(), ControlError>>,
    },
    /// Stop the current run.
    Stop {
        /// Signalled once no further ticks can mutate state.
        reply: Sender<()>,
    },
}

/// State held by the driver thread's main loop.
pub(crate) struct Driver {
    state: SimulationState,
    ring: Arc<SnapshotRing>,
    ctrl_rx: Receiver<ControlRequest>,
    shutdown: Arc<AtomicBool>,
    tick_budget: Duration,
    last_tick: Duration,
}

impl Driver {
    pub fn new(
        state: SimulationState,
        ring: Arc<SnapshotRing>,
        ctrl_rx: Receiver<ControlRequest>,
        shutdown: Arc<AtomicBool>,
        tick_rate_hz: f64,
    ) -> Self {
        Self {
            state,
            ring,
            ctrl_rx,
            shutdown,
            tick_budget: Duration::from_secs_f64(1.0 / tick_rate_hz),
            last_tick: Duration::ZERO,
        }
    }

    /// Main loop. Runs until the shutdown flag is set.
    pub fn run(mut self) {
        loop {
            if self.shutdown.load(Ordering::Acquire) {
                break;
            }

            let loop_start = Instant::now();

            // 1. Apply pending control requests, publishing after each
            //    so the transition is visible before the reply lands.
            self.drain_control_channel();

            // 2. Advance the run, if one is active.
            if self.state.is_active() {
                let tick_start = Instant::now();
                self.state.tick();
                self.last_tick = tick_start.elapsed();
                self.publish();
            }

            // 3. Sleep for the remaining wall-clock budget. An idle
            //    world parks here too, staying responsive to control.
            if let Some(remaining) = self.tick_budget.checked_sub(loop_start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
    }

    fn drain_control_channel(&mut self) {
        while let Ok(request) = self.ctrl_rx.try_recv() {
            match request {
                ControlRequest::Start { event_index, reply } => {
                    let outcome = self.state.start(event_index);
                    if outcome.is_ok() {
                        self.publish();
                    }
                    // Best-effort reply. The caller may have given up.
                    let _ = reply.send(outcome);
                }
                ControlRequest::Stop { reply } => {
                    self.state.stop();
                    self.publish();
                    let _ = reply.send(());
                }
            }
        }
    }

    fn publish(&self) {
        let stats = TickStats {
            tick_count: self.state.tick_count(),
            last_tick: self.last_tick,
        };
        self.ring.push(self.state.snapshot(stats));
    }
}
