//! Seismic wave propagation physics for the Tremor workspace.
//!
//! [`WaveFieldEngine`] computes the instantaneous ground-motion
//! amplitude at every terrain cell for a selected quake event at an
//! absolute elapsed time. The field is memoryless: each step is a
//! closed-form function of `(event, elapsed_time)`, not an integration
//! of the previous field, which keeps runs bit-for-bit deterministic.
//!
//! [`environment`] carries the ambient Mars conditions (gravity,
//! temperature profile, Q-factor attenuation) for depth-dependent
//! propagation queries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod environment;
pub mod smoothing;
pub mod wave;

pub use environment::MarsEnvironment;
pub use wave::{arrival_time, WaveFieldEngine};
