//! Control and query error types.

use std::error::Error;
use std::fmt;

/// Error from a control operation (`start` / `stop`).
#[derive(Debug, PartialEq, Eq)]
pub enum ControlError {
    /// `start` referenced an event index outside the configured catalog.
    /// No state was mutated.
    InvalidEventReference {
        /// The rejected index.
        index: usize,
        /// Number of events in the catalog.
        catalog_len: usize,
    },
    /// The driver thread has shut down.
    Shutdown,
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEventReference { index, catalog_len } => {
                write!(
                    f,
                    "event index {index} out of range for catalog of {catalog_len}"
                )
            }
            Self::Shutdown => write!(f, "driver thread has shut down"),
        }
    }
}

impl Error for ControlError {}

/// Error from a snapshot query.
#[derive(Debug, PartialEq, Eq)]
pub enum QueryError {
    /// No snapshot has been published yet.
    NotInitialized,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "no snapshot has been published yet"),
        }
    }
}

impl Error for QueryError {}
