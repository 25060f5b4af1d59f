//! Fixed-capacity ring of published snapshots.
//!
//! [`SnapshotRing`] is the handoff point between the driver thread and
//! observers: single-producer push, multi-consumer read. Readers never
//! block on the driver; `latest()` returns the most recently published
//! snapshot immediately.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::snapshot::SimSnapshot;

/// A fixed-capacity ring buffer of `Arc<SimSnapshot>`.
///
/// The write position is monotonically increasing (never wraps); the
/// slot index is `pos % capacity`. Once a snapshot has been published,
/// `latest()` always yields one: if the producer laps a reader between
/// the position load and the slot lock, the slot holds a snapshot newer
/// than the one the reader aimed for, which still satisfies the
/// most-recent contract.
pub struct SnapshotRing {
    slots: Vec<Mutex<Option<Arc<SimSnapshot>>>>,
    write_pos: AtomicU64,
    capacity: usize,
}

const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<SnapshotRing>();
};

impl SnapshotRing {
    /// Create a ring with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity < 2`; one slot being written plus one
    /// readable slot is the minimum useful configuration.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 2, "SnapshotRing capacity must be >= 2, got {capacity}");
        let slots = (0..capacity).map(|_| Mutex::new(None)).collect();
        Self {
            slots,
            write_pos: AtomicU64::new(0),
            capacity,
        }
    }

    /// Publish a snapshot. Single-producer only (the driver thread).
    pub fn push(&self, snapshot: SimSnapshot) {
        let pos = self.write_pos.load(Ordering::Relaxed);
        let slot_idx = (pos as usize) % self.capacity;

        {
            let mut slot = self.slots[slot_idx].lock().unwrap();
            *slot = Some(Arc::new(snapshot));
        }

        // Release-store so the snapshot contents are visible before
        // consumers observe the new write_pos.
        self.write_pos.store(pos + 1, Ordering::Release);
    }

    /// The most recently published snapshot, or `None` if nothing has
    /// been published yet.
    ///
    /// After the first `push` this always returns `Some`: the slot the
    /// position points at was filled before the position became
    /// visible, and a slot overwritten by a lapping producer holds an
    /// even newer snapshot.
    pub fn latest(&self) -> Option<Arc<SimSnapshot>> {
        let pos = self.write_pos.load(Ordering::Acquire);
        if pos == 0 {
            return None;
        }
        let slot = self.slots[((pos - 1) as usize) % self.capacity].lock().unwrap();
        slot.as_ref().map(Arc::clone)
    }

    /// The ring capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
