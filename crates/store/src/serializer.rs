//! Write serialization for load-modify-save cycles.

use tokio::sync::{Mutex, MutexGuard};

/// Serializes mutating cycles on one backing file.
///
/// Every mutation is a full read-modify-write of the collection; two such
/// cycles interleaving would let the second writer overwrite the first
/// writer's change (the lost-update hazard). Holding a [`WritePermit`] for
/// the whole cycle guarantees at most one in-flight cycle per store.
///
/// Read-only operations bypass the serializer entirely; atomic file
/// replacement keeps them from ever observing a torn write.
#[derive(Debug, Default)]
pub struct WriteSerializer {
    lock: Mutex<()>,
}

impl WriteSerializer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive write access to the collection.
    ///
    /// Waiters are queued; nothing blocks indefinitely as long as permits
    /// are dropped at the end of each cycle.
    pub async fn acquire(&self) -> WritePermit<'_> {
        WritePermit {
            _guard: self.lock.lock().await,
        }
    }
}

/// Proof of exclusive write access. The cycle ends when this is dropped.
#[derive(Debug)]
pub struct WritePermit<'a> {
    _guard: MutexGuard<'a, ()>,
}
