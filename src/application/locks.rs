//! Per-event serialization for capacity accounting.
//!
//! Request creation and bulk status updates both read the confirmed count
//! and then write against it. Two such operations racing on the same event
//! could observe a stale count and jointly over-admit past the limit, so
//! each holds the event's lock for the whole read-then-write span. Locks
//! are keyed by event id; operations on unrelated events never contend.

use crate::domain::foundation::EventId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Keyed map of async mutexes, one per event.
///
/// Entries are created on first use and kept for the lifetime of the map;
/// the map is bounded by the number of distinct events this process has
/// moderated.
#[derive(Default)]
pub struct EventLockMap {
    locks: StdMutex<HashMap<EventId, Arc<Mutex<()>>>>,
}

impl EventLockMap {
    pub fn new() -> Self {
        Self {
            locks: StdMutex::new(HashMap::new()),
        }
    }

    /// Acquires the lock for one event, waiting if another operation on the
    /// same event holds it. The guard releases the lock on drop.
    pub async fn acquire(&self, event_id: EventId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self.locks.lock().expect("event lock map poisoned");
            map.entry(event_id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}
