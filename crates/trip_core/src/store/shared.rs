//! Thread-shareable handle over one `TripStore`.
//!
//! # Invariants
//! - One lock guards all four collections.
//! - The lock is held for exactly one closure call; closures must not call
//!   back into the same handle.

use super::trip_store::TripStore;
use log::warn;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable handle for callers that touch the store from several threads.
#[derive(Debug, Clone)]
pub struct SharedTripStore {
    inner: Arc<Mutex<TripStore>>,
}

impl SharedTripStore {
    pub fn new(store: TripStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Runs one read-only operation under the lock.
    pub fn read<R>(&self, op: impl FnOnce(&TripStore) -> R) -> R {
        op(&self.lock())
    }

    /// Runs one mutating operation under the lock.
    pub fn write<R>(&self, op: impl FnOnce(&mut TripStore) -> R) -> R {
        op(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, TripStore> {
        // Writes are append-or-replace, so a poisoned guard still holds
        // structurally valid collections.
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("event=store_lock module=store status=recovered");
            poisoned.into_inner()
        })
    }
}

impl Default for SharedTripStore {
    fn default() -> Self {
        Self::new(TripStore::default())
    }
}
