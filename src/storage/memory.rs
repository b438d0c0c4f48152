//! In-memory persistence backend
//!
//! Keeps the last saved state behind a mutex. Saves can be made to fail on
//! demand, which is how the store's all-or-nothing behaviour is tested.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use super::LedgerPersistence;
use crate::error::{TrackerError, TrackerResult};
use crate::models::StoreState;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    state: Mutex<Option<StoreState>>,
    fail_saves: AtomicBool,
    save_count: AtomicUsize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a previously saved state
    pub fn with_state(state: StoreState) -> Self {
        Self {
            state: Mutex::new(Some(state)),
            ..Self::default()
        }
    }

    /// Make subsequent saves fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }

    /// The last successfully saved state
    pub fn saved(&self) -> Option<StoreState> {
        self.state.lock().ok().and_then(|guard| guard.clone())
    }
}

impl LedgerPersistence for MemoryStorage {
    fn load(&self) -> TrackerResult<Option<StoreState>> {
        let guard = self
            .state
            .lock()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire lock: {}", e)))?;
        Ok(guard.clone())
    }

    fn save(&self, state: &StoreState) -> TrackerResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(TrackerError::Storage("simulated write failure".into()));
        }

        let mut guard = self
            .state
            .lock()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire lock: {}", e)))?;
        *guard = Some(state.clone());
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());

        storage.save(&StoreState::default()).unwrap();
        assert_eq!(storage.load().unwrap(), Some(StoreState::default()));
        assert_eq!(storage.save_count(), 1);
    }

    #[test]
    fn test_failing_saves_keep_previous_state() {
        let storage = MemoryStorage::with_state(StoreState::default());
        storage.set_fail_saves(true);

        let mut changed = StoreState::default();
        changed.transactions.clear();
        changed.categories.clear();
        assert!(storage.save(&changed).is_err());

        assert_eq!(storage.saved(), Some(StoreState::default()));
        assert_eq!(storage.save_count(), 0);
    }
}
