//! Storage layer for fintrack
//!
//! The ledger store does not know where its state lives; it is handed a
//! [`LedgerPersistence`] implementation. Two are provided:
//!
//! - [`JsonFileStorage`]: a single JSON blob on disk, written atomically
//! - [`MemoryStorage`]: an in-memory backend for tests and embedding

pub mod file_io;
pub mod json_file;
pub mod memory;

pub use file_io::{read_json_optional, write_json_atomic};
pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::error::TrackerResult;
use crate::models::StoreState;

/// Capability for loading and saving the full store state
pub trait LedgerPersistence {
    /// Load the last saved state, or `None` if nothing has been saved yet
    fn load(&self) -> TrackerResult<Option<StoreState>>;

    /// Durably save the full state. On error nothing may be partially applied.
    fn save(&self, state: &StoreState) -> TrackerResult<()>;
}

impl<P: LedgerPersistence + ?Sized> LedgerPersistence for &P {
    fn load(&self) -> TrackerResult<Option<StoreState>> {
        (**self).load()
    }

    fn save(&self, state: &StoreState) -> TrackerResult<()> {
        (**self).save(state)
    }
}

impl<P: LedgerPersistence + ?Sized> LedgerPersistence for Box<P> {
    fn load(&self) -> TrackerResult<Option<StoreState>> {
        (**self).load()
    }

    fn save(&self, state: &StoreState) -> TrackerResult<()> {
        (**self).save(state)
    }
}
