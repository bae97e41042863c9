//! In-memory slot store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::task::ports::{SlotStore, SlotStoreError, SlotStoreResult, StorageSlot};

/// Thread-safe in-memory slot store.
///
/// Clones share the same underlying map, so a test can keep a handle and
/// inspect what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemorySlotStore {
    state: Arc<RwLock<HashMap<StorageSlot, String>>>,
}

impl InMemorySlotStore {
    /// Creates an empty in-memory slot store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with `value` already written to `slot`.
    #[must_use]
    pub fn seeded(slot: StorageSlot, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut state) = store.state.write() {
            state.insert(slot, value.into());
        }
        store
    }

    /// Returns `true` when `slot` holds a value.
    #[must_use]
    pub fn contains(&self, slot: StorageSlot) -> bool {
        self.state
            .read()
            .is_ok_and(|state| state.contains_key(&slot))
    }
}

fn poisoned(err: &impl fmt::Display) -> SlotStoreError {
    SlotStoreError::persistence(std::io::Error::other(err.to_string()))
}

impl SlotStore for InMemorySlotStore {
    fn get(&self, slot: StorageSlot) -> SlotStoreResult<Option<String>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.get(&slot).cloned())
    }

    fn set(&self, slot: StorageSlot, value: &str) -> SlotStoreResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        state.insert(slot, value.to_owned());
        Ok(())
    }
}
