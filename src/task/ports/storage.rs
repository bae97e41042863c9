//! Key-value storage port for persisting task collections as text.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for slot storage operations.
pub type SlotStoreResult<T> = Result<T, SlotStoreError>;

/// Named storage slots holding one task collection each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StorageSlot {
    /// Active tasks in drag order.
    Tasks,
    /// Completed tasks awaiting expiry.
    CompletedTasks,
}

impl StorageSlot {
    /// Every slot, in load order.
    pub const ALL: [Self; 2] = [Self::Tasks, Self::CompletedTasks];

    /// Returns the storage key of the slot.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::CompletedTasks => "completedTasks",
        }
    }
}

impl fmt::Display for StorageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Durable text storage addressed by slot.
///
/// Implementations behave like a browser's local storage: a slot either holds
/// the last string written to it or is absent.
pub trait SlotStore: Send + Sync {
    /// Reads the text stored in `slot`.
    ///
    /// Returns `None` when nothing has been written to the slot.
    ///
    /// # Errors
    ///
    /// Returns [`SlotStoreError::Persistence`] when the backing store cannot
    /// be read.
    fn get(&self, slot: StorageSlot) -> SlotStoreResult<Option<String>>;

    /// Replaces the text stored in `slot`.
    ///
    /// # Errors
    ///
    /// Returns [`SlotStoreError::Persistence`] when the backing store cannot
    /// be written.
    fn set(&self, slot: StorageSlot, value: &str) -> SlotStoreResult<()>;
}

/// Errors returned by slot storage implementations.
#[derive(Debug, Clone, Error)]
pub enum SlotStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SlotStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
