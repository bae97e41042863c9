//! Port contracts for the task store.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod notifier;
pub mod storage;

pub use notifier::{Notice, Notifier};
pub use storage::{SlotStore, SlotStoreError, SlotStoreResult, StorageSlot};
