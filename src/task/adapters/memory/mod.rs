//! In-memory adapters.

mod notifier;
mod slot_store;

pub use notifier::RecordingNotifier;
pub use slot_store::InMemorySlotStore;
