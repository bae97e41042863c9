//! Adapter implementations of the task store ports.

pub mod fs;
pub mod log;
pub mod memory;

pub use fs::FsSlotStore;
pub use log::TracingNotifier;
