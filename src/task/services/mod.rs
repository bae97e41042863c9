//! Application services for the task store.

mod codec;
mod config;
mod store;

pub use codec::{DecodedTasks, SlotCodecError, decode_tasks, encode_tasks};
pub use config::{DEFAULT_RETENTION_DAYS, StoreConfig};
pub use store::TaskStore;
