//! JSON encoding of task collections for slot storage.
//!
//! A slot holds a JSON array of task records using camelCase field names and
//! RFC 3339 timestamps, e.g.
//! `[{"id":"...","content":"Write report","quadrant":"do-first","createdAt":"..."}]`.
//! Decoding is record-tolerant: one corrupt record does not cost the rest of
//! the collection.

use crate::task::domain::Task;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while encoding or decoding a slot.
#[derive(Debug, Error)]
pub enum SlotCodecError {
    /// The task collection could not be serialised.
    #[error("failed to encode tasks: {0}")]
    Encode(#[source] serde_json::Error),

    /// The slot text is not a JSON array.
    #[error("failed to decode slot: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Tasks recovered from a slot, with a count of records that were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedTasks {
    /// Records that decoded into valid tasks, in stored order.
    pub tasks: Vec<Task>,
    /// Number of records that were not valid tasks.
    pub skipped: usize,
}

/// Encodes `tasks` as slot text.
///
/// # Errors
///
/// Returns [`SlotCodecError::Encode`] when serialisation fails.
pub fn encode_tasks(tasks: &[Task]) -> Result<String, SlotCodecError> {
    serde_json::to_string(tasks).map_err(SlotCodecError::Encode)
}

/// Decodes slot text into tasks, skipping malformed records.
///
/// # Errors
///
/// Returns [`SlotCodecError::Decode`] when `text` is not a JSON array.
pub fn decode_tasks(text: &str) -> Result<DecodedTasks, SlotCodecError> {
    let records: Vec<Value> = serde_json::from_str(text).map_err(SlotCodecError::Decode)?;
    let total = records.len();
    let tasks: Vec<Task> = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Task>(record) {
            Ok(task) => Some(task),
            Err(err) => {
                tracing::warn!(error = %err, "skipping malformed task record");
                None
            }
        })
        .collect();
    let skipped = total.saturating_sub(tasks.len());
    Ok(DecodedTasks { tasks, skipped })
}
