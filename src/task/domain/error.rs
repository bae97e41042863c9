//! Error types for task domain validation, parsing, and board transformations.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task content is empty after trimming.
    #[error("task content must not be empty")]
    EmptyContent,
}

/// Error returned while parsing quadrants from persistence or user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown quadrant: {0}")]
pub struct ParseQuadrantError(pub String);

/// Reasons a board transformation leaves the board untouched.
///
/// The store treats every variant as a silent no-op; the variants exist so
/// that callers and tests can tell the cases apart.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// No active task carries the identifier.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The drop target refers to a task that is not active.
    #[error("drop target not found: {0}")]
    DropTargetNotFound(TaskId),

    /// A task was dropped onto itself.
    #[error("task {0} dropped onto itself")]
    SelfDrop(TaskId),

    /// The requested change would produce an identical board.
    #[error("board unchanged")]
    Unchanged,

    /// An update carried no fields to apply.
    #[error("update carries no changes")]
    EmptyUpdate,
}
