//! Drag-and-drop targets and placement policy.

use super::{Quadrant, TaskId};

/// What a dragged task was released over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// A quadrant container, typically an empty list.
    Quadrant(Quadrant),
    /// Another task; its quadrant and position decide the destination.
    Task(TaskId),
}

impl From<Quadrant> for DropTarget {
    fn from(value: Quadrant) -> Self {
        Self::Quadrant(value)
    }
}

impl From<TaskId> for DropTarget {
    fn from(value: TaskId) -> Self {
        Self::Task(value)
    }
}

/// Where a moved task lands inside its destination quadrant.
///
/// A store applies one policy for its whole lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Append to the end of the active collection, which renders as the end
    /// of the destination quadrant. The destination index is ignored.
    #[default]
    EndOfQuadrant,
    /// Insert before the task currently at the destination index within the
    /// destination quadrant, clamping to the end of the group.
    AtIndex,
}
