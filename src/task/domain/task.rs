//! Task entity and partial updates.

use super::{Quadrant, TaskContent, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single task.
///
/// Tasks are immutable values: every change produces a new `Task` that
/// replaces the previous one on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    content: TaskContent,
    quadrant: Quadrant,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted content.
    pub content: TaskContent,
    /// Persisted quadrant.
    pub quadrant: Quadrant,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new active task stamped with the current clock time.
    #[must_use]
    pub fn new(content: TaskContent, quadrant: Quadrant, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            content,
            quadrant,
            created_at: clock.utc(),
            completed_at: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            content: data.content,
            quadrant: data.quadrant,
            created_at: data.created_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task content.
    #[must_use]
    pub const fn content(&self) -> &TaskContent {
        &self.content
    }

    /// Returns the quadrant.
    #[must_use]
    pub const fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, present only on completed tasks.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns a copy with `update` applied.
    #[must_use]
    pub fn updated(&self, update: &TaskUpdate) -> Self {
        let mut next = self.clone();
        if let Some(content) = &update.content {
            next.content = content.clone();
        }
        next
    }

    /// Returns a copy reassigned to `quadrant`.
    #[must_use]
    pub fn in_quadrant(&self, quadrant: Quadrant) -> Self {
        Self {
            quadrant,
            ..self.clone()
        }
    }

    /// Returns a copy stamped as completed at `at`.
    #[must_use]
    pub fn completed(&self, at: DateTime<Utc>) -> Self {
        Self {
            completed_at: Some(at),
            ..self.clone()
        }
    }

    /// Drops any completion timestamp, for records found in the active slot.
    #[must_use]
    pub fn into_active(self) -> Self {
        Self {
            completed_at: None,
            ..self
        }
    }
}

/// Subset of task fields to replace during an edit.
///
/// Quadrant is deliberately absent: moving a task is a drag operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    content: Option<TaskContent>,
}

impl TaskUpdate {
    /// Creates an empty update.
    #[must_use]
    pub const fn new() -> Self {
        Self { content: None }
    }

    /// Creates an update replacing the content with `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyContent`] when `raw` is blank.
    pub fn content(raw: impl AsRef<str>) -> Result<Self, TaskDomainError> {
        Ok(Self::new().with_content(TaskContent::new(raw)?))
    }

    /// Sets the replacement content.
    #[must_use]
    pub fn with_content(mut self, content: TaskContent) -> Self {
        self.content = Some(content);
        self
    }

    /// Returns the replacement content, if any.
    #[must_use]
    pub const fn new_content(&self) -> Option<&TaskContent> {
        self.content.as_ref()
    }

    /// Returns `true` when the update carries no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}
