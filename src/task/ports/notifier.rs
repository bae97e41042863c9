//! Notification port for user-facing confirmation signals.

use crate::task::domain::Quadrant;
use std::fmt;

/// A confirmation message shown to the user after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A task was added.
    Added,
    /// A task's content was edited.
    Updated,
    /// A task was deleted.
    Deleted,
    /// A task was completed.
    Completed,
    /// A task was dragged into a quadrant.
    Moved(Quadrant),
}

impl Notice {
    /// Returns the user-facing message text.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Added => "Task added successfully".to_owned(),
            Self::Updated => "Task updated successfully".to_owned(),
            Self::Deleted => "Task deleted".to_owned(),
            Self::Completed => "Task completed".to_owned(),
            Self::Moved(quadrant) => format!("Task moved to {}", quadrant.display_label()),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Receiver of confirmation notices, typically a toast renderer.
pub trait Notifier: Send + Sync {
    /// Delivers `notice` to the user.
    fn notify(&self, notice: &Notice);
}
