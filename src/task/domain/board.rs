//! Immutable snapshot of the active and completed collections.
//!
//! Every transformation borrows the current board and returns a new one, so
//! a caller can swap snapshots atomically or discard a rejected change.

use super::{BoardError, DropTarget, Placement, Quadrant, QuadrantStats, Task, TaskId, TaskUpdate};
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashSet;

/// Result type for board transformations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Resolved destination of a drag-and-drop gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDestination {
    /// Quadrant the task is reassigned to.
    pub quadrant: Quadrant,
    /// Position within the destination quadrant's group.
    pub index: usize,
}

/// Active and completed tasks at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskBoard {
    active: Vec<Task>,
    completed: Vec<Task>,
}

impl TaskBoard {
    /// Creates an empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            active: Vec::new(),
            completed: Vec::new(),
        }
    }

    /// Builds a board from loaded collections, restoring its invariants.
    ///
    /// Duplicate ids within a collection keep their first occurrence. An id
    /// present in both collections is kept only as completed. Active records
    /// lose any completion timestamp.
    #[must_use]
    pub fn from_collections(active_records: Vec<Task>, completed_records: Vec<Task>) -> Self {
        let completed = dedup_by_id(completed_records);
        let completed_ids: HashSet<TaskId> = completed.iter().map(Task::id).collect();
        let active = dedup_by_id(active_records)
            .into_iter()
            .filter(|task| !completed_ids.contains(&task.id()))
            .map(Task::into_active)
            .collect();
        Self { active, completed }
    }

    /// Returns active tasks in drag order.
    #[must_use]
    pub fn active(&self) -> &[Task] {
        &self.active
    }

    /// Returns completed tasks in completion order.
    #[must_use]
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Iterates the active tasks of one quadrant in drag order.
    pub fn in_quadrant(&self, quadrant: Quadrant) -> impl Iterator<Item = &Task> + '_ {
        self.active
            .iter()
            .filter(move |task| task.quadrant() == quadrant)
    }

    /// Finds an active task.
    #[must_use]
    pub fn find_active(&self, id: TaskId) -> Option<&Task> {
        self.active.iter().find(|task| task.id() == id)
    }

    /// Finds a completed task.
    #[must_use]
    pub fn find_completed(&self, id: TaskId) -> Option<&Task> {
        self.completed.iter().find(|task| task.id() == id)
    }

    /// Counts active tasks per quadrant.
    #[must_use]
    pub fn stats(&self) -> QuadrantStats {
        QuadrantStats::from_tasks(&self.active)
    }

    /// Returns a board with `task` appended to the active collection.
    #[must_use]
    pub fn with_added(&self, task: Task) -> Self {
        let mut active = self.active.clone();
        active.push(task);
        Self {
            active,
            completed: self.completed.clone(),
        }
    }

    /// Returns a board with `update` applied to the active task `id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyUpdate`] for an update without fields,
    /// [`BoardError::TaskNotFound`] when `id` is not active, and
    /// [`BoardError::Unchanged`] when the update matches the current values.
    pub fn with_edit(&self, id: TaskId, update: &TaskUpdate) -> BoardResult<Self> {
        if update.is_empty() {
            return Err(BoardError::EmptyUpdate);
        }
        let position = self.active_position(id)?;
        let active: Vec<Task> = self
            .active
            .iter()
            .enumerate()
            .map(|(index, task)| {
                if index == position {
                    task.updated(update)
                } else {
                    task.clone()
                }
            })
            .collect();
        self.replacing_active(active)
    }

    /// Returns a board without the active task `id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] when `id` is not active.
    pub fn without(&self, id: TaskId) -> BoardResult<Self> {
        let mut active = self.active.clone();
        let position = self.active_position(id)?;
        active.remove(position);
        Ok(Self {
            active,
            completed: self.completed.clone(),
        })
    }

    /// Returns a board with the active task `id` moved to the completed
    /// collection, stamped with `at`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] when `id` is not active.
    pub fn with_completed(&self, id: TaskId, at: DateTime<Utc>) -> BoardResult<Self> {
        let mut active = self.active.clone();
        let position = self.active_position(id)?;
        let task = active.remove(position);
        let mut completed = self.completed.clone();
        completed.push(task.completed(at));
        Ok(Self { active, completed })
    }

    /// Works out where a drop on `target` sends the active task `id`.
    ///
    /// Dropping on a quadrant container aims past the last task of that
    /// quadrant. Dropping on a sibling aims at the sibling's position in its
    /// own quadrant.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SelfDrop`] when `target` is the task itself,
    /// [`BoardError::TaskNotFound`] when `id` is not active, and
    /// [`BoardError::DropTargetNotFound`] when the sibling is not active.
    pub fn resolve_drop(&self, id: TaskId, target: DropTarget) -> BoardResult<MoveDestination> {
        if target == DropTarget::Task(id) {
            return Err(BoardError::SelfDrop(id));
        }
        self.active_position(id)?;
        match target {
            DropTarget::Quadrant(quadrant) => Ok(MoveDestination {
                quadrant,
                index: self.in_quadrant(quadrant).count(),
            }),
            DropTarget::Task(sibling_id) => {
                let sibling = self
                    .find_active(sibling_id)
                    .ok_or(BoardError::DropTargetNotFound(sibling_id))?;
                let quadrant = sibling.quadrant();
                let index = self
                    .in_quadrant(quadrant)
                    .position(|task| task.id() == sibling_id)
                    .unwrap_or_default();
                Ok(MoveDestination { quadrant, index })
            }
        }
    }

    /// Returns a board with the active task `id` reassigned to
    /// `destination.quadrant` and repositioned according to `placement`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] when `id` is not active and
    /// [`BoardError::Unchanged`] when every quadrant renders the same tasks
    /// in the same order as before.
    pub fn with_moved(
        &self,
        id: TaskId,
        destination: MoveDestination,
        placement: Placement,
    ) -> BoardResult<Self> {
        let mut active = self.active.clone();
        let position = self.active_position(id)?;
        let task = active.remove(position).in_quadrant(destination.quadrant);
        let insert_at = match placement {
            Placement::EndOfQuadrant => active.len(),
            Placement::AtIndex => group_insertion_point(&active, destination),
        };
        active.insert(insert_at, task);
        if same_quadrant_groups(&self.active, &active) {
            return Err(BoardError::Unchanged);
        }
        Ok(Self {
            active,
            completed: self.completed.clone(),
        })
    }

    /// Returns a board without completed tasks that expired before `now`.
    ///
    /// A task expires when its completion lies strictly more than
    /// `retention` before `now`. Records without a completion timestamp are
    /// treated as expired.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Unchanged`] when nothing has expired.
    pub fn without_expired(
        &self,
        now: DateTime<Utc>,
        retention: TimeDelta,
    ) -> BoardResult<(Self, usize)> {
        let completed: Vec<Task> = self
            .completed
            .iter()
            .filter(|task| !is_expired(task, now, retention))
            .cloned()
            .collect();
        let removed = self.completed.len().saturating_sub(completed.len());
        if removed == 0 {
            return Err(BoardError::Unchanged);
        }
        let board = Self {
            active: self.active.clone(),
            completed,
        };
        Ok((board, removed))
    }

    fn active_position(&self, id: TaskId) -> BoardResult<usize> {
        self.active
            .iter()
            .position(|task| task.id() == id)
            .ok_or(BoardError::TaskNotFound(id))
    }

    fn replacing_active(&self, active: Vec<Task>) -> BoardResult<Self> {
        if active == self.active {
            return Err(BoardError::Unchanged);
        }
        Ok(Self {
            active,
            completed: self.completed.clone(),
        })
    }
}

fn is_expired(task: &Task, now: DateTime<Utc>, retention: TimeDelta) -> bool {
    task.completed_at()
        .is_none_or(|at| now.signed_duration_since(at) > retention)
}

/// Index in `active` at which a task should be inserted to sit at
/// `destination.index` within its quadrant's group.
fn group_insertion_point(active: &[Task], destination: MoveDestination) -> usize {
    let group: Vec<usize> = active
        .iter()
        .enumerate()
        .filter(|(_, task)| task.quadrant() == destination.quadrant)
        .map(|(index, _)| index)
        .collect();
    group.get(destination.index).copied().unwrap_or_else(|| {
        group
            .last()
            .map_or(active.len(), |last| last.saturating_add(1))
    })
}

fn same_quadrant_groups(before: &[Task], after: &[Task]) -> bool {
    let ids = |tasks: &[Task], quadrant: Quadrant| -> Vec<TaskId> {
        tasks
            .iter()
            .filter(|task| task.quadrant() == quadrant)
            .map(Task::id)
            .collect()
    };
    Quadrant::ALL
        .into_iter()
        .all(|quadrant| ids(before, quadrant) == ids(after, quadrant))
}

fn dedup_by_id(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::new();
    tasks
        .into_iter()
        .filter(|task| seen.insert(task.id()))
        .collect()
}
