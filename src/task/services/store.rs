//! The task store: single source of truth for the active and completed
//! collections.
//!
//! Every operation runs to completion synchronously. A mutation builds a new
//! [`TaskBoard`] snapshot, swaps it in, writes the affected slots, and emits a
//! confirmation notice. Rejected operations (blank content, unknown ids,
//! drops that change nothing) leave the board untouched and emit nothing.
//! Storage failures never roll back the in-memory board; the failed slot is
//! rewritten on the next mutation.

use super::{
    StoreConfig,
    codec::{decode_tasks, encode_tasks},
};
use crate::task::{
    domain::{
        BoardResult, DropTarget, MoveDestination, Quadrant, Task, TaskBoard, TaskContent, TaskId,
        TaskUpdate,
    },
    ports::{Notice, Notifier, SlotStore, StorageSlot},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Eisenhower task store with injected storage, clock, and notifier.
pub struct TaskStore<S, C, N>
where
    S: SlotStore,
    C: Clock + Send + Sync,
    N: Notifier,
{
    storage: Arc<S>,
    clock: Arc<C>,
    notifier: Arc<N>,
    config: StoreConfig,
    board: TaskBoard,
    drag_subject: Option<TaskId>,
    dirty: BTreeSet<StorageSlot>,
}

impl<S, C, N> TaskStore<S, C, N>
where
    S: SlotStore,
    C: Clock + Send + Sync,
    N: Notifier,
{
    /// Creates a store with an empty board, ignoring anything in storage.
    #[must_use]
    pub const fn new(storage: Arc<S>, clock: Arc<C>, notifier: Arc<N>, config: StoreConfig) -> Self {
        Self {
            storage,
            clock,
            notifier,
            config,
            board: TaskBoard::empty(),
            drag_subject: None,
            dirty: BTreeSet::new(),
        }
    }

    /// Creates a store from the collections persisted in `storage`.
    ///
    /// Each slot is read once. An absent, unreadable, or undecodable slot
    /// counts as an empty collection. A slot whose records had to be
    /// normalised is rewritten, and expired completed tasks are swept before
    /// the store is returned.
    #[must_use]
    pub fn load(storage: Arc<S>, clock: Arc<C>, notifier: Arc<N>, config: StoreConfig) -> Self {
        let active = load_slot(&*storage, StorageSlot::Tasks);
        let completed = load_slot(&*storage, StorageSlot::CompletedTasks);
        let board = TaskBoard::from_collections(active.clone(), completed.clone());
        let normalised: Vec<StorageSlot> = [
            (StorageSlot::Tasks, active.as_slice(), board.active()),
            (StorageSlot::CompletedTasks, completed.as_slice(), board.completed()),
        ]
        .into_iter()
        .filter(|(_, loaded, kept)| loaded != kept)
        .map(|(slot, _, _)| slot)
        .collect();
        let mut store = Self::new(storage, clock, notifier, config);
        store.board = board;
        tracing::debug!(
            active = store.board.active().len(),
            completed = store.board.completed().len(),
            "task store loaded"
        );
        if !normalised.is_empty() {
            tracing::info!(slots = ?normalised, "rewriting normalised slots");
            store.persist(&normalised);
        }
        store.refresh();
        store
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn board(&self) -> &TaskBoard {
        &self.board
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Adds a task to the end of the active collection.
    ///
    /// Returns the new task's id, or `None` when `content` is blank.
    pub fn add(&mut self, content: &str, quadrant: Quadrant) -> Option<TaskId> {
        let validated = match TaskContent::new(content) {
            Ok(validated) => validated,
            Err(err) => {
                tracing::debug!(reason = %err, "add rejected");
                return None;
            }
        };
        let task = Task::new(validated, quadrant, &*self.clock);
        let id = task.id();
        let next = self.board.with_added(task);
        self.commit("add", Ok(next), &[StorageSlot::Tasks], Notice::Added)
            .then_some(id)
    }

    /// Applies `update` to the active task `id`.
    ///
    /// Returns `false` when the task is unknown or nothing changed.
    pub fn edit(&mut self, id: TaskId, update: &TaskUpdate) -> bool {
        let next = self.board.with_edit(id, update);
        self.commit("edit", next, &[StorageSlot::Tasks], Notice::Updated)
    }

    /// Deletes the active task `id` permanently.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let next = self.board.without(id);
        self.commit("delete", next, &[StorageSlot::Tasks], Notice::Deleted)
    }

    /// Moves the active task `id` to the completed collection, stamped with
    /// the current time.
    pub fn complete(&mut self, id: TaskId) -> bool {
        let next = self.board.with_completed(id, self.clock.utc());
        self.commit("complete", next, &StorageSlot::ALL, Notice::Completed)
    }

    /// Reassigns the active task `id` to `destination` and repositions it
    /// according to the configured placement policy.
    ///
    /// `destination_index` is the position within the destination quadrant
    /// and is only consulted by [`Placement::AtIndex`].
    ///
    /// [`Placement::AtIndex`]: crate::task::domain::Placement::AtIndex
    pub fn reorder_or_move(
        &mut self,
        id: TaskId,
        destination: Quadrant,
        destination_index: usize,
    ) -> bool {
        self.move_to(
            id,
            MoveDestination {
                quadrant: destination,
                index: destination_index,
            },
        )
    }

    /// Records `id` as the task being dragged.
    ///
    /// Returns `false`, recording nothing, when `id` is not active.
    pub fn begin_drag(&mut self, id: TaskId) -> bool {
        if self.board.find_active(id).is_none() {
            tracing::debug!(task_id = %id, "drag start ignored for unknown task");
            return false;
        }
        self.drag_subject = Some(id);
        true
    }

    /// Returns the task being dragged, for overlay rendering.
    #[must_use]
    pub fn dragged_task(&self) -> Option<&Task> {
        self.drag_subject
            .and_then(|id| self.board.find_active(id))
    }

    /// Abandons the current drag without changing the board.
    pub fn cancel_drag(&mut self) {
        self.drag_subject = None;
    }

    /// Finishes the current drag over `over`.
    ///
    /// Releasing outside any droppable region (`None`), onto the dragged
    /// task itself, or onto an unknown task is a no-op.
    pub fn end_drag(&mut self, over: Option<DropTarget>) -> bool {
        let Some(id) = self.drag_subject.take() else {
            return false;
        };
        let Some(target) = over else {
            tracing::debug!(task_id = %id, "drag released outside any drop target");
            return false;
        };
        match self.board.resolve_drop(id, target) {
            Ok(destination) => self.move_to(id, destination),
            Err(err) => {
                tracing::debug!(task_id = %id, reason = %err, "drop ignored");
                false
            }
        }
    }

    /// Purges completed tasks whose completion lies strictly more than the
    /// retention window before `now`.
    ///
    /// Returns the number of tasks removed. Calling it again with the same
    /// `now` removes nothing.
    pub fn sweep_expired_completed(&mut self, now: DateTime<Utc>) -> usize {
        let Ok((next, removed)) = self.board.without_expired(now, self.config.retention) else {
            return 0;
        };
        self.board = next;
        self.persist(&[StorageSlot::CompletedTasks]);
        tracing::info!(removed, "purged expired completed tasks");
        removed
    }

    /// Runs the expiry sweep against the current clock time.
    ///
    /// Cheap enough to call on every render pass.
    pub fn refresh(&mut self) -> usize {
        let now = self.clock.utc();
        self.sweep_expired_completed(now)
    }

    /// Returns the slots whose last write failed and are awaiting a retry.
    pub fn pending_writes(&self) -> impl Iterator<Item = StorageSlot> + '_ {
        self.dirty.iter().copied()
    }

    /// Retries every pending slot write.
    ///
    /// Returns `true` when no writes remain pending.
    pub fn flush(&mut self) -> bool {
        self.persist(&[]);
        self.dirty.is_empty()
    }

    fn move_to(&mut self, id: TaskId, destination: MoveDestination) -> bool {
        let next = self
            .board
            .with_moved(id, destination, self.config.placement);
        self.commit(
            "move",
            next,
            &[StorageSlot::Tasks],
            Notice::Moved(destination.quadrant),
        )
    }

    fn commit(
        &mut self,
        operation: &'static str,
        next: BoardResult<TaskBoard>,
        slots: &[StorageSlot],
        notice: Notice,
    ) -> bool {
        let board = match next {
            Ok(board) => board,
            Err(err) => {
                tracing::debug!(operation, reason = %err, "operation left the board unchanged");
                return false;
            }
        };
        self.board = board;
        self.persist(slots);
        self.notifier.notify(&notice);
        true
    }

    /// Writes `slots` plus any slot still pending from an earlier failure.
    fn persist(&mut self, slots: &[StorageSlot]) {
        let targets: BTreeSet<StorageSlot> = slots
            .iter()
            .copied()
            .chain(self.dirty.iter().copied())
            .collect();
        for slot in targets {
            if self.write_slot(slot) {
                self.dirty.remove(&slot);
            } else {
                self.dirty.insert(slot);
            }
        }
    }

    fn write_slot(&self, slot: StorageSlot) -> bool {
        let tasks = match slot {
            StorageSlot::Tasks => self.board.active(),
            StorageSlot::CompletedTasks => self.board.completed(),
        };
        let result = encode_tasks(tasks)
            .map_err(|err| err.to_string())
            .and_then(|text| {
                self.storage
                    .set(slot, &text)
                    .map_err(|err| err.to_string())
            });
        if let Err(error) = result {
            tracing::warn!(%slot, %error, "slot write failed, will retry on next write");
            return false;
        }
        true
    }
}

fn load_slot(storage: &impl SlotStore, slot: StorageSlot) -> Vec<Task> {
    let text = match storage.get(slot) {
        Ok(Some(text)) => text,
        Ok(None) => return Vec::new(),
        Err(err) => {
            tracing::warn!(%slot, error = %err, "slot read failed, starting empty");
            return Vec::new();
        }
    };
    let decoded = match decode_tasks(&text) {
        Ok(decoded) => decoded,
        Err(err) => {
            tracing::warn!(%slot, error = %err, "slot contents unreadable, starting empty");
            return Vec::new();
        }
    };
    if decoded.skipped > 0 {
        tracing::warn!(%slot, skipped = decoded.skipped, "dropped malformed task records");
    }
    decoded.tasks
}
