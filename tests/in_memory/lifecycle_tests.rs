//! Task lifecycle flows against in-memory adapters.

use std::collections::HashSet;

use crate::test_helpers::MemoryHarness;
use chrono::TimeDelta;
use rstest::{fixture, rstest};
use supertasks::task::{
    domain::{Quadrant, Task, TaskBoard, TaskId, TaskUpdate},
    ports::Notice,
};

#[fixture]
fn harness() -> MemoryHarness {
    MemoryHarness::empty()
}

fn all_ids(board: &TaskBoard) -> HashSet<TaskId> {
    board
        .active()
        .iter()
        .chain(board.completed())
        .map(Task::id)
        .collect()
}

#[rstest]
fn write_report_is_completed_then_purged(mut harness: MemoryHarness) -> Result<(), eyre::Report> {
    let id = harness
        .store
        .add("Write report", Quadrant::DoFirst)
        .ok_or_else(|| eyre::eyre!("add rejected valid content"))?;
    eyre::ensure!(
        harness.store.board().in_quadrant(Quadrant::DoFirst).count() == 1,
        "expected one do-first task"
    );

    eyre::ensure!(harness.store.complete(id), "complete was a no-op");
    let completed_at = harness
        .store
        .board()
        .find_completed(id)
        .and_then(Task::completed_at)
        .ok_or_else(|| eyre::eyre!("completed task lacks completedAt"))?;
    eyre::ensure!(harness.store.board().active().is_empty(), "active not empty");
    eyre::ensure!(harness.store.board().completed().len() == 1, "one completed");

    let removed = harness
        .store
        .sweep_expired_completed(completed_at + TimeDelta::days(8));

    eyre::ensure!(removed == 1, "expected one purge, got {removed}");
    eyre::ensure!(
        harness.store.board().completed().is_empty(),
        "completed collection should be empty"
    );
    Ok(())
}

#[rstest]
fn complete_preserves_the_union_of_ids(mut harness: MemoryHarness) -> Result<(), eyre::Report> {
    let ids: Vec<TaskId> = ["one", "two", "three"]
        .into_iter()
        .filter_map(|content| harness.store.add(content, Quadrant::Delegate))
        .collect();
    let before = all_ids(harness.store.board());
    let target = *ids
        .get(1)
        .ok_or_else(|| eyre::eyre!("expected three tasks"))?;

    eyre::ensure!(harness.store.complete(target), "complete was a no-op");

    eyre::ensure!(all_ids(harness.store.board()) == before, "id union changed");
    eyre::ensure!(
        harness.store.board().find_active(target).is_none()
            && harness.store.board().find_completed(target).is_some(),
        "membership did not move"
    );
    Ok(())
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n")]
fn blank_content_never_reaches_the_board(mut harness: MemoryHarness, #[case] content: &str) {
    assert_eq!(harness.store.add(content, Quadrant::Eliminate), None);
    assert!(harness.store.board().active().is_empty());
    assert!(harness.notifier.notices().is_empty());
}

#[rstest]
fn edit_with_blank_content_is_rejected_before_the_store(
    mut harness: MemoryHarness,
) -> Result<(), eyre::Report> {
    let id = harness
        .store
        .add("Plan sprint", Quadrant::DoLater)
        .ok_or_else(|| eyre::eyre!("add rejected valid content"))?;

    eyre::ensure!(TaskUpdate::content("  ").is_err(), "blank update accepted");
    eyre::ensure!(
        !harness.store.edit(id, &TaskUpdate::new()),
        "empty update applied"
    );
    let task = harness
        .store
        .board()
        .find_active(id)
        .ok_or_else(|| eyre::eyre!("task vanished"))?;
    eyre::ensure!(task.content().as_str() == "Plan sprint", "content changed");
    Ok(())
}

#[rstest]
fn operations_on_deleted_task_are_silent(mut harness: MemoryHarness) -> Result<(), eyre::Report> {
    let id = harness
        .store
        .add("Short lived", Quadrant::DoFirst)
        .ok_or_else(|| eyre::eyre!("add rejected valid content"))?;
    eyre::ensure!(harness.store.delete(id), "delete was a no-op");
    let notices = harness.notifier.notices().len();
    let update = TaskUpdate::content("resurrect")?;

    eyre::ensure!(!harness.store.delete(id), "second delete applied");
    eyre::ensure!(!harness.store.edit(id, &update), "edit applied");
    eyre::ensure!(!harness.store.complete(id), "complete applied");
    eyre::ensure!(
        !harness.store.reorder_or_move(id, Quadrant::Delegate, 0),
        "move applied"
    );

    eyre::ensure!(
        harness.notifier.notices().len() == notices,
        "no-ops must not notify"
    );
    Ok(())
}

#[rstest]
fn sweep_keeps_tasks_inside_the_window(mut harness: MemoryHarness) -> Result<(), eyre::Report> {
    let old = harness
        .store
        .add("Old", Quadrant::DoFirst)
        .ok_or_else(|| eyre::eyre!("add rejected"))?;
    harness.store.complete(old);
    harness.clock.advance(TimeDelta::days(3));
    let recent = harness
        .store
        .add("Recent", Quadrant::DoFirst)
        .ok_or_else(|| eyre::eyre!("add rejected"))?;
    harness.store.complete(recent);

    harness.clock.advance(TimeDelta::days(5));
    let removed = harness.store.refresh();

    eyre::ensure!(removed == 1, "expected one purge, got {removed}");
    eyre::ensure!(
        harness.store.board().find_completed(recent).is_some(),
        "recent completion purged"
    );
    eyre::ensure!(harness.store.refresh() == 0, "sweep is not idempotent");
    Ok(())
}

#[rstest]
fn notices_follow_the_operations(mut harness: MemoryHarness) -> Result<(), eyre::Report> {
    let id = harness
        .store
        .add("Call plumber", Quadrant::Delegate)
        .ok_or_else(|| eyre::eyre!("add rejected"))?;
    harness
        .store
        .edit(id, &TaskUpdate::content("Call the plumber")?);
    harness.store.reorder_or_move(id, Quadrant::DoFirst, 0);
    harness.store.complete(id);

    let messages: Vec<String> = harness
        .notifier
        .notices()
        .iter()
        .map(Notice::message)
        .collect();
    eyre::ensure!(
        messages
            == [
                "Task added successfully",
                "Task updated successfully",
                "Task moved to DO FIRST",
                "Task completed",
            ],
        "unexpected notices: {messages:?}"
    );
    Ok(())
}
