//! Then steps for task board BDD scenarios.

use super::world::{BoardWorld, quadrant};
use rstest_bdd_macros::then;
use supertasks::task::domain::Task;

#[then(r#""{target}" holds {count} task"#)]
fn quadrant_holds_one(world: &BoardWorld, target: String, count: usize) -> Result<(), eyre::Report> {
    quadrant_holds(world, &target, count)
}

#[then(r#""{target}" holds {count} tasks"#)]
fn quadrant_holds_many(
    world: &BoardWorld,
    target: String,
    count: usize,
) -> Result<(), eyre::Report> {
    quadrant_holds(world, &target, count)
}

fn quadrant_holds(world: &BoardWorld, target: &str, count: usize) -> Result<(), eyre::Report> {
    let found = world
        .harness
        .store
        .board()
        .in_quadrant(quadrant(target)?)
        .count();
    if found != count {
        return Err(eyre::eyre!("expected {count} tasks in {target}, found {found}"));
    }
    Ok(())
}

#[then("there are {count} active tasks")]
fn active_count(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world.harness.store.board().active().len();
    if found != count {
        return Err(eyre::eyre!("expected {count} active tasks, found {found}"));
    }
    Ok(())
}

#[then("there are {count} completed tasks")]
fn completed_count(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world.harness.store.board().completed().len();
    if found != count {
        return Err(eyre::eyre!("expected {count} completed tasks, found {found}"));
    }
    Ok(())
}

#[then(r#""{content}" has a completion time"#)]
fn has_completion_time(world: &BoardWorld, content: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&content)?;
    world
        .harness
        .store
        .board()
        .find_completed(id)
        .and_then(Task::completed_at)
        .map(|_| ())
        .ok_or_else(|| eyre::eyre!("{content:?} is not completed"))
}

#[then(r#""{content}" is in "{target}""#)]
fn task_is_in(world: &BoardWorld, content: String, target: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&content)?;
    let expected = quadrant(&target)?;
    let found = world
        .harness
        .store
        .board()
        .find_active(id)
        .map(Task::quadrant)
        .ok_or_else(|| eyre::eyre!("{content:?} is not active"))?;
    if found != expected {
        return Err(eyre::eyre!("expected {content:?} in {expected}, found {found}"));
    }
    Ok(())
}

#[then(r#"the last notice reads "{message}""#)]
fn last_notice(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let last = world
        .harness
        .notifier
        .last()
        .ok_or_else(|| eyre::eyre!("no notice was emitted"))?;
    if last.message() != message {
        return Err(eyre::eyre!("expected notice {message:?}, got {:?}", last.message()));
    }
    Ok(())
}

#[then("the move is reported as a no-op")]
fn move_was_no_op(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_outcome {
        Some(false) => Ok(()),
        other => Err(eyre::eyre!("expected a no-op move, got {other:?}")),
    }
}

#[then("the add is rejected")]
fn add_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_outcome {
        Some(false) => Ok(()),
        other => Err(eyre::eyre!("expected a rejected add, got {other:?}")),
    }
}

#[then("the board is unchanged")]
fn board_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    let (board, _) = world
        .baseline
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing baseline in scenario world"))?;
    if world.harness.store.board() != board {
        return Err(eyre::eyre!("board changed since the setup"));
    }
    Ok(())
}

#[then("no notice was emitted since the setup")]
fn no_new_notice(world: &BoardWorld) -> Result<(), eyre::Report> {
    let (_, notices) = world
        .baseline
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing baseline in scenario world"))?;
    let found = world.harness.notifier.notices().len();
    if found != *notices {
        return Err(eyre::eyre!("expected {notices} notices, found {found}"));
    }
    Ok(())
}
