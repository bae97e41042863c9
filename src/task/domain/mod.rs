//! Domain model for the Eisenhower task board.
//!
//! The domain holds the task entity, its quadrant classification, and the
//! immutable board snapshot together with the pure transformations the store
//! applies to it. Persistence, clocks, and user-facing notices stay outside
//! of the domain boundary.

mod board;
mod drag;
mod error;
mod ids;
mod quadrant;
mod stats;
mod task;

pub use board::{BoardResult, MoveDestination, TaskBoard};
pub use drag::{DropTarget, Placement};
pub use error::{BoardError, ParseQuadrantError, TaskDomainError};
pub use ids::{TaskContent, TaskId};
pub use quadrant::Quadrant;
pub use stats::QuadrantStats;
pub use task::{PersistedTaskData, Task, TaskUpdate};
