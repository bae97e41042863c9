//! SuperTasks: an Eisenhower-matrix personal task manager core.
//!
//! This crate owns the task collections behind a quadrant-based task board:
//! creating, editing, deleting, and completing tasks, drag-and-drop moves
//! between quadrants, and the expiry of completed tasks. UI layers call the
//! store directly and re-render from its snapshots.
//!
//! # Architecture
//!
//! SuperTasks follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and notices
//! - **Adapters**: Concrete implementations of ports (memory, filesystem, logs)
//!
//! # Modules
//!
//! - [`task`]: Task board domain, store, and persistence

pub mod task;
