//! Eisenhower task board: task lifecycle, quadrant moves, and persistence.
//!
//! Tasks are created into one of four quadrants, edited, dragged between
//! quadrants, then either deleted or completed. Completed tasks are kept for
//! a retention window and purged afterwards. The module follows hexagonal
//! architecture:
//!
//! - Domain types and pure board transformations in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The task store and its configuration in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
