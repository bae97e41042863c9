//! Store configuration.

use crate::task::domain::Placement;
use chrono::TimeDelta;

/// Days a completed task is retained before it is purged.
pub const DEFAULT_RETENTION_DAYS: i64 = 7;

/// Policy knobs for a [`TaskStore`](super::TaskStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// How long completed tasks are kept. Tasks whose completion lies
    /// strictly further in the past are purged by the expiry sweep.
    pub retention: TimeDelta,
    /// Where dragged tasks land inside their destination quadrant.
    pub placement: Placement,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            retention: TimeDelta::days(DEFAULT_RETENTION_DAYS),
            placement: Placement::default(),
        }
    }
}

impl StoreConfig {
    /// Replaces the retention window.
    #[must_use]
    pub const fn with_retention(mut self, retention: TimeDelta) -> Self {
        self.retention = retention;
        self
    }

    /// Replaces the placement policy.
    #[must_use]
    pub const fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }
}
