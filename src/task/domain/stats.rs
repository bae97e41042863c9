//! Per-quadrant counts of active tasks.

use super::{Quadrant, Task};

/// Active task counts per quadrant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuadrantStats {
    do_first: usize,
    do_later: usize,
    delegate: usize,
    eliminate: usize,
}

impl QuadrantStats {
    /// Tallies `tasks` by quadrant.
    #[must_use]
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut stats, task| {
            let slot = stats.slot_mut(task.quadrant());
            *slot = slot.saturating_add(1);
            stats
        })
    }

    /// Returns the number of tasks in `quadrant`.
    #[must_use]
    pub const fn count(&self, quadrant: Quadrant) -> usize {
        match quadrant {
            Quadrant::DoFirst => self.do_first,
            Quadrant::DoLater => self.do_later,
            Quadrant::Delegate => self.delegate,
            Quadrant::Eliminate => self.eliminate,
        }
    }

    /// Returns the number of tasks across all quadrants.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.do_first
            .saturating_add(self.do_later)
            .saturating_add(self.delegate)
            .saturating_add(self.eliminate)
    }

    /// Returns the share of tasks in `quadrant` as a whole percentage.
    ///
    /// An empty board yields `0` for every quadrant.
    #[must_use]
    pub fn share_percent(&self, quadrant: Quadrant) -> u8 {
        let share = self
            .count(quadrant)
            .saturating_mul(100)
            .checked_div(self.total())
            .unwrap_or(0);
        u8::try_from(share).unwrap_or(100)
    }

    /// Iterates `(quadrant, count)` pairs in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, usize)> + '_ {
        Quadrant::ALL
            .into_iter()
            .map(|quadrant| (quadrant, self.count(quadrant)))
    }

    const fn slot_mut(&mut self, quadrant: Quadrant) -> &mut usize {
        match quadrant {
            Quadrant::DoFirst => &mut self.do_first,
            Quadrant::DoLater => &mut self.do_later,
            Quadrant::Delegate => &mut self.delegate,
            Quadrant::Eliminate => &mut self.eliminate,
        }
    }
}
