//! Notifier that records every notice it receives.

use std::sync::{Arc, RwLock};

use crate::task::ports::{Notice, Notifier};

/// Thread-safe notifier collecting notices in delivery order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<RwLock<Vec<Notice>>>,
}

impl RecordingNotifier {
    /// Creates a notifier with no recorded notices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notices received so far.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .read()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }

    /// Returns the most recent notice, if any.
    #[must_use]
    pub fn last(&self) -> Option<Notice> {
        self.notices
            .read()
            .ok()
            .and_then(|notices| notices.last().cloned())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        if let Ok(mut notices) = self.notices.write() {
            notices.push(notice.clone());
        }
    }
}
