//! Notifier that reports notices as structured log events.

use crate::task::ports::{Notice, Notifier};

/// Emits every notice as an `info` event on the `supertasks::notice` target.
///
/// Useful for headless embeddings where no toast renderer exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        tracing::info!(target: "supertasks::notice", notice = %notice, "notice delivered");
    }
}
