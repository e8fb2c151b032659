use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Snapshot of dispatch counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchCounts {
    pub dispatched: u64,
    pub succeeded: u64,
    pub failed: u64,
    pub handler_missing: u64,
}

/// Live counters owned by the mediator.
///
/// `succeeded` / `failed` only move for result requests (through either
/// `send` or `send_result`); plain requests have no success notion.
#[derive(Debug, Default)]
pub(crate) struct DispatchStats {
    dispatched: AtomicU64,
    succeeded: AtomicU64,
    failed: AtomicU64,
    handler_missing: AtomicU64,
}

impl DispatchStats {
    pub(crate) fn record_dispatched(&self) {
        self.dispatched.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_outcome(&self, success: bool) {
        if success {
            self.succeeded.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_missing(&self) {
        self.handler_missing.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> DispatchCounts {
        DispatchCounts {
            dispatched: self.dispatched.load(Ordering::Relaxed),
            succeeded: self.succeeded.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            handler_missing: self.handler_missing.load(Ordering::Relaxed),
        }
    }
}
