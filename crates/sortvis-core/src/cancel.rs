//! Cooperative cancellation flag shared between a session and its callers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable cancellation flag.
///
/// Any clone may request cancellation; the playback loop polls it at
/// suspension points only, so a request never interrupts a step that is
/// being applied.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// A fresh, unset token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Clear a previous request. Called when a new session starts.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Release);
    }
}
