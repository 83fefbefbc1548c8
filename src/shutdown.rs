use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

/// Shared quit flag for the input thread.
///
/// The UI loop signals it on exit; the input thread polls it between reads
/// and stops pumping events.
#[derive(Clone)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            debug!("shutdown signaled");
        }
    }
}

impl Default for ShutdownHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running() {
        let handle = ShutdownHandle::new();
        assert!(!handle.is_shutting_down());
    }

    #[test]
    fn signal_is_visible_through_clones() {
        let handle = ShutdownHandle::new();
        let observer = handle.clone();
        handle.signal();
        assert!(observer.is_shutting_down());
    }

    #[test]
    fn signal_is_idempotent() {
        let handle = ShutdownHandle::new();
        handle.signal();
        handle.signal();
        assert!(handle.is_shutting_down());
    }
}
