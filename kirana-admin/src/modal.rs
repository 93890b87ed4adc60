//! Modal UI state
//!
//! While an editor modal is visible the page behind it must not
//! scroll. [`ScrollLock`] counts open modals; suppression ends when the
//! last [`ScrollGuard`] drops, whether the editor was submitted or
//! cancelled.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared scroll suppressor, cloned into every page of one window
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    engaged: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engage suppression for one modal.
    pub fn engage(&self) -> ScrollGuard {
        self.engaged.fetch_add(1, Ordering::SeqCst);
        ScrollGuard {
            engaged: Arc::clone(&self.engaged),
        }
    }

    /// Whether the page behind should currently refuse to scroll.
    pub fn is_locked(&self) -> bool {
        self.engaged.load(Ordering::SeqCst) > 0
    }
}

/// Keeps scrolling suppressed while alive
#[derive(Debug)]
pub struct ScrollGuard {
    engaged: Arc<AtomicUsize>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.engaged.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_when_the_guard_drops() {
        let lock = ScrollLock::new();
        assert!(!lock.is_locked());
        let guard = lock.engage();
        assert!(lock.is_locked());
        drop(guard);
        assert!(!lock.is_locked());
    }

    #[test]
    fn stacked_modals_keep_the_lock_until_the_last_one_closes() {
        let lock = ScrollLock::new();
        let first = lock.engage();
        let second = lock.engage();
        drop(first);
        assert!(lock.is_locked());
        drop(second);
        assert!(!lock.is_locked());
    }

    #[test]
    fn clones_share_the_same_counter() {
        let lock = ScrollLock::new();
        let clone = lock.clone();
        let _guard = clone.engage();
        assert!(lock.is_locked());
    }
}
