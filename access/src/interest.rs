//! Late-response guards.
//!
//! In-flight requests are never aborted when the user navigates away.
//! Instead, the page holds an [`Interest`] while mounted and hands
//! [`InterestGuard`]s to its async work; once the interest is dropped (or
//! revoked), guards report stale and the work discards its result instead
//! of writing into a page that no longer exists.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A page's declaration that it still wants async results.
///
/// Dropping the interest revokes it, so tying one to page lifetime is
/// enough — no explicit cleanup call required on unmount.
#[derive(Debug)]
pub struct Interest {
    current: Arc<AtomicBool>,
}

impl Interest {
    /// Declare a new, live interest.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Arc::new(AtomicBool::new(true)),
        }
    }

    /// A guard for async work started while this interest is live.
    #[must_use]
    pub fn guard(&self) -> InterestGuard {
        InterestGuard {
            current: Arc::clone(&self.current),
        }
    }

    /// Revoke explicitly (dropping does the same).
    pub fn revoke(&self) {
        self.current.store(false, Ordering::SeqCst);
    }
}

impl Default for Interest {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Interest {
    fn drop(&mut self) {
        self.revoke();
    }
}

/// A cheap handle async work checks before applying its result.
#[derive(Debug, Clone)]
pub struct InterestGuard {
    current: Arc<AtomicBool>,
}

impl InterestGuard {
    /// Whether the originating page is still interested.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst)
    }
}
