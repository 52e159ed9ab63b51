//! Tap counter

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Count of user taps, shared by cloning
///
/// Hosts create one and hand clones to whatever needs to record or show
/// taps. There is no process-wide instance.
#[derive(Debug, Clone, Default)]
pub struct TapCounter {
    count: Arc<AtomicU64>,
}

impl TapCounter {
    /// Create a counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one tap and return the new total
    pub fn increment(&self) -> u64 {
        self.count.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Current total
    pub fn get(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}
