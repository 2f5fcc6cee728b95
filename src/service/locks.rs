use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Async mutual-exclusion map keyed by (guild, user).
///
/// Every read-modify-write on a pair's balance or shift state acquires
/// the pair's lock first, so two interleaved command invocations cannot
/// both read the same starting state and silently lose one update. The
/// lock is held only across storage I/O, never across any caller-side
/// network send.
///
/// The embedding application creates one map per service kind and shares
/// it across handler invocations.
pub struct PairLocks {
    inner: Mutex<HashMap<(u64, u64), Arc<tokio::sync::Mutex<()>>>>,
}

impl PairLocks {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Gets the lock for a (guild, user) pair, creating it on first use.
    ///
    /// The returned handle stays valid after the map's internal guard is
    /// released; callers lock it with `.lock().await`. Entries nobody
    /// holds a handle to anymore are dropped on the way in, so the map
    /// tracks the pairs currently in flight rather than every pair ever
    /// touched.
    pub fn lock_for(&self, guild_id: u64, user_id: u64) -> Arc<tokio::sync::Mutex<()>> {
        let mut map = self.inner.lock().expect("pair lock map poisoned");

        // A strong count of 1 means the map holds the only handle.
        map.retain(|_, lock| Arc::strong_count(lock) > 1);

        map.entry((guild_id, user_id))
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }

    /// Number of pair entries currently tracked.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("pair lock map poisoned").len()
    }

    /// Whether no pair entries are currently tracked.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PairLocks {
    fn default() -> Self {
        Self::new()
    }
}
