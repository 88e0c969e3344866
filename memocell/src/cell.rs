//! The single-slot cache cell.

use std::time::Instant;

use parking_lot::RwLock;
use tracing::debug;

use memocell_core::Expiry;

use crate::policy::TtlPolicy;

/// Caches a single value. To cache multiple values, the same number of cells
/// is required. Thread-safe.
///
/// Readers take the fast path (a read lock) while the value is fresh; once it
/// expires, recomputation is serialized through a write lock so that at most
/// one producer call is in flight per cell at any time. A producer that fails
/// leaves the cell untouched: the previously cached value (if any) stays, and
/// the very next [`Cache::get`] re-attempts.
///
/// The producer runs while the cell's lock is held, so it must not call back
/// into the same cell, or it will deadlock.
pub struct Cache<V> {
    state: RwLock<State<V>>,
    policy: TtlPolicy,
}

struct State<V> {
    value: Option<V>,
    expires_at: Expiry,
}

impl<V: Clone> State<V> {
    /// The cached value, if present and not expired at `now`.
    fn fresh_value(&self, now: Instant) -> Option<V> {
        if self.expires_at.is_past(now) {
            None
        } else {
            self.value.clone()
        }
    }
}

impl<V: Clone> Cache<V> {
    /// Creates an empty cell.
    ///
    /// The initial expiry is "now", so the first [`Cache::get`] always
    /// invokes its producer.
    pub fn new(policy: TtlPolicy) -> Self {
        Self {
            state: RwLock::new(State {
                value: None,
                expires_at: Expiry::At(Instant::now()),
            }),
            policy,
        }
    }

    /// Returns the cached value, producing a fresh one if absent or expired.
    ///
    /// While the value is fresh this takes only a read lock and returns a
    /// clone. Otherwise the caller acquires the write lock, re-checks
    /// freshness (another caller may have refreshed while it waited, in which
    /// case no second producer call is made), and runs `producer` with the
    /// lock held.
    ///
    /// On producer success the new value and its expiry are installed
    /// together and the value is returned. On failure the error is returned
    /// verbatim and nothing is mutated; errors are never cached, so the next
    /// call re-attempts immediately.
    pub fn get<E>(&self, producer: impl FnOnce() -> Result<V, E>) -> Result<V, E> {
        {
            let state = self.state.read();
            if let Some(value) = state.fresh_value(Instant::now()) {
                return Ok(value);
            }
        }

        let mut state = self.state.write();
        // Re-check: another caller may have refreshed the value while this
        // one waited for the write lock. This collapses a thundering herd
        // into a single producer call.
        if let Some(value) = state.fresh_value(Instant::now()) {
            return Ok(value);
        }

        let value = match producer() {
            Ok(value) => value,
            Err(err) => {
                // Leave value and expiry untouched; the stale expiry means
                // the next call re-attempts rather than waiting out a TTL.
                debug!("producer failed, cell left stale");
                return Err(err);
            }
        };
        state.value = Some(value.clone());
        state.expires_at = self.policy.next_expiry(Instant::now());
        debug!(expires_at = ?state.expires_at, "cell refreshed");
        Ok(value)
    }

    /// Marks the cell expired so the next [`Cache::get`] recomputes.
    ///
    /// The cached value is not cleared; a concurrent fast-path reader that
    /// already holds the read lock may still observe it.
    pub fn invalidate(&self) {
        let mut state = self.state.write();
        state.expires_at = Expiry::At(Instant::now());
        debug!("cell invalidated");
    }
}

/// An empty cell with the default 1-hour-plus-jitter policy.
impl<V: Clone> Default for Cache<V> {
    fn default() -> Self {
        Self::new(TtlPolicy::default())
    }
}
