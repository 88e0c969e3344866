//! Injectable randomness for jitter draws.
//!
//! Jitter is drawn exactly once, when a policy is constructed, from whatever
//! [`JitterSource`] the caller supplies. Production code uses
//! [`ThreadRngJitter`]; tests substitute a seeded source to make the draw
//! deterministic.

use std::time::Duration;

use rand::Rng;

/// A source of uniform random jitter offsets.
pub trait JitterSource: Send + Sync {
    /// Draws a uniform offset in `[ZERO, max)`.
    ///
    /// Implementations must return `Duration::ZERO` when `max` is zero
    /// (there is nothing to draw from an empty range).
    fn jitter(&self, max: Duration) -> Duration;
}

/// The default jitter source, backed by the process-wide thread-local
/// generator from `rand`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn jitter(&self, max: Duration) -> Duration {
        if max.is_zero() {
            return Duration::ZERO;
        }
        rand::thread_rng().gen_range(Duration::ZERO..max)
    }
}
