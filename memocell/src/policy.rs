//! Expiration policy for cached values.
//!
//! A [`TtlPolicy`] decides, given "now", when a freshly produced value should
//! expire. The jitter offset is drawn exactly once, when the policy is
//! constructed, and reused for every expiration it computes: jitter exists to
//! spread *different* cells' refreshes apart, not to re-randomize a single
//! cell's schedule. Cells that share one policy (it is `Copy`) share its
//! baked-in draw.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use memocell_core::constants::{DEFAULT_JITTER, DEFAULT_TTL};
use memocell_core::{Expiry, JitterSource, ThreadRngJitter, Ttl};

/// Decides when freshly produced values expire.
///
/// The effective TTL (base plus jitter draw) is fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TtlPolicy {
    effective: Ttl,
}

impl TtlPolicy {
    /// Creates a policy from a base TTL and a jitter bound.
    ///
    /// With a finite `ttl` and a non-zero `jitter_max`, a uniform offset in
    /// `[ZERO, jitter_max)` is drawn from the process-wide generator and
    /// permanently added to the base. [`Ttl::NoExpiration`] ignores
    /// `jitter_max` entirely.
    pub fn new(ttl: Ttl, jitter_max: Duration) -> Self {
        Self::with_jitter_source(ttl, jitter_max, &ThreadRngJitter)
    }

    /// Like [`TtlPolicy::new`], drawing from the given [`JitterSource`].
    ///
    /// Substituting a seeded source makes the draw deterministic for tests.
    pub fn with_jitter_source(ttl: Ttl, jitter_max: Duration, source: &dyn JitterSource) -> Self {
        let effective = match ttl {
            Ttl::NoExpiration => Ttl::NoExpiration,
            Ttl::Finite(base) if !jitter_max.is_zero() => {
                Ttl::Finite(base + source.jitter(jitter_max))
            }
            finite => finite,
        };
        Self { effective }
    }

    /// Returns when a value produced at `now` should expire.
    pub fn next_expiry(&self, now: Instant) -> Expiry {
        match self.effective {
            Ttl::Finite(ttl) => Expiry::At(now + ttl),
            Ttl::NoExpiration => Expiry::Never,
        }
    }

    /// The effective TTL with the jitter draw baked in.
    pub fn effective_ttl(&self) -> Ttl {
        self.effective
    }
}

/// The default policy: 1 hour base TTL with up to 5 minutes of jitter.
impl Default for TtlPolicy {
    fn default() -> Self {
        Self::new(Ttl::Finite(DEFAULT_TTL), DEFAULT_JITTER)
    }
}

/// Plain-data policy configuration.
///
/// Serializable form of the policy inputs; [`PolicyConfig::build`] performs
/// the jitter draw. Building twice from the same config yields two
/// independent draws, which is the point of jitter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Base lifetime of a cached value.
    pub ttl: Ttl,
    /// Upper bound (exclusive) of the jitter offset.
    pub jitter: Duration,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            ttl: Ttl::Finite(DEFAULT_TTL),
            jitter: DEFAULT_JITTER,
        }
    }
}

impl PolicyConfig {
    /// Builds a [`TtlPolicy`], drawing the jitter offset now.
    pub fn build(&self) -> TtlPolicy {
        TtlPolicy::new(self.ttl, self.jitter)
    }
}
