//! Lifetime and deadline types.
//!
//! The original formulation of "never expires" as a reserved negative
//! duration does not translate to Rust (`Duration` is unsigned, and monotonic
//! `Instant` has no portable maximum), so both sides of the contract are
//! explicit enums: [`Ttl`] is a lifetime that may be infinite, [`Expiry`] is
//! a deadline that may never arrive.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Base lifetime of a cached value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ttl {
    /// The value expires this long after it was produced.
    Finite(Duration),
    /// The value never expires on its own; only explicit invalidation
    /// forces a recompute.
    NoExpiration,
}

impl Ttl {
    /// Returns true for [`Ttl::NoExpiration`].
    pub fn is_no_expiration(&self) -> bool {
        matches!(self, Ttl::NoExpiration)
    }

    /// Returns the finite duration, if any.
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Ttl::Finite(d) => Some(*d),
            Ttl::NoExpiration => None,
        }
    }
}

impl From<Duration> for Ttl {
    fn from(d: Duration) -> Self {
        Ttl::Finite(d)
    }
}

/// The instant after which a cached value is considered stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expiry {
    /// Stale once this instant is no longer in the future.
    At(Instant),
    /// Never stale.
    Never,
}

impl Expiry {
    /// Returns true if the deadline has been reached at `now`.
    ///
    /// `At(t)` is past unless `t` is strictly after `now`, so a deadline of
    /// exactly `now` already counts as past. A cell initialized with
    /// `Expiry::At(Instant::now())` is therefore stale from the start and
    /// computes on its first read.
    pub fn is_past(&self, now: Instant) -> bool {
        match self {
            Expiry::At(t) => *t <= now,
            Expiry::Never => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_from_duration() {
        let ttl: Ttl = Duration::from_secs(5).into();
        assert_eq!(ttl, Ttl::Finite(Duration::from_secs(5)));
        assert!(!ttl.is_no_expiration());
        assert_eq!(ttl.as_duration(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_no_expiration_has_no_duration() {
        assert!(Ttl::NoExpiration.is_no_expiration());
        assert_eq!(Ttl::NoExpiration.as_duration(), None);
    }

    #[test]
    fn test_expiry_at_now_is_past() {
        let now = Instant::now();
        assert!(Expiry::At(now).is_past(now));
    }

    #[test]
    fn test_expiry_in_future_is_not_past() {
        let now = Instant::now();
        assert!(!Expiry::At(now + Duration::from_secs(10)).is_past(now));
        assert!(Expiry::At(now + Duration::from_secs(10)).is_past(now + Duration::from_secs(10)));
    }

    #[test]
    fn test_never_is_never_past() {
        let now = Instant::now();
        assert!(!Expiry::Never.is_past(now));
        assert!(!Expiry::Never.is_past(now + Duration::from_secs(u32::MAX as u64)));
    }

    #[test]
    fn test_ttl_serde_round_trip() {
        let ttl = Ttl::Finite(Duration::from_secs(90));
        let json = serde_json::to_string(&ttl).unwrap();
        assert_eq!(serde_json::from_str::<Ttl>(&json).unwrap(), ttl);

        let json = serde_json::to_string(&Ttl::NoExpiration).unwrap();
        assert_eq!(serde_json::from_str::<Ttl>(&json).unwrap(), Ttl::NoExpiration);
    }
}
