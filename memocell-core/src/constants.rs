//! Default timing constants for memocell.
//!
//! These are convenience values, not correctness requirements: any cell may
//! be configured with its own TTL and jitter bound.

use std::time::Duration;

/// Default base lifetime of a cached value (1 hour).
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Default upper bound (exclusive) for the jitter added to [`DEFAULT_TTL`]
/// (5 minutes).
///
/// Jitter spreads the expirations of cells constructed at the same moment
/// across this window, so a fleet of caches does not refresh in lockstep.
pub const DEFAULT_JITTER: Duration = Duration::from_secs(5 * 60);
