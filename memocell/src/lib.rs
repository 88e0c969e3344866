//! # memocell
//!
//! A single-slot, thread-safe TTL memoization cell.
//!
//! A [`Cache`] holds at most one value. Reading it with [`Cache::get`] either
//! serves the cached value (if it has not expired) or invokes the supplied
//! producer to compute a fresh one, with the guarantee that no two producer
//! calls for the same cell ever run concurrently. To cache multiple values,
//! create the same number of cells.
//!
//! Expiration is driven by a [`TtlPolicy`]: a base TTL plus an optional
//! jitter offset drawn once at policy construction, so many cells built at
//! the same moment do not all refresh at the same moment.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use memocell::{Cache, Ttl, TtlPolicy};
//!
//! let cache = Cache::new(TtlPolicy::new(Ttl::Finite(Duration::from_secs(60)), Duration::ZERO));
//!
//! // First read computes.
//! let value: Result<u32, &str> = cache.get(|| Ok(42));
//! assert_eq!(value, Ok(42));
//!
//! // Later reads before expiry are served from the cell; the producer is
//! // not invoked (and its error is never seen).
//! let again: Result<u32, &str> = cache.get(|| Err("unreachable"));
//! assert_eq!(again, Ok(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

mod cell;
mod policy;

pub use cell::Cache;
pub use policy::{PolicyConfig, TtlPolicy};

// Re-export the core vocabulary so most callers need only this crate.
pub use memocell_core::{Expiry, JitterSource, ThreadRngJitter, Ttl, DEFAULT_JITTER, DEFAULT_TTL};
