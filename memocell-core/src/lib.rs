//! # memocell Core
//!
//! Core types, constants, and traits for the memocell single-slot TTL cache.
//!
//! This crate provides the foundational building blocks used by the cache crate:
//!
//! - **Types**: [`Ttl`] (a lifetime that may never expire) and [`Expiry`]
//!   (a deadline that may never arrive)
//! - **Constants**: default TTL and jitter bound
//! - **Traits**: [`JitterSource`] for injectable randomness
//!
//! ## Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use memocell_core::{Expiry, Ttl};
//!
//! let ttl = Ttl::Finite(Duration::from_secs(60));
//! let expiry = Expiry::At(Instant::now() + Duration::from_secs(60));
//! assert!(!expiry.is_past(Instant::now()));
//! assert!(!ttl.is_no_expiration());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use traits::{JitterSource, ThreadRngJitter};
pub use types::{Expiry, Ttl};
