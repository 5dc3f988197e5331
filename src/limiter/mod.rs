//! # Sliding-Window Admission Module
//!
//! Time-windowed admission control shared by the two throttling concerns of
//! the service: per-client HTTP request counting and the token budget
//! protecting the remote analysis call.
//!
//! ## Overview
//!
//! One component covers both uses because the only difference between them
//! is the unit of cost: a request counts 1, an analysis call counts its
//! estimated tokens. The limiter is parameterized by cost, not by meaning.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`SlidingWindowLimiter`] | Per-identifier windowed check-and-reserve |
//! | [`SlidingWindowConfig`] | Window duration and unit cap |
//!
//! ## Semantics
//!
//! - An observation is retained iff `now - at < window`; one that is exactly
//!   `window` old is already stale. Pruning is lazy and happens on access.
//! - `is_allowed` is check-and-reserve: it records the cost iff it admits,
//!   atomically with the prune and the sum, under one lock.
//! - `remaining` is advisory. A value read from it may be stale by the time
//!   a subsequent `is_allowed` runs; never use it for correctness.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ticket_triage::limiter::{SlidingWindowConfig, SlidingWindowLimiter};
//! use std::time::Duration;
//!
//! # async fn demo() {
//! let config = SlidingWindowConfig::new()
//!     .with_max_units(10)
//!     .with_window(Duration::from_secs(60));
//! let limiter = SlidingWindowLimiter::new(config);
//!
//! if limiter.is_request_allowed("203.0.113.7").await {
//!     // Serve the request...
//! }
//! # }
//! ```

mod sliding_window;

pub use sliding_window::{SlidingWindowConfig, SlidingWindowLimiter};
