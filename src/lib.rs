//! # ticket-triage
//!
//! Rate-limiting and budgeted-batching core for a support-ticket analysis
//! service.
//!
//! ## Overview
//!
//! This library implements the admission-control heart of a ticket tracking
//! service that forwards ticket text to a remote AI analysis call: a
//! sliding-window limiter protecting the call's token budget, a deterministic
//! token-cost estimator, an append-only usage log, a token-budget-aware batch
//! planner, and the coordinator that ties them together per request.
//!
//! Ticket storage, HTTP routing, and descriptive analytics live in the
//! surrounding service and are out of scope here; the remote analysis call is
//! a capability trait with a deterministic stand-in.
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`tokens`] | Deterministic token-cost estimation |
//! | [`limiter`] | Sliding-window admission control (requests or tokens) |
//! | [`usage`] | Append-only usage log with lookback aggregation |
//! | [`batch`] | Greedy dual-cap batch planning |
//! | [`analyzer`] | Remote-analyzer seam and per-request coordination |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use ticket_triage::{
//!     AnalysisCoordinator, AnalysisOutcome, CharacterEstimator, CoordinatorConfig,
//!     KeywordAnalyzer, SlidingWindowConfig, SlidingWindowLimiter, UsageRecorder,
//! };
//!
//! #[tokio::main]
//! async fn main() -> ticket_triage::Result<()> {
//!     let coordinator = AnalysisCoordinator::new(
//!         Arc::new(CharacterEstimator::new()),
//!         Arc::new(SlidingWindowLimiter::new(
//!             SlidingWindowConfig::new()
//!                 .with_max_units(10_000)
//!                 .with_window(Duration::from_secs(60)),
//!         )),
//!         Arc::new(UsageRecorder::new()),
//!         Arc::new(KeywordAnalyzer::new()),
//!         CoordinatorConfig::new(),
//!     );
//!
//!     match coordinator.analyze_one("urgent: the build is red").await? {
//!         AnalysisOutcome::Admitted(analysis) => println!("{analysis:?}"),
//!         AnalysisOutcome::Rejected(stats) => println!("retry later, {stats:?}"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod batch;
pub mod limiter;
pub mod tokens;
pub mod usage;

pub mod error;
pub use error::Error;

// Re-export main types for convenience
pub use analyzer::{
    Analysis, AnalysisCoordinator, AnalysisOutcome, CoordinatorConfig, KeywordAnalyzer, Priority,
    RemoteAnalysis, RemoteAnalyzer, TicketText,
};
pub use batch::{BatchPlan, BatchPlanConfig, BatchPlanner};
pub use limiter::{SlidingWindowConfig, SlidingWindowLimiter};
pub use tokens::{CharacterEstimator, TokenEstimator};
pub use usage::{UsageRecorder, UsageStats};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
