//! # Batch Planning Module
//!
//! Groups pending analysis requests into batches under two simultaneous
//! caps: a count per batch and a token budget per batch.
//!
//! ## Overview
//!
//! The planner is a greedy single pass that preserves input order. It is
//! stateless — it consumes each item's estimated cost through a caller
//! supplied cost function and never looks at live usage.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`BatchPlanner`] | Greedy dual-cap partitioner |
//! | [`BatchPlanConfig`] | Count cap and token-budget cap |
//! | [`BatchPlan`] | Ordered batches; flattens back to the input sequence |
//!
//! ## Guarantees
//!
//! - Flattening the plan reproduces the input exactly: no drops, no
//!   duplicates, no reordering.
//! - Every batch respects both caps, with one exception: an item whose own
//!   cost exceeds the token budget is placed alone in an over-budget
//!   singleton batch rather than dropped.
//!
//! ## Example
//!
//! ```rust
//! use ticket_triage::batch::{BatchPlanConfig, BatchPlanner};
//!
//! let planner = BatchPlanner::new(
//!     BatchPlanConfig::new()
//!         .with_max_batch_size(3)
//!         .with_max_tokens_per_batch(5000),
//! );
//! let plan = planner.plan(vec![2000u64, 3000, 6000], |cost| *cost);
//! assert_eq!(plan.batches(), &[vec![2000, 3000], vec![6000]]);
//! ```

mod planner;

pub use planner::{BatchPlan, BatchPlanConfig, BatchPlanner};
