//! # Token Estimation Module
//!
//! Cheap token-cost estimation for budgeting remote analysis calls.
//!
//! The estimator is a declared approximation (4 characters per token with
//! truncating division), not a real tokenizer. Callers that need exact
//! counts are out of scope; what matters here is that the estimate is
//! deterministic so admission decisions and tests are reproducible.
//!
//! ## Example
//!
//! ```rust
//! use ticket_triage::tokens::{CharacterEstimator, TokenEstimator};
//!
//! let estimator = CharacterEstimator::new();
//! assert_eq!(estimator.estimate("abcdefgh"), 2);
//! assert_eq!(estimator.estimate("abc"), 0);
//! ```

mod estimator;

pub use estimator::{CharacterEstimator, TokenEstimator};
