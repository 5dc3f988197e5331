//! # Analysis Coordination Module
//!
//! Orchestrates a ticket analysis from raw text to a reportable outcome:
//! estimate the token cost, ask the token-budget limiter for admission,
//! invoke the remote analyzer, record the usage, and hand back the result.
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`AnalysisCoordinator`] | Per-request estimate → admit → call → record |
//! | [`AnalysisOutcome`] | `Admitted(Analysis)` or `Rejected(UsageStats)` |
//! | [`RemoteAnalyzer`] | Capability seam for the actual analysis call |
//! | [`KeywordAnalyzer`] | Deterministic fake for tests and local runs |
//!
//! Rejection is data, not an error: a rejected request carries the current
//! usage stats so the caller can surface a retry-later signal. Collaborators
//! (estimator, limiter, recorder, remote analyzer) are injected explicitly;
//! there are no process-wide singletons.

mod coordinator;
mod remote;

pub use coordinator::{
    Analysis, AnalysisCoordinator, AnalysisOutcome, CoordinatorConfig, TicketText,
};
pub use remote::{KeywordAnalyzer, Priority, RemoteAnalysis, RemoteAnalyzer};
