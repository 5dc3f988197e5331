use crate::batch::{BatchPlanConfig, BatchPlanner};
use crate::limiter::SlidingWindowLimiter;
use crate::tokens::TokenEstimator;
use crate::usage::{UsageRecorder, UsageStats};
use crate::{Error, Result};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use super::remote::{Priority, RemoteAnalyzer};

/// Completed analysis for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub suggested_priority: Priority,
    pub suggested_response: String,
    /// Reserved cost charged against the token budget for this request.
    pub tokens_used: u64,
}

/// Per-request result of the estimate → admit → call → record flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AnalysisOutcome {
    Admitted(Analysis),
    /// Admission denied; carries current usage so the caller can report a
    /// retry-later signal. Not an error.
    Rejected(UsageStats),
}

impl AnalysisOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, AnalysisOutcome::Admitted(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, AnalysisOutcome::Rejected(_))
    }
}

/// Title + description of a ticket-shaped record, as supplied by the
/// surrounding CRUD layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketText {
    pub title: String,
    pub description: String,
}

impl TicketText {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// The prompt text the analysis runs over.
    pub fn analysis_text(&self) -> String {
        format!("Analyze: {} - {}", self.title, self.description)
    }
}

#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    /// Identifier the token budget is scoped to. One key means one shared
    /// budget across the whole service.
    pub scope_key: String,
    /// Fixed token reservation added per request to cover the response.
    pub response_reservation: u64,
    /// Category label recorded with each completed request's usage.
    pub usage_category: String,
    /// Lookback used for the stats attached to rejections.
    pub stats_lookback: Duration,
    /// Caps for planning multi-request submissions.
    pub batch: BatchPlanConfig,
}

impl CoordinatorConfig {
    pub fn new() -> Self {
        Self {
            scope_key: "global".to_string(),
            response_reservation: 500,
            usage_category: "ticket_analysis".to_string(),
            stats_lookback: Duration::from_secs(3600),
            batch: BatchPlanConfig::new(),
        }
    }

    pub fn with_scope_key(mut self, key: impl Into<String>) -> Self {
        self.scope_key = key.into();
        self
    }

    pub fn with_response_reservation(mut self, tokens: u64) -> Self {
        self.response_reservation = tokens;
        self
    }

    pub fn with_usage_category(mut self, category: impl Into<String>) -> Self {
        self.usage_category = category.into();
        self
    }

    pub fn with_stats_lookback(mut self, lookback: Duration) -> Self {
        self.stats_lookback = lookback;
        self
    }

    pub fn with_batch(mut self, batch: BatchPlanConfig) -> Self {
        self.batch = batch;
        self
    }
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Orchestrates analysis requests against the token budget.
///
/// All collaborators are injected and shared by `Arc`, so the same limiter
/// and recorder instances can back other parts of the service (for example
/// a per-client HTTP limiter reporting into the same usage log).
pub struct AnalysisCoordinator {
    estimator: Arc<dyn TokenEstimator>,
    limiter: Arc<SlidingWindowLimiter>,
    recorder: Arc<UsageRecorder>,
    remote: Arc<dyn RemoteAnalyzer>,
    config: CoordinatorConfig,
}

impl AnalysisCoordinator {
    pub fn new(
        estimator: Arc<dyn TokenEstimator>,
        limiter: Arc<SlidingWindowLimiter>,
        recorder: Arc<UsageRecorder>,
        remote: Arc<dyn RemoteAnalyzer>,
        config: CoordinatorConfig,
    ) -> Self {
        Self {
            estimator,
            limiter,
            recorder,
            remote,
            config,
        }
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Run one text through estimate → admit → remote call → record.
    ///
    /// The admission check holds the limiter lock; the remote call runs
    /// outside it. Empty or whitespace-only text is a validation error.
    pub async fn analyze_one(&self, text: &str) -> Result<AnalysisOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::validation("analysis text must not be empty"));
        }

        // A zero estimate with no reservation still occupies one budget unit;
        // the limiter treats cost 0 as an invariant violation.
        let cost = (self.estimator.estimate(text) + self.config.response_reservation).max(1);
        if !self.limiter.is_allowed(&self.config.scope_key, cost).await {
            let stats = self.recorder.stats(self.config.stats_lookback);
            return Ok(AnalysisOutcome::Rejected(stats));
        }

        let remote = self.remote.analyze(text).await?;
        self.recorder.record(cost, self.config.usage_category.as_str());
        debug!(cost, priority = ?remote.suggested_priority, "analysis completed");

        Ok(AnalysisOutcome::Admitted(Analysis {
            suggested_priority: remote.suggested_priority,
            suggested_response: remote.suggested_response,
            tokens_used: cost,
        }))
    }

    /// Analyze many texts, batched under the configured caps.
    ///
    /// Requests are planned with [`BatchPlanner`] over their raw estimates
    /// (the response reservation applies at admission, not planning), then
    /// processed one by one in flattened plan order. The first rejection
    /// aborts the rest of the call: the returned list ends with that single
    /// `Rejected` entry and the unattempted requests are simply absent.
    /// Skip-and-continue would be friendlier to late requests, but
    /// abort-on-reject is the contract callers already test against.
    pub async fn analyze_many(&self, texts: Vec<String>) -> Result<Vec<AnalysisOutcome>> {
        for text in &texts {
            if text.trim().is_empty() {
                return Err(Error::validation("analysis text must not be empty"));
            }
        }

        let planner = BatchPlanner::new(self.config.batch.clone());
        let plan = planner.plan(texts, |t| self.estimator.estimate(t));
        info!(
            batches = plan.len(),
            "processing batched analysis submission"
        );

        let mut outcomes = Vec::new();
        'batches: for batch in plan.iter() {
            for text in batch {
                let outcome = self.analyze_one(text).await?;
                let rejected = outcome.is_rejected();
                outcomes.push(outcome);
                if rejected {
                    break 'batches;
                }
            }
        }
        Ok(outcomes)
    }

    /// Current usage aggregated over `lookback`.
    pub fn usage_stats(&self, lookback: Duration) -> UsageStats {
        self.recorder.stats(lookback)
    }
}
