//! Remote analyzer seam and the deterministic stand-in.

use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Ticket priority levels, serialized lowercase for the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

/// What the remote analysis returns, before the coordinator attaches cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAnalysis {
    pub suggested_priority: Priority,
    pub suggested_response: String,
}

/// The external analysis call, behind a trait so the production network
/// implementation and the deterministic fake are interchangeable via
/// dependency injection.
///
/// Implementations may suspend (a real call does network I/O); the
/// coordinator never invokes this while holding a limiter or recorder lock.
#[async_trait]
pub trait RemoteAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<RemoteAnalysis>;
}

/// Deterministic content-inspection stand-in for the real analysis service.
///
/// Text containing the keyword (case-insensitive) suggests [`Priority::High`],
/// anything else [`Priority::Medium`], with a canned response either way.
#[derive(Debug, Clone)]
pub struct KeywordAnalyzer {
    keyword: String,
}

impl KeywordAnalyzer {
    pub fn new() -> Self {
        Self::with_keyword("urgent")
    }

    pub fn with_keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into().to_lowercase(),
        }
    }
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteAnalyzer for KeywordAnalyzer {
    async fn analyze(&self, text: &str) -> Result<RemoteAnalysis> {
        let suggested_priority = if text.to_lowercase().contains(&self.keyword) {
            Priority::High
        } else {
            Priority::Medium
        };
        Ok(RemoteAnalysis {
            suggested_priority,
            suggested_response: "Thank you for contacting support.".to_string(),
        })
    }
}
