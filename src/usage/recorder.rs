use serde::Serialize;
use std::sync::RwLock;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// One recorded token-consuming event. Immutable once appended.
#[derive(Debug, Clone)]
pub struct UsageEvent {
    pub at: Instant,
    pub tokens: u64,
    pub category: String,
}

/// Aggregated usage over a lookback window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsageStats {
    pub total_tokens: u64,
    pub requests: u64,
    /// `total_tokens / requests`, truncating; 0 when there are no requests.
    pub average_tokens_per_request: u64,
}

/// Append-only usage log.
///
/// Appends take the write lock; `stats` takes the read lock and never
/// mutates, so concurrent readers see a consistent snapshot while writers
/// queue behind them.
#[derive(Debug, Default)]
pub struct UsageRecorder {
    events: RwLock<Vec<UsageEvent>>,
}

impl UsageRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event with the current timestamp. Never fails.
    pub fn record(&self, tokens: u64, category: impl Into<String>) {
        let category = category.into();
        debug!(tokens, category = %category, "usage recorded");
        let mut events = self.events.write().unwrap();
        events.push(UsageEvent {
            at: Instant::now(),
            tokens,
            category,
        });
    }

    /// Aggregate events newer than `lookback`.
    ///
    /// An event is counted iff `now - at < lookback`; one exactly `lookback`
    /// old is excluded. The stored log is left untouched.
    pub fn stats(&self, lookback: Duration) -> UsageStats {
        let now = Instant::now();
        let events = self.events.read().unwrap();

        let mut total_tokens = 0u64;
        let mut requests = 0u64;
        for event in events.iter() {
            if now.duration_since(event.at) < lookback {
                total_tokens += event.tokens;
                requests += 1;
            }
        }

        let average_tokens_per_request = if requests > 0 {
            total_tokens / requests
        } else {
            0
        };

        UsageStats {
            total_tokens,
            requests,
            average_tokens_per_request,
        }
    }

    /// Total number of events ever recorded, regardless of age.
    pub fn len(&self) -> usize {
        self.events.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
