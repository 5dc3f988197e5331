use std::collections::{HashMap, VecDeque};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct SlidingWindowConfig {
    /// Units admissible per window per identifier (requests or tokens).
    pub max_units: u64,
    /// Length of the sliding window.
    pub window: Duration,
}

impl SlidingWindowConfig {
    /// Create a new config with default values (10 units per 60 seconds).
    pub fn new() -> Self {
        Self {
            max_units: 10,
            window: Duration::from_secs(60),
        }
    }

    /// Set the maximum units per window.
    pub fn with_max_units(mut self, max_units: u64) -> Self {
        self.max_units = max_units;
        self
    }

    /// Set the window duration.
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }
}

impl Default for SlidingWindowConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
struct Observation {
    at: Instant,
    cost: u64,
}

/// Sliding-window check-and-reserve admission controller.
///
/// Keeps, per identifier, the observations that fell inside the current
/// window. Stale observations are pruned lazily on access; memory per
/// identifier stays bounded as long as the identifier keeps being checked.
/// State lives in process memory only and does not survive a restart.
pub struct SlidingWindowLimiter {
    config: SlidingWindowConfig,
    windows: Mutex<HashMap<String, VecDeque<Observation>>>,
}

impl SlidingWindowLimiter {
    pub fn new(config: SlidingWindowConfig) -> Self {
        Self {
            config,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &SlidingWindowConfig {
        &self.config
    }

    /// Drop observations that have aged out of the window.
    ///
    /// Retention predicate: `now - at < window`. An observation exactly
    /// `window` old is evicted.
    fn prune(window: Duration, observations: &mut VecDeque<Observation>, now: Instant) {
        while let Some(front) = observations.front() {
            if now.duration_since(front.at) >= window {
                observations.pop_front();
            } else {
                break;
            }
        }
    }

    /// Check whether `cost` units fit in the identifier's current window,
    /// and reserve them if so.
    ///
    /// Returns true and records the observation iff admitting `cost` keeps
    /// the identifier's windowed total within `max_units`; otherwise returns
    /// false and records nothing. The prune-check-record sequence runs as a
    /// single critical section, so concurrent callers cannot jointly
    /// over-admit an identifier.
    ///
    /// A zero cost is a programming error and panics rather than silently
    /// admitting for free.
    pub async fn is_allowed(&self, identifier: &str, cost: u64) -> bool {
        assert!(cost > 0, "admission cost must be positive");

        let mut windows = self.windows.lock().await;
        let observations = windows.entry(identifier.to_string()).or_default();
        let now = Instant::now();
        Self::prune(self.config.window, observations, now);

        let used: u64 = observations.iter().map(|o| o.cost).sum();
        if used.saturating_add(cost) <= self.config.max_units {
            observations.push_back(Observation { at: now, cost });
            debug!(identifier, cost, used, "admission granted");
            true
        } else {
            warn!(
                identifier,
                cost,
                used,
                max_units = self.config.max_units,
                "admission rejected"
            );
            false
        }
    }

    /// Cost-1 admission check for the request-counting use.
    pub async fn is_request_allowed(&self, identifier: &str) -> bool {
        self.is_allowed(identifier, 1).await
    }

    /// Units still admissible for `identifier` right now. Records nothing.
    ///
    /// Advisory only (suitable for a rate-limit response header): the figure
    /// can be stale by the time a later `is_allowed` call runs.
    pub async fn remaining(&self, identifier: &str) -> u64 {
        let mut windows = self.windows.lock().await;
        // Read-only path: an identifier never checked gets no map entry.
        let used: u64 = match windows.get_mut(identifier) {
            Some(observations) => {
                Self::prune(self.config.window, observations, Instant::now());
                observations.iter().map(|o| o.cost).sum()
            }
            None => 0,
        };
        self.config.max_units.saturating_sub(used)
    }
}
