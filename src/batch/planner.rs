use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPlanConfig {
    /// Maximum number of items per batch.
    pub max_batch_size: usize,
    /// Maximum summed item cost per batch.
    pub max_tokens_per_batch: u64,
}

impl BatchPlanConfig {
    /// Create a new config with default values (5 items, 10000 tokens).
    pub fn new() -> Self {
        Self {
            max_batch_size: 5,
            max_tokens_per_batch: 10_000,
        }
    }

    pub fn with_max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = max_batch_size;
        self
    }

    pub fn with_max_tokens_per_batch(mut self, max_tokens_per_batch: u64) -> Self {
        self.max_tokens_per_batch = max_tokens_per_batch;
        self
    }
}

impl Default for BatchPlanConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered sequence of batches produced by [`BatchPlanner::plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPlan<T> {
    batches: Vec<Vec<T>>,
}

impl<T> BatchPlan<T> {
    pub fn batches(&self) -> &[Vec<T>] {
        &self.batches
    }

    /// Number of batches in the plan.
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<T>> {
        self.batches.iter()
    }

    pub fn into_batches(self) -> Vec<Vec<T>> {
        self.batches
    }

    /// Collapse the plan back into the original input sequence.
    pub fn into_flattened(self) -> Vec<T> {
        self.batches.into_iter().flatten().collect()
    }
}

impl<T> IntoIterator for BatchPlan<T> {
    type Item = Vec<T>;
    type IntoIter = std::vec::IntoIter<Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.batches.into_iter()
    }
}

/// Greedy dual-cap partitioner. Stateless between calls.
#[derive(Debug, Clone, Default)]
pub struct BatchPlanner {
    config: BatchPlanConfig,
}

impl BatchPlanner {
    pub fn new(config: BatchPlanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BatchPlanConfig {
        &self.config
    }

    /// Partition `items` into batches, preserving order.
    ///
    /// Single greedy pass: an item goes into the current batch unless that
    /// would push the batch over either cap, in which case the batch is
    /// closed first. The "current batch is non-empty" guard is what lets an
    /// item costlier than the whole token budget occupy an over-budget
    /// singleton batch instead of looping forever or being dropped.
    pub fn plan<T, F>(&self, items: Vec<T>, cost: F) -> BatchPlan<T>
    where
        F: Fn(&T) -> u64,
    {
        assert!(self.config.max_batch_size > 0, "max_batch_size must be positive");
        assert!(
            self.config.max_tokens_per_batch > 0,
            "max_tokens_per_batch must be positive"
        );

        let mut batches: Vec<Vec<T>> = Vec::new();
        let mut current: Vec<T> = Vec::new();
        let mut current_tokens = 0u64;

        for item in items {
            let item_cost = cost(&item);
            if !current.is_empty()
                && (current.len() >= self.config.max_batch_size
                    || current_tokens.saturating_add(item_cost) > self.config.max_tokens_per_batch)
            {
                batches.push(std::mem::take(&mut current));
                current_tokens = 0;
            }
            current.push(item);
            current_tokens = current_tokens.saturating_add(item_cost);
        }
        if !current.is_empty() {
            batches.push(current);
        }

        debug!(
            batches = batches.len(),
            items = batches.iter().map(Vec::len).sum::<usize>(),
            "batch plan built"
        );
        BatchPlan { batches }
    }
}
