//! # Usage Accounting Module
//!
//! Append-only log of token-consuming events with time-bounded aggregation.
//!
//! Unlike the limiter, the recorder never discards events: `stats` filters by
//! lookback without mutating the log, so callers can ask for any window after
//! the fact. The trade-off is unbounded growth over a long-lived process; a
//! deployment that runs hot should compact or ring-buffer this log.

mod recorder;

pub use recorder::{UsageEvent, UsageRecorder, UsageStats};
