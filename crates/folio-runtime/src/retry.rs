//! Retry policies for fallible deliveries.
//!
//! Backoff delays use fixed formulas (no jitter) so a replay on the
//! deterministic [`StepProgram`](crate::StepProgram) clock reproduces the
//! exact timing of every retry.
//!
//! # Example
//!
//! ```
//! use folio_runtime::{BackoffStrategy, RetryPolicy};
//! use std::time::Duration;
//!
//! let policy = RetryPolicy::new(3, BackoffStrategy::Exponential {
//!     base_ms: 100,
//!     max_ms: 5000,
//! });
//!
//! assert_eq!(policy.delay(0), Duration::from_millis(100));
//! assert_eq!(policy.delay(1), Duration::from_millis(200));
//! assert_eq!(policy.delay(2), Duration::from_millis(400));
//! ```

#![forbid(unsafe_code)]

use web_time::Duration;

/// Backoff strategy for retry delays.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum BackoffStrategy {
    /// Same delay before every retry.
    Fixed { delay_ms: u64 },
    /// `base_ms * 2^attempt`, capped at `max_ms`.
    Exponential { base_ms: u64, max_ms: u64 },
    /// `base_ms * (attempt + 1)`, capped at `max_ms`.
    Linear { base_ms: u64, max_ms: u64 },
}

/// How many times to retry and how long to wait in between.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetryPolicy {
    /// Retries after the initial attempt (0 = try once).
    pub max_retries: u32,
    pub backoff: BackoffStrategy,
}

impl RetryPolicy {
    #[must_use]
    pub fn new(max_retries: u32, backoff: BackoffStrategy) -> Self {
        Self {
            max_retries,
            backoff,
        }
    }

    /// Execute once, never retry.
    #[must_use]
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            backoff: BackoffStrategy::Fixed { delay_ms: 0 },
        }
    }

    /// Delay before retry number `attempt` (0-indexed).
    #[must_use]
    pub fn delay(&self, attempt: u32) -> Duration {
        match &self.backoff {
            BackoffStrategy::Fixed { delay_ms } => Duration::from_millis(*delay_ms),
            BackoffStrategy::Exponential { base_ms, max_ms } => {
                let multiplier = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
                Duration::from_millis(base_ms.saturating_mul(multiplier).min(*max_ms))
            }
            BackoffStrategy::Linear { base_ms, max_ms } => {
                let delay = base_ms.saturating_mul(u64::from(attempt) + 1);
                Duration::from_millis(delay.min(*max_ms))
            }
        }
    }

    /// Whether a failure after `failed_attempts` tries should be retried.
    #[must_use]
    pub fn should_retry(&self, failed_attempts: u32) -> bool {
        failed_attempts <= self.max_retries && failed_attempts > 0
    }

    /// Sum of all retry delays, for timeout budgeting.
    #[must_use]
    pub fn total_max_delay(&self) -> Duration {
        (0..self.max_retries).map(|i| self.delay(i)).sum()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::no_retry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponential_caps() {
        let policy = RetryPolicy::new(
            10,
            BackoffStrategy::Exponential {
                base_ms: 100,
                max_ms: 1000,
            },
        );
        assert_eq!(policy.delay(3), Duration::from_millis(800));
        assert_eq!(policy.delay(4), Duration::from_millis(1000));
        assert_eq!(policy.delay(200), Duration::from_millis(1000));
    }

    #[test]
    fn linear_and_fixed() {
        let linear = RetryPolicy::new(
            3,
            BackoffStrategy::Linear {
                base_ms: 250,
                max_ms: 600,
            },
        );
        assert_eq!(linear.delay(0), Duration::from_millis(250));
        assert_eq!(linear.delay(1), Duration::from_millis(500));
        assert_eq!(linear.delay(2), Duration::from_millis(600));
        assert_eq!(linear.total_max_delay(), Duration::from_millis(1350));

        let fixed = RetryPolicy::new(2, BackoffStrategy::Fixed { delay_ms: 40 });
        assert_eq!(fixed.total_max_delay(), Duration::from_millis(80));
    }

    #[test]
    fn should_retry_respects_budget() {
        let policy = RetryPolicy::new(2, BackoffStrategy::Fixed { delay_ms: 10 });
        assert!(!policy.should_retry(0));
        assert!(policy.should_retry(1));
        assert!(policy.should_retry(2));
        assert!(!policy.should_retry(3));
        assert!(!RetryPolicy::no_retry().should_retry(1));
    }
}
