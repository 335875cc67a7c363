//! Summarization collaborator boundary and retry policy

use std::time::Duration;
use thiserror::Error;

/// Summarization error types
#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("summarization failed: {0}")]
    Failed(String),

    #[error("summarization timed out")]
    Timeout,

    #[error("summarization rate limited")]
    RateLimited,
}

impl SummarizeError {
    /// Only transient provider conditions are worth retrying
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout | Self::RateLimited)
    }
}

/// External summarization collaborator
///
/// The single hook toward a hosted model. Prompt construction, model
/// selection, and authentication are the implementer's concern; the
/// implementation is expected to bound its own network call by
/// [`RetryPolicy::timeout`].
pub trait Summarizer {
    fn summarize(&self, text: &str) -> Result<String, SummarizeError>;
}

/// Retry configuration for summarization calls
///
/// Explicit configuration rather than a hidden constant: callers decide how
/// many attempts a transient failure is worth and how long each call may
/// block.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    /// Deadline an implementation should apply to a single call
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff: Duration::from_secs(4),
            max_backoff: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Backoff before the retry following `attempt` (1-based), doubling per
    /// attempt and clamped at `max_backoff`
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let multiplier = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.initial_backoff
            .saturating_mul(multiplier)
            .min(self.max_backoff)
    }
}

/// Drive a summarization call with bounded retries
///
/// Non-retryable errors and attempt exhaustion are returned to the caller,
/// which is expected to fall back to a static placeholder rather than fail.
pub fn summarize_with_retry(
    summarizer: &dyn Summarizer,
    text: &str,
    policy: &RetryPolicy,
) -> Result<String, SummarizeError> {
    let mut attempt = 1;
    loop {
        match summarizer.summarize(text) {
            Ok(summary) => return Ok(summary),
            Err(err) if err.is_retryable() && attempt < policy.max_attempts => {
                tracing::debug!(attempt, error = %err, "summarization failed, retrying");
                std::thread::sleep(policy.backoff_for(attempt));
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
