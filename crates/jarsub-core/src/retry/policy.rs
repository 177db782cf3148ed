use super::wait::{ExponentialWait, WaitStrategy};
use std::time::Duration;

/// Classification of a failed attempt for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network-level failure (refused, DNS, reset, nothing received).
    Connection,
    /// Server answered 503.
    ServiceUnavailable,
    /// Attempt hit its timeout. Not retried.
    Timeout,
    /// Anything else (4xx, other 5xx, local errors). Not retried.
    Other,
}

impl ErrorKind {
    pub fn is_retryable(self) -> bool {
        matches!(self, ErrorKind::Connection | ErrorKind::ServiceUnavailable)
    }
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry; surface the last failure.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Bounded retry with a pluggable wait strategy.
#[derive(Debug, Clone)]
pub struct RetryPolicy<W = ExponentialWait> {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Stop once the next wait would end past this much time since the first attempt.
    pub max_elapsed: Option<Duration>,
    pub wait: W,
}

impl Default for RetryPolicy<ExponentialWait> {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            max_elapsed: None,
            wait: ExponentialWait::default(),
        }
    }
}

impl<W: WaitStrategy> RetryPolicy<W> {
    pub fn new(max_attempts: u32, wait: W) -> Self {
        Self {
            max_attempts,
            max_elapsed: None,
            wait,
        }
    }

    pub fn with_max_elapsed(mut self, max_elapsed: Duration) -> Self {
        self.max_elapsed = Some(max_elapsed);
        self
    }

    /// `attempt` is 1-based (1 = first attempt); `elapsed` is measured from
    /// the start of the first attempt.
    pub fn decide(&self, attempt: u32, kind: ErrorKind, elapsed: Duration) -> RetryDecision {
        if !kind.is_retryable() || attempt >= self.max_attempts {
            return RetryDecision::NoRetry;
        }
        let delay = self.wait.wait(attempt);
        if let Some(limit) = self.max_elapsed {
            if elapsed.saturating_add(delay) > limit {
                return RetryDecision::NoRetry;
            }
        }
        RetryDecision::RetryAfter(delay)
    }
}
