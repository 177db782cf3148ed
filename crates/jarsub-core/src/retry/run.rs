//! Retry loop: run a closure until success or the policy says stop.

use super::classify::classify;
use super::policy::{RetryDecision, RetryPolicy};
use super::wait::WaitStrategy;
use crate::error::ClientError;
use std::time::{Duration, Instant};

/// Runs `f` until it succeeds or the retry policy says to stop.
/// On retryable failure, sleeps for the backoff duration then tries again.
pub fn run_with_retry<T, W, F>(policy: &RetryPolicy<W>, f: F) -> Result<T, ClientError>
where
    W: WaitStrategy,
    F: FnMut() -> Result<T, ClientError>,
{
    run_with_retry_sleeping(policy, std::thread::sleep, f)
}

/// Like `run_with_retry` with an injected sleeper.
pub fn run_with_retry_sleeping<T, W, S, F>(
    policy: &RetryPolicy<W>,
    mut sleep: S,
    mut f: F,
) -> Result<T, ClientError>
where
    W: WaitStrategy,
    S: FnMut(Duration),
    F: FnMut() -> Result<T, ClientError>,
{
    let started = Instant::now();
    let mut attempt = 1u32;
    loop {
        match f() {
            Ok(v) => {
                if attempt > 1 {
                    tracing::debug!(attempt, "succeeded after retry");
                }
                return Ok(v);
            }
            Err(e) => {
                let kind = classify(&e);
                match policy.decide(attempt, kind, started.elapsed()) {
                    RetryDecision::NoRetry => {
                        if kind.is_retryable() {
                            tracing::warn!(attempt, "giving up: {}", e);
                        }
                        return Err(e);
                    }
                    RetryDecision::RetryAfter(d) => {
                        tracing::info!(attempt, ?kind, delay_ms = d.as_millis() as u64, "retrying: {}", e);
                        sleep(d);
                        attempt += 1;
                    }
                }
            }
        }
    }
}
