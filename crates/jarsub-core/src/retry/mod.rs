//! Retry and backoff policy.
//!
//! Error classification (connection failures, service unavailable) and
//! backoff decisions live here so every retriable call shares one policy.
//! Attempts for one logical call are strictly sequential.

mod classify;
mod policy;
mod run;
mod wait;

pub use classify::{classify, classify_curl_error};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::{run_with_retry, run_with_retry_sleeping};
pub use wait::{ExponentialWait, FixedWait, WaitStrategy};
