//! Pluggable wait strategies between attempts.

use std::time::Duration;

/// Delay to wait after a failed attempt. `attempt` is 1-based and names the
/// attempt that just failed.
pub trait WaitStrategy {
    fn wait(&self, attempt: u32) -> Duration;
}

/// Same delay after every failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWait(pub Duration);

impl WaitStrategy for FixedWait {
    fn wait(&self, _attempt: u32) -> Duration {
        self.0
    }
}

/// `base * 2^(attempt-1)`, capped at `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExponentialWait {
    pub base: Duration,
    pub max: Duration,
}

impl Default for ExponentialWait {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(250),
            max: Duration::from_secs(30),
        }
    }
}

impl WaitStrategy for ExponentialWait {
    fn wait(&self, attempt: u32) -> Duration {
        let exp = 1u32 << attempt.saturating_sub(1).min(16);
        self.base.saturating_mul(exp).min(self.max)
    }
}

impl<W: WaitStrategy + ?Sized> WaitStrategy for &W {
    fn wait(&self, attempt: u32) -> Duration {
        (**self).wait(attempt)
    }
}
