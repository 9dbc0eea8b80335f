//! Retry policies for HTTP requests.

use std::time::Duration;

/// Retry policy for an HTTP request.
///
/// The dashboard polls on a fixed schedule, so a failed source normally just
/// waits for the next cycle (`None`). Retries are opt-in through the client
/// builder.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// Fail once; the next poll is the retry.
    #[default]
    None,
    /// Retry on transport failures and 429/502/503/504 with backoff.
    Idempotent,
    /// Caller-provided backoff settings.
    Custom(RetryConfig),
}

/// Exponential backoff settings.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the initial request.
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_factor: f64,
    /// Spread each delay by ±25%.
    pub jitter: bool,
    /// Upstream statuses worth another attempt.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::idempotent()
    }
}

impl RetryConfig {
    /// Settings used by [`RetryPolicy::Idempotent`].
    pub fn idempotent() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(5),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![429, 502, 503, 504],
        }
    }

    /// Delay before retry number `attempt + 1` (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64
            * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let spread = capped * 0.25;
            (capped + (rand::random::<f64>() - 0.5) * 2.0 * spread).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }
}
