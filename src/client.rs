//! High-level client — `MidgardClient` with nested sub-client accessors.
//!
//! Each Midgard source has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, configuration, and accessor methods. The
//! dashboard components ([`MetricsAggregator`], [`TransactionFeed`]) are
//! created from here too.

use crate::dashboard::{MetricsAggregator, TransactionFeed};
use crate::domain::action::client::Actions;
use crate::domain::history::client::History;
use crate::domain::network::client::Network;
use crate::domain::pool::client::Pools;
use crate::domain::stats::client::Stats;
use crate::error::DashboardError;
use crate::http::{MidgardHttp, RetryPolicy};
use crate::network;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::action::client::Actions as ActionsClient;
pub use crate::domain::history::client::History as HistoryClient;
pub use crate::domain::network::client::Network as NetworkClient;
pub use crate::domain::pool::client::Pools as PoolsClient;
pub use crate::domain::stats::client::Stats as StatsClient;

/// The primary entry point.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct MidgardClient {
    pub(crate) http: MidgardHttp,
    retry: RetryPolicy,
    refresh_interval: Duration,
}

impl MidgardClient {
    pub fn builder() -> MidgardClientBuilder {
        MidgardClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn stats(&self) -> Stats<'_> {
        Stats { client: self }
    }

    pub fn pools(&self) -> Pools<'_> {
        Pools { client: self }
    }

    pub fn network(&self) -> Network<'_> {
        Network { client: self }
    }

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }

    pub fn actions(&self) -> Actions<'_> {
        Actions { client: self }
    }

    // ── Dashboard components ─────────────────────────────────────────────

    /// A fresh metrics aggregator in the `Loading` phase.
    ///
    /// Call [`MetricsAggregator::start`] with [`Self::refresh_interval`] to
    /// begin polling.
    pub fn metrics(&self) -> MetricsAggregator {
        MetricsAggregator::new(self.clone())
    }

    /// A fresh transaction feed on its default filter, with no rows yet.
    pub fn transaction_feed(&self) -> TransactionFeed {
        TransactionFeed::new(self.clone())
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    pub(crate) fn retry_policy(&self) -> RetryPolicy {
        self.retry.clone()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct MidgardClientBuilder {
    base_url: String,
    timeout: Duration,
    refresh_interval: Duration,
    retry: RetryPolicy,
}

impl Default for MidgardClientBuilder {
    fn default() -> Self {
        Self {
            base_url: network::DEFAULT_API_URL.to_string(),
            timeout: network::DEFAULT_REQUEST_TIMEOUT,
            refresh_interval: network::DEFAULT_REFRESH_INTERVAL,
            retry: RetryPolicy::None,
        }
    }
}

fn env_secs(name: &str) -> Result<Option<Duration>, DashboardError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .map(|secs| Some(Duration::from_secs(secs)))
            .ok_or_else(|| {
                DashboardError::Config(format!("{} must be a positive integer, got {:?}", name, raw))
            }),
        Err(_) => Ok(None),
    }
}

impl MidgardClientBuilder {
    /// Defaults overridden by `MIDGARD_API_URL`, `MIDGARD_TIMEOUT_SECS` and
    /// `MIDGARD_REFRESH_SECS` when set.
    pub fn from_env() -> Result<Self, DashboardError> {
        let mut builder = Self::default();
        if let Ok(url) = std::env::var(network::ENV_API_URL) {
            builder = builder.base_url(&url);
        }
        if let Some(timeout) = env_secs(network::ENV_TIMEOUT_SECS)? {
            builder = builder.timeout(timeout);
        }
        if let Some(interval) = env_secs(network::ENV_REFRESH_SECS)? {
            builder = builder.refresh_interval(interval);
        }
        Ok(builder)
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Retry policy applied to every request. Defaults to no retries.
    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    pub fn build(self) -> Result<MidgardClient, DashboardError> {
        let base_url = self.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(DashboardError::Config(format!(
                "base URL must be http(s), got {:?}",
                self.base_url
            )));
        }
        if self.refresh_interval.is_zero() {
            return Err(DashboardError::Config(
                "refresh interval must be non-zero".to_string(),
            ));
        }

        Ok(MidgardClient {
            http: MidgardHttp::new(base_url, self.timeout)?,
            retry: self.retry,
            refresh_interval: self.refresh_interval,
        })
    }
}
