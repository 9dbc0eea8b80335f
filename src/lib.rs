//! # Midgard Dashboard
//!
//! View models for a THORChain network dashboard, fed by the read-only
//! Midgard API.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Formatting, domain models, chart geometry and the fallback
//!    policy (always available, no I/O)
//! 2. **HTTP API** — `MidgardHttp` with opt-in retry policies
//! 3. **High-Level Client** — `MidgardClient` with one sub-client per source
//! 4. **Dashboard** — `MetricsAggregator` (polled global metrics + period
//!    view) and `TransactionFeed` (paged actions)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use midgard_dashboard::prelude::*;
//!
//! let client = MidgardClient::builder().build()?;
//!
//! let metrics = client.metrics();
//! let _timer = metrics.start(client.refresh_interval());
//! metrics.select_period(Period::Week).await;
//! println!("TVL {}", metrics.snapshot().await.metrics.tvl_display());
//!
//! let feed = client.transaction_feed();
//! feed.set_filter(FilterLabel::L1Swaps).await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared types, unit conversion and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Volume series → SVG chart geometry.
pub mod chart;

/// What to show when a source is unavailable.
pub mod fallback;

/// Error types.
pub mod error;

/// Endpoint and polling defaults.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `MidgardClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Dashboard ───────────────────────────────────────────────────────

/// Aggregated state and view models.
pub mod dashboard;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{Period, Provenance};

    // Domain types
    pub use crate::domain::action::{ActionsQuery, FilterLabel, TransactionRow};
    pub use crate::domain::history::{EarningsSample, PeriodTotals, RawSample};
    pub use crate::domain::network::NetworkSummary;
    pub use crate::domain::pool::{Pool, PoolStatus};
    pub use crate::domain::stats::GlobalStats;

    // Chart + fallback
    pub use crate::chart::{ChartGeometry, PlotPoint};
    pub use crate::fallback::Source;

    // Errors
    pub use crate::error::{DashboardError, HttpError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_REFRESH_INTERVAL};

    // View models
    pub use crate::dashboard::{
        compute_page_window, MetricsView, PageToken, PeriodMetrics, PeriodView, Phase,
    };

    // HTTP client, sub-clients and dashboard components
    #[cfg(feature = "http")]
    pub use crate::client::{
        ActionsClient, HistoryClient, MidgardClient, MidgardClientBuilder, NetworkClient,
        PoolsClient, StatsClient,
    };
    #[cfg(feature = "http")]
    pub use crate::dashboard::{
        DashboardSnapshot, FeedSnapshot, MetricsAggregator, RefreshHandle, TransactionFeed,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
