//! Fallback policy — what the dashboard shows when a source is unavailable.
//!
//! Two rules:
//! - Global stats, pools and network: an unavailable source leaves its slot
//!   as it was (absent on the first cycle). See [`live_or_absent`].
//! - Period history: an unavailable swap series swaps the whole period view
//!   for a fixed simulated bundle. Live and simulated data never mix within
//!   one period. See [`simulated_period`].

use crate::chart::ChartGeometry;
use crate::dashboard::view::{PeriodMetrics, PeriodView};
use crate::error::DashboardError;
use crate::shared::{Period, Provenance};

/// Independently fetched upstream sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Stats,
    Pools,
    Network,
    SwapHistory,
    EarningsHistory,
    Actions,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Pools => "pools",
            Self::Network => "network",
            Self::SwapHistory => "swap_history",
            Self::EarningsHistory => "earnings_history",
            Self::Actions => "actions",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Log a failed source and turn it into an absent value.
pub fn live_or_absent<T>(source: Source, result: Result<T, DashboardError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            let kind = match &e {
                DashboardError::Http(h) => h.kind(),
                DashboardError::Validation(_) | DashboardError::Serde(_) => "malformed_response",
                DashboardError::Config(_) => "config",
            };
            tracing::warn!(source = source.as_str(), kind, "{} unavailable: {}", source, e);
            None
        }
    }
}

struct SimulatedBundle {
    volume: &'static str,
    transactions: &'static str,
    avg_volume: &'static str,
    heights: [f64; 6],
}

fn bundle(period: Period) -> SimulatedBundle {
    match period {
        Period::Day => SimulatedBundle {
            volume: "$45.2M",
            transactions: "2,847",
            avg_volume: "$1.9M",
            heights: [150.0, 120.0, 140.0, 100.0, 90.0, 70.0],
        },
        Period::Week => SimulatedBundle {
            volume: "$312.8M",
            transactions: "18,542",
            avg_volume: "$44.7M",
            heights: [140.0, 110.0, 130.0, 95.0, 85.0, 75.0],
        },
        Period::Month => SimulatedBundle {
            volume: "$1.2B",
            transactions: "76,891",
            avg_volume: "$40.1M",
            heights: [130.0, 115.0, 125.0, 105.0, 95.0, 85.0],
        },
    }
}

/// Placeholder metrics for `period`.
pub fn simulated_metrics(period: Period) -> PeriodMetrics {
    let b = bundle(period);
    PeriodMetrics {
        volume: b.volume.to_string(),
        transactions: b.transactions.to_string(),
        avg_volume: b.avg_volume.to_string(),
        earnings: None,
    }
}

/// Placeholder chart for `period`.
pub fn simulated_chart(period: Period) -> ChartGeometry {
    ChartGeometry::from_heights(&bundle(period).heights)
}

/// Complete simulated view for `period`.
pub fn simulated_period(period: Period) -> PeriodView {
    tracing::info!(period = period.label(), "using simulated period data");
    PeriodView {
        period,
        provenance: Provenance::Simulated,
        chart: simulated_chart(period),
        metrics: simulated_metrics(period),
    }
}

/// Simulated view for a selector label; unknown labels get the `24H` bundle.
pub fn simulated_period_for_label(label: &str) -> PeriodView {
    simulated_period(Period::from_label(label))
}
