//! View models handed to presentation.
//!
//! `MetricsView` has one slot per independent source. Slots are only ever
//! replaced through [`MetricsView::merge`], which returns a new view; the
//! derived TVL and pool count are recomputed on every merge.

use crate::chart::ChartGeometry;
use crate::domain::history::{total_earnings, EarningsSample, PeriodTotals, RawSample};
use crate::domain::network::NetworkSummary;
use crate::domain::pool::{total_value_locked, Pool};
use crate::domain::stats::GlobalStats;
use crate::shared::fmt::{
    format_amount, format_base_units_volume, format_count, format_magnitude, format_usd_price,
    group_thousands,
};
use crate::shared::units::to_f64_lossy;
use crate::shared::{Period, Provenance};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Phase ───────────────────────────────────────────────────────────────────

/// Dashboard lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No refresh cycle has completed; show skeletons.
    #[default]
    Loading,
    /// At least one cycle produced data. Later polls never leave this phase.
    Ready,
    /// Every completed cycle so far came back empty; show "unable to load".
    Unavailable,
}

impl Phase {
    /// Phase after a cycle completes with (`true`) or without usable data.
    pub fn after_cycle(self, has_data: bool) -> Self {
        match (self, has_data) {
            (_, true) => Phase::Ready,
            (Phase::Ready, false) => Phase::Ready,
            (_, false) => Phase::Unavailable,
        }
    }
}

// ─── MetricsView ─────────────────────────────────────────────────────────────

/// A single slot's worth of fresh data.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotUpdate {
    Stats(GlobalStats),
    Pools(Vec<Pool>),
    Network(NetworkSummary),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsView {
    pub stats: Option<GlobalStats>,
    pub pools: Option<Vec<Pool>>,
    pub network: Option<NetworkSummary>,
    tvl: Decimal,
    active_pools: usize,
}

impl MetricsView {
    /// New view with `update`'s slot replaced and the rest carried over.
    pub fn merge(&self, update: SlotUpdate) -> Self {
        let mut next = self.clone();
        match update {
            SlotUpdate::Stats(s) => next.stats = Some(s),
            SlotUpdate::Pools(p) => next.pools = Some(p),
            SlotUpdate::Network(n) => next.network = Some(n),
        }
        let pools = next.pools.as_deref().unwrap_or_default();
        next.tvl = total_value_locked(pools);
        next.active_pools = pools.len();
        next
    }

    pub fn has_data(&self) -> bool {
        self.stats.is_some() || self.pools.is_some() || self.network.is_some()
    }

    /// Total value locked, display units. Zero without pool data.
    pub fn tvl(&self) -> Decimal {
        self.tvl
    }

    pub fn active_pools(&self) -> usize {
        self.active_pools
    }

    // ── Display accessors; absent slots render as zero ──────────────────

    pub fn tvl_display(&self) -> String {
        format_magnitude(to_f64_lossy(&self.tvl))
    }

    fn stat(&self, f: impl Fn(&GlobalStats) -> &str) -> &str {
        self.stats.as_ref().map(f).unwrap_or("0")
    }

    pub fn swap_volume_display(&self) -> String {
        format_base_units_volume(self.stat(|s| &s.swap_volume))
    }

    pub fn add_liquidity_volume_display(&self) -> String {
        format_base_units_volume(self.stat(|s| &s.add_liquidity_volume))
    }

    pub fn total_swaps_display(&self) -> String {
        format_count(self.stat(|s| &s.swap_count))
    }

    pub fn swaps_24h_display(&self) -> String {
        format_count(self.stat(|s| &s.swap_count_24h))
    }

    pub fn daily_active_users_display(&self) -> String {
        format_count(self.stat(|s| &s.daily_active_users))
    }

    pub fn monthly_active_users_display(&self) -> String {
        format_count(self.stat(|s| &s.monthly_active_users))
    }

    pub fn rune_price_display(&self) -> String {
        format_usd_price(self.stat(|s| &s.rune_price_usd))
    }

    pub fn active_pools_display(&self) -> String {
        group_thousands(&self.active_pools.to_string())
    }

    /// Active plus standby bond, in RUNE.
    pub fn total_bond_display(&self) -> String {
        let bond = self
            .network
            .as_ref()
            .map(|n| n.total_bond())
            .unwrap_or_default();
        format_amount(&bond.to_string())
    }

    pub fn active_nodes_display(&self) -> String {
        let count = self.network.as_ref().map(|n| n.active_node_count).unwrap_or(0);
        group_thousands(&count.to_string())
    }
}

// ─── Period view ─────────────────────────────────────────────────────────────

/// Formatted totals for the selected period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodMetrics {
    pub volume: String,
    pub transactions: String,
    pub avg_volume: String,
    /// Only present when the earnings series was live.
    pub earnings: Option<String>,
}

/// Chart and totals for one period, always replaced as a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodView {
    pub period: Period,
    pub provenance: Provenance,
    pub chart: ChartGeometry,
    pub metrics: PeriodMetrics,
}

impl PeriodView {
    /// Build from live series. `None` when the swap series is empty, which
    /// the caller treats like an unavailable source.
    pub fn from_live(
        period: Period,
        swaps: &[RawSample],
        earnings: Option<&[EarningsSample]>,
    ) -> Option<Self> {
        let totals = PeriodTotals::from_samples(swaps)?;
        Some(Self {
            period,
            provenance: Provenance::Live,
            chart: ChartGeometry::from_samples(swaps),
            metrics: PeriodMetrics {
                volume: format_magnitude(to_f64_lossy(&totals.volume)),
                transactions: format_count(&totals.count.to_string()),
                avg_volume: format_magnitude(to_f64_lossy(&totals.avg_volume)),
                earnings: earnings.map(|e| format_magnitude(to_f64_lossy(&total_earnings(e)))),
            },
        })
    }
}
