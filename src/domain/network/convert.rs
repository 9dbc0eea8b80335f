//! Conversion: NetworkResponse → NetworkSummary.

use super::wire::NetworkResponse;
use super::NetworkSummary;
use crate::shared::units::parse_lossy;
use rust_decimal::Decimal;

fn sum_bonds(bonds: &[String]) -> Decimal {
    bonds.iter().map(|b| parse_lossy(b)).sum()
}

fn count_or(explicit: Option<&str>, fallback: usize) -> u32 {
    explicit
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(fallback as u32)
}

impl From<NetworkResponse> for NetworkSummary {
    /// Bond totals prefer `bondMetrics` and fall back to summing the
    /// per-node bond lists.
    fn from(source: NetworkResponse) -> Self {
        let metrics = source.bond_metrics.unwrap_or_default();
        let lossy = |v: Option<String>| v.as_deref().map(parse_lossy).unwrap_or_default();

        let total_active_bond = metrics
            .total_active_bond
            .as_deref()
            .map(parse_lossy)
            .unwrap_or_else(|| sum_bonds(&source.active_bonds));
        let total_standby_bond = metrics
            .total_standby_bond
            .as_deref()
            .map(parse_lossy)
            .unwrap_or_else(|| sum_bonds(&source.standby_bonds));

        NetworkSummary {
            total_active_bond,
            total_standby_bond,
            active_node_count: count_or(
                source.active_node_count.as_deref(),
                source.active_bonds.len(),
            ),
            standby_node_count: count_or(
                source.standby_node_count.as_deref(),
                source.standby_bonds.len(),
            ),
            total_reserve: lossy(source.total_reserve),
            total_pooled_rune: lossy(source.total_pooled_rune),
            bonding_apy: lossy(source.bonding_apy),
            liquidity_apy: lossy(source.liquidity_apy),
        }
    }
}
