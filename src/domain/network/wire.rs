//! Wire types for `GET /v2/network`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BondMetricsResponse {
    pub total_active_bond: Option<String>,
    pub average_active_bond: Option<String>,
    pub median_active_bond: Option<String>,
    pub minimum_active_bond: Option<String>,
    pub maximum_active_bond: Option<String>,
    pub total_standby_bond: Option<String>,
    pub average_standby_bond: Option<String>,
    pub median_standby_bond: Option<String>,
    pub minimum_standby_bond: Option<String>,
    pub maximum_standby_bond: Option<String>,
}

/// Bond and reserve summary. Midgard omits sections freely, so every field
/// is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkResponse {
    pub bond_metrics: Option<BondMetricsResponse>,
    pub active_bonds: Vec<String>,
    pub standby_bonds: Vec<String>,
    pub active_node_count: Option<String>,
    pub standby_node_count: Option<String>,
    pub total_reserve: Option<String>,
    pub total_pooled_rune: Option<String>,
    #[serde(rename = "bondingAPY")]
    pub bonding_apy: Option<String>,
    #[serde(rename = "liquidityAPY")]
    pub liquidity_apy: Option<String>,
}
