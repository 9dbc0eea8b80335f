//! Wire types for `GET /v2/stats`.

use serde::{Deserialize, Serialize};

/// Global network statistics. Midgard sends every figure as a numeric string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub swap_volume: Option<String>,
    pub swap_count: Option<String>,
    #[serde(default)]
    pub swap_count_24h: Option<String>,
    #[serde(default)]
    pub swap_count_30d: Option<String>,
    #[serde(default)]
    pub daily_active_users: Option<String>,
    #[serde(default)]
    pub monthly_active_users: Option<String>,
    #[serde(default)]
    pub add_liquidity_volume: Option<String>,
    #[serde(default)]
    pub withdraw_volume: Option<String>,
    #[serde(default)]
    pub add_liquidity_count: Option<String>,
    #[serde(default)]
    pub withdraw_count: Option<String>,
    #[serde(default)]
    pub rune_depth: Option<String>,
    #[serde(default, rename = "runePriceUSD")]
    pub rune_price_usd: Option<String>,
}
