//! Wire types for `GET /v2/pools`.

use serde::{Deserialize, Serialize};

/// One pool as listed by Midgard. Depths and volumes are base-unit strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolResponse {
    pub asset: String,
    pub rune_depth: String,
    #[serde(default)]
    pub asset_depth: String,
    #[serde(default, rename = "volume24h")]
    pub volume_24h: String,
    #[serde(default, rename = "poolAPY")]
    pub pool_apy: String,
    #[serde(default)]
    pub status: String,
}
