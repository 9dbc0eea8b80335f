//! Wire types for `GET /v2/history/swaps` and `GET /v2/history/earnings`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapIntervalResponse {
    /// Interval start, Unix seconds.
    #[serde(default, deserialize_with = "crate::shared::serde_util::int_or_string::deserialize")]
    pub start_time: i64,
    #[serde(default, deserialize_with = "crate::shared::serde_util::numeric_string::deserialize")]
    pub total_volume: String,
    #[serde(default, deserialize_with = "crate::shared::serde_util::numeric_string::deserialize")]
    pub total_count: String,
}

/// `intervals` is required; a body without it is malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapHistoryResponse {
    pub intervals: Vec<SwapIntervalResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsIntervalResponse {
    #[serde(default, deserialize_with = "crate::shared::serde_util::int_or_string::deserialize")]
    pub start_time: i64,
    #[serde(
        default,
        alias = "earnings",
        deserialize_with = "crate::shared::serde_util::numeric_string::deserialize"
    )]
    pub total_earnings: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningsHistoryResponse {
    pub intervals: Vec<EarningsIntervalResponse>,
}
