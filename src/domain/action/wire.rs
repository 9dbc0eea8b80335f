//! Wire types for `GET /v2/actions`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinResponse {
    pub asset: String,
    #[serde(default, deserialize_with = "crate::shared::serde_util::numeric_string::deserialize")]
    pub amount: String,
}

/// One side of an action: who sent or received which coins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferResponse {
    #[serde(rename = "txID", default)]
    pub tx_id: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub coins: Vec<CoinResponse>,
}

/// A single ledger operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    /// Nanosecond Unix timestamp.
    #[serde(deserialize_with = "crate::shared::serde_util::int_or_string::deserialize")]
    pub date: i64,
    #[serde(default, deserialize_with = "crate::shared::serde_util::numeric_string::deserialize")]
    pub height: String,
    #[serde(rename = "in", default)]
    pub inputs: Vec<TransferResponse>,
    #[serde(rename = "out", default)]
    pub outputs: Vec<TransferResponse>,
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub pools: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionsResponse {
    pub actions: Vec<ActionResponse>,
    /// Total matching actions, when Midgard reports it.
    #[serde(default)]
    pub count: Option<String>,
}
