//! Conversion: ActionResponse → TransactionRow.

use super::asset::{asset_icon, asset_symbol};
use super::wire::{ActionResponse, CoinResponse, TransferResponse};
use super::TransactionRow;
use crate::shared::fmt::{format_amount, format_block_height, relative_age_at};
use chrono::{DateTime, Utc};

const MISSING: &str = "N/A";

fn non_empty_or_missing(s: &str) -> String {
    if s.is_empty() {
        MISSING.to_string()
    } else {
        s.to_string()
    }
}

fn first_coin(transfers: &[TransferResponse]) -> Option<&CoinResponse> {
    transfers.first().and_then(|t| t.coins.first())
}

impl TransactionRow {
    /// Build the display row, measuring age against `now`.
    ///
    /// Only the first input and first output transfer (and their first coin)
    /// are shown.
    pub fn from_action(action: &ActionResponse, now: DateTime<Utc>) -> Self {
        let input = action.inputs.first();
        let output = action.outputs.first();
        let from_coin = first_coin(&action.inputs);
        let to_coin = first_coin(&action.outputs);

        let from_asset_full = from_coin.map(|c| c.asset.clone()).unwrap_or_default();
        let to_asset_full = to_coin.map(|c| c.asset.clone()).unwrap_or_default();

        Self {
            hash: non_empty_or_missing(input.map(|t| t.tx_id.as_str()).unwrap_or_default()),
            tx_type: action.action_type.to_uppercase(),
            status: action.status.clone(),
            block_height: format_block_height(&action.height),
            age: relative_age_at(action.date, now),
            from: non_empty_or_missing(input.map(|t| t.address.as_str()).unwrap_or_default()),
            to: non_empty_or_missing(output.map(|t| t.address.as_str()).unwrap_or_default()),
            from_asset: asset_symbol(&from_asset_full).to_string(),
            to_asset: asset_symbol(&to_asset_full).to_string(),
            from_amount: format_amount(from_coin.map(|c| c.amount.as_str()).unwrap_or("0")),
            to_amount: format_amount(to_coin.map(|c| c.amount.as_str()).unwrap_or("0")),
            from_icon: asset_icon(&from_asset_full),
            to_icon: asset_icon(&to_asset_full),
            from_asset_full,
            to_asset_full,
        }
    }
}
