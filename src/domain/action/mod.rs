//! Action domain — ledger operations shown in the transaction feed.

pub mod asset;
#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::network::ACTIONS_PAGE_SIZE;
use crate::shared::fmt::truncate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ─── FilterLabel ─────────────────────────────────────────────────────────────

/// Feed tab. Several tabs share an upstream action type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterLabel {
    All,
    #[default]
    L1Swaps,
    Secure,
    TradeSwaps,
    SynthSwaps,
    LpSavers,
    RunePool,
    Send,
    Refund,
    Switch,
    Contract,
    Tcy,
}

impl FilterLabel {
    /// Tabs in display order.
    pub const ALL: [FilterLabel; 12] = [
        FilterLabel::All,
        FilterLabel::L1Swaps,
        FilterLabel::Secure,
        FilterLabel::TradeSwaps,
        FilterLabel::SynthSwaps,
        FilterLabel::LpSavers,
        FilterLabel::RunePool,
        FilterLabel::Send,
        FilterLabel::Refund,
        FilterLabel::Switch,
        FilterLabel::Contract,
        FilterLabel::Tcy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::L1Swaps => "L1 Swaps",
            Self::Secure => "Secure",
            Self::TradeSwaps => "Trade Swaps",
            Self::SynthSwaps => "Synth Swaps",
            Self::LpSavers => "LP / Savers",
            Self::RunePool => "RUNEPool",
            Self::Send => "Send",
            Self::Refund => "Refund",
            Self::Switch => "Switch",
            Self::Contract => "Contract",
            Self::Tcy => "TCY",
        }
    }

    /// Upstream `type` parameter. `None` means the parameter is omitted and
    /// every action type is returned.
    pub fn action_types(&self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::L1Swaps | Self::TradeSwaps | Self::SynthSwaps => Some("swap"),
            Self::Secure | Self::RunePool => Some("addLiquidity"),
            Self::LpSavers => Some("addLiquidity,withdraw"),
            Self::Send => Some("send"),
            Self::Refund => Some("refund"),
            Self::Switch => Some("switch"),
            Self::Contract | Self::Tcy => Some("donate"),
        }
    }

    /// Resolve a tab label. Unknown labels show everything (`All`).
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(Self::All)
    }
}

impl FromStr for FilterLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown filter: {}", s))
    }
}

impl std::fmt::Display for FilterLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ─── ActionsQuery ────────────────────────────────────────────────────────────

/// One page of the actions listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionsQuery {
    pub filter: FilterLabel,
    /// 1-based; 0 is treated as 1.
    pub page: u32,
}

impl ActionsQuery {
    pub fn new(filter: FilterLabel, page: u32) -> Self {
        Self { filter, page }
    }

    pub fn limit(&self) -> u32 {
        ACTIONS_PAGE_SIZE
    }

    pub fn offset(&self) -> u32 {
        self.page.max(1).saturating_sub(1) * ACTIONS_PAGE_SIZE
    }

    /// Query string without the leading `?`.
    pub fn query_string(&self) -> String {
        let mut q = format!("limit={}&offset={}", self.limit(), self.offset());
        if let Some(types) = self.filter.action_types() {
            q = format!("{}&type={}", q, urlencoding::encode(types));
        }
        q
    }
}

// ─── TransactionRow ──────────────────────────────────────────────────────────

/// Display row for one action. Hashes and addresses are kept in full so
/// they can be copied; use the `short_*` accessors for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub hash: String,
    pub tx_type: String,
    pub status: String,
    pub block_height: String,
    pub age: String,
    pub from: String,
    pub to: String,
    pub from_asset: String,
    pub to_asset: String,
    pub from_asset_full: String,
    pub to_asset_full: String,
    pub from_amount: String,
    pub to_amount: String,
    pub from_icon: String,
    pub to_icon: String,
}

impl TransactionRow {
    pub fn short_hash(&self) -> String {
        truncate(&self.hash)
    }

    pub fn short_from(&self) -> String {
        truncate(&self.from)
    }

    pub fn short_to(&self) -> String {
        truncate(&self.to)
    }

    pub fn from_asset_tooltip(&self) -> String {
        asset::asset_tooltip(&self.from_asset_full)
    }

    pub fn to_asset_tooltip(&self) -> String {
        asset::asset_tooltip(&self.to_asset_full)
    }
}
