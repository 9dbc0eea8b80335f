//! Network domain — node bonds and protocol reserve.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bond/reserve summary. Amounts are in base units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSummary {
    pub total_active_bond: Decimal,
    pub total_standby_bond: Decimal,
    pub active_node_count: u32,
    pub standby_node_count: u32,
    pub total_reserve: Decimal,
    pub total_pooled_rune: Decimal,
    /// Fractions, `0.05` is 5%.
    pub bonding_apy: Decimal,
    pub liquidity_apy: Decimal,
}

impl NetworkSummary {
    /// Active plus standby bond, base units.
    pub fn total_bond(&self) -> Decimal {
        self.total_active_bond + self.total_standby_bond
    }
}
