//! Global stats domain — network-wide volume, activity and price.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};

/// Validated global stats. Values stay as the numeric strings Midgard sent;
/// formatting happens in the view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalStats {
    /// Lifetime swap volume, base units.
    pub swap_volume: String,
    pub swap_count: String,
    pub swap_count_24h: String,
    pub swap_count_30d: String,
    pub daily_active_users: String,
    pub monthly_active_users: String,
    /// Lifetime liquidity added, base units.
    pub add_liquidity_volume: String,
    pub withdraw_volume: String,
    pub add_liquidity_count: String,
    pub withdraw_count: String,
    pub rune_depth: String,
    /// RUNE price in USD (display units, not base units).
    pub rune_price_usd: String,
}
