//! Pool domain — liquidity pools and the TVL derived from them.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::units::BASE_UNIT_SCALE;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Pool lifecycle status as reported by Midgard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolStatus {
    Available,
    Staged,
    Suspended,
    Unknown,
}

/// Case-insensitive; anything unrecognized is `Unknown`, so parsing never fails.
impl FromStr for PoolStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "available" => Self::Available,
            "staged" => Self::Staged,
            "suspended" => Self::Suspended,
            _ => Self::Unknown,
        })
    }
}

impl PoolStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Staged => "staged",
            Self::Suspended => "suspended",
            Self::Unknown => "unknown",
        }
    }
}

/// A liquidity pool. Depths and volume are in base units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    /// Full asset identifier, e.g. `BTC.BTC` or `ETH.USDC-0XA0B8…`.
    pub asset: String,
    pub asset_depth: Decimal,
    pub rune_depth: Decimal,
    pub volume_24h: Decimal,
    /// Annualized yield as a fraction (`0.12` is 12%).
    pub pool_apy: Decimal,
    pub status: PoolStatus,
}

impl Pool {
    /// RUNE side of the pool in display units.
    pub fn rune_depth_units(&self) -> Decimal {
        self.rune_depth / Decimal::from(BASE_UNIT_SCALE)
    }
}

/// Total value locked, in RUNE display units.
///
/// Each pool holds equal value on both sides, so its value is twice its RUNE
/// depth.
pub fn total_value_locked(pools: &[Pool]) -> Decimal {
    pools
        .iter()
        .map(Pool::rune_depth_units)
        .sum::<Decimal>()
        * Decimal::TWO
}
